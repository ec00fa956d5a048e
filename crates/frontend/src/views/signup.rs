//! Account creation form

use crate::auth::{use_session, SessionAction};
use crate::client::api_client;
use crate::components::{Notice, NoticeKind, PasswordChecklist, TextInput};
use crate::routes::Route;
use portfolio_core::{validate_email, validate_password, FormError, SignupForm, SignupRequest};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignupView)]
pub fn signup_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    let form = SignupForm {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        email: email.trim().to_string(),
        password: (*password).clone(),
    };
    let password_check = validate_password(&password);
    let can_submit = form.validate().is_ok() && !*submitting;

    let on_submit = {
        let form = form.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);

            let request = SignupRequest {
                first_name: form.first_name.clone(),
                last_name: form.last_name.clone(),
                email: form.email.clone(),
                password: form.password.clone(),
            };
            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = match api_client() {
                    Ok(client) => client.signup(&request).await,
                    Err(e) => Err(e),
                };

                submitting.set(false);
                match result {
                    Ok(response) => {
                        tracing::info!(user_id = response.user_id, "Account created");
                        session.dispatch(SessionAction::Notify(
                            "Account created. Please log in.".to_string(),
                        ));
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Signup failed");
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    let email_error = (!email.is_empty() && !validate_email(email.trim()))
        .then(|| AttrValue::from(FormError::InvalidEmail.to_string()));

    html! {
        <section class="max-w-md mx-auto py-16 px-4">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Create your account"}</h1>

            if let Some(error) = &*error {
                <Notice message={error.clone()} kind={NoticeKind::Error} />
            }

            <form onsubmit={on_submit} novalidate=true>
                <div class="grid grid-cols-2 gap-4">
                    <TextInput
                        id="first-name"
                        label="First name"
                        autocomplete="given-name"
                        value={(*first_name).clone()}
                        on_change={setter(&first_name)}
                    />
                    <TextInput
                        id="last-name"
                        label="Last name"
                        autocomplete="family-name"
                        value={(*last_name).clone()}
                        on_change={setter(&last_name)}
                    />
                </div>
                <TextInput
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value={(*email).clone()}
                    on_change={setter(&email)}
                    error={email_error}
                />
                <TextInput
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="new-password"
                    value={(*password).clone()}
                    on_change={setter(&password)}
                />
                <PasswordChecklist validation={password_check} />
                <button
                    type="submit"
                    class="w-full py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled={!can_submit}
                >
                    { if *submitting { "Creating account..." } else { "Sign up" } }
                </button>
            </form>

            <p class="text-sm text-gray-600 mt-6 text-center">
                {"Already have an account? "}
                <Link<Route> to={Route::Login} classes="text-emerald-700 hover:underline">
                    {"Log in"}
                </Link<Route>>
            </p>
        </section>
    }
}
