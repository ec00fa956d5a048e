//! Login form

use crate::auth::{use_session, SessionAction};
use crate::client::api_client;
use crate::components::{Notice, NoticeKind, TextInput};
use crate::routes::Route;
use portfolio_core::{validate_email, FormError, LoginForm, LoginRequest};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |value: String| password.set(value))
    };

    let on_dismiss_notice = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| session.dispatch(SessionAction::DismissNotice))
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = LoginForm {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if let Err(e) = form.validate() {
                error.set(Some(e.to_string()));
                return;
            }

            error.set(None);
            submitting.set(true);

            let session = session.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let request = LoginRequest {
                    email: form.email,
                    password: form.password,
                };
                let result = match api_client() {
                    Ok(client) => client.login(&request).await,
                    Err(e) => Err(e),
                };

                submitting.set(false);
                match result {
                    Ok(response) => {
                        session.dispatch(SessionAction::Login(response.token));
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Login failed");
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
            <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Log in"}</h1>

            if let Some(notice) = &session.notice {
                <Notice message={notice.clone()} on_dismiss={on_dismiss_notice} />
            }
            if let Some(error) = &*error {
                <Notice message={error.clone()} kind={NoticeKind::Error} />
            }

            <form onsubmit={on_submit} novalidate=true>
                <TextInput
                    id="email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value={(*email).clone()}
                    on_change={on_email}
                    error={email_error}
                />
                <TextInput
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    on_change={on_password}
                />
                <button
                    type="submit"
                    class="w-full py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium disabled:opacity-50"
                    disabled={*submitting}
                >
                    { if *submitting { "Logging in..." } else { "Log in" } }
                </button>
            </form>

            <p class="text-sm text-gray-600 mt-6 text-center">
                {"No account yet? "}
                <Link<Route> to={Route::Signup} classes="text-emerald-700 hover:underline">
                    {"Sign up"}
                </Link<Route>>
            </p>
        </section>
    }
}
