//! Top navigation bar

use crate::auth::{use_is_authenticated, use_session, SessionAction};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let session = use_session();
    let is_authenticated = use_is_authenticated();
    let navigator = use_navigator();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-5xl mx-auto px-4 py-3 flex justify-between items-center">
                <Link<Route> to={Route::Home} classes="text-xl font-bold text-emerald-700">
                    {"Portfolio"}
                </Link<Route>>
                <div class="flex items-center gap-4 text-sm">
                    if is_authenticated {
                        <Link<Route> to={Route::Dashboard} classes="text-gray-700 hover:text-emerald-700">
                            {"Dashboard"}
                        </Link<Route>>
                        <button
                            onclick={on_logout}
                            class="px-3 py-1.5 bg-gray-100 hover:bg-gray-200 rounded-lg"
                        >
                            {"Logout"}
                        </button>
                    } else {
                        <Link<Route> to={Route::Login} classes="text-gray-700 hover:text-emerald-700">
                            {"Log in"}
                        </Link<Route>>
                        <Link<Route> to={Route::Signup} classes="px-3 py-1.5 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg">
                            {"Sign up"}
                        </Link<Route>>
                    }
                </div>
            </div>
        </nav>
    }
}
