use crate::auth::error_handler::{clear_unauthorized_callback, set_unauthorized_callback};
use crate::auth::{use_session, SessionAction, SessionProvider};
use crate::components::NavBar;
use crate::routes::{switch, Route};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <SessionProvider>
                <AppShell />
            </SessionProvider>
        </HashRouter>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session();
    let navigator = use_navigator();

    // 401 responses land here after the client cleared the token
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            set_unauthorized_callback(Rc::new(move || {
                session.dispatch(SessionAction::Expired);
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }));

            move || {
                clear_unauthorized_callback();
            }
        });
    }

    html! {
        <div class="min-h-screen bg-gray-50">
            <NavBar />
            <main>
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}
