//! Route table and guarded switch

use crate::storage::LocalTokenStore;
use crate::views::{DashboardView, HomeView, LoginView, NotFoundView, SignupView};
use portfolio_core::{before_each, Navigation, ProtectedRoute};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl ProtectedRoute for Route {
    fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard)
    }

    fn login() -> Self {
        Route::Login
    }
}

/// Render a route after the navigation guard has run
///
/// Storage is read on every call so a token removed by the HTTP
/// interceptor takes effect on the next navigation.
pub fn switch(route: Route) -> Html {
    match before_each(route, &LocalTokenStore) {
        Navigation::Proceed(route) => render(route),
        Navigation::Redirect(to) => html! { <Redirect<Route> {to} /> },
    }
}

fn render(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeView /> },
        Route::Login => html! { <LoginView /> },
        Route::Signup => html! { <SignupView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::NotFound => html! { <NotFoundView /> },
    }
}
