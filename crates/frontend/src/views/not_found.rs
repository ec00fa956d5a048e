use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <section class="max-w-md mx-auto text-center py-20">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{"Page not found"}</h1>
            <p class="text-gray-600 mb-6">{"The page you asked for does not exist."}</p>
            <Link<Route> to={Route::Home} classes="text-emerald-700 hover:underline">
                {"Back to home"}
            </Link<Route>>
        </section>
    }
}
