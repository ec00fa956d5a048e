use crate::auth::use_is_authenticated;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomeView)]
pub fn home_view() -> Html {
    let is_authenticated = use_is_authenticated();

    html! {
        <section class="max-w-3xl mx-auto text-center py-20 px-4">
            <h1 class="text-4xl font-bold text-gray-900 mb-4">{"Track your portfolio"}</h1>
            <p class="text-lg text-gray-600 mb-10">
                {"Keep every position in one place and see how your holdings add up."}
            </p>
            <div class="flex justify-center gap-4">
                if is_authenticated {
                    <Link<Route> to={Route::Dashboard} classes="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium">
                        {"Go to dashboard"}
                    </Link<Route>>
                } else {
                    <Link<Route> to={Route::Signup} classes="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg font-medium">
                        {"Create an account"}
                    </Link<Route>>
                    <Link<Route> to={Route::Login} classes="px-6 py-3 bg-white border border-gray-300 hover:bg-gray-50 text-gray-800 rounded-lg font-medium">
                        {"Log in"}
                    </Link<Route>>
                }
            </div>
        </section>
    }
}
