use portfolio_frontend::{logging, App};

fn main() {
    logging::init();
    tracing::info!("Starting portfolio frontend");
    yew::Renderer::<App>::new().render();
}
