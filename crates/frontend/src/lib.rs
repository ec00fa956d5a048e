pub mod app;
pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod routes;
pub mod storage;
pub mod views;

pub use app::App;
pub use routes::Route;
pub use storage::LocalTokenStore;
