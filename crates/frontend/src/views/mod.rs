mod dashboard;
mod home;
mod login;
mod not_found;
mod signup;

pub use dashboard::DashboardView;
pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use signup::SignupView;
