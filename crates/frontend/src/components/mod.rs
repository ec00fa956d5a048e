mod nav_bar;
mod notice;
mod password_checklist;
mod spinner;
mod text_input;

pub use nav_bar::NavBar;
pub use notice::{Notice, NoticeKind};
pub use password_checklist::PasswordChecklist;
pub use spinner::LoadingSpinner as Spinner;
pub use text_input::TextInput;
