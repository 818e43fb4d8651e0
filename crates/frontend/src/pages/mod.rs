//! Page components.

mod login;
mod projects;

pub use login::LoginPage;
pub use projects::ProjectsPage;
