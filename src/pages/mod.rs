//! Pages

mod forgot_password;
mod home;
mod login;
mod register;
mod reset_password;
mod tasks;

pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use tasks::TasksPage;
