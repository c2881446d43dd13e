pub mod login_admin;
pub mod logout_admin;
