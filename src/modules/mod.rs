pub mod auth;
pub mod content;
pub mod editor;
pub mod i18n;
pub mod notification;
