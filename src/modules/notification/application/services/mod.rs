mod notification_service;
mod settings_store;

pub use notification_service::NotificationService;
pub use settings_store::{SettingsError, SettingsStore};
