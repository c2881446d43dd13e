pub mod contact;
pub mod email_settings;
pub mod webhook_settings;

pub use contact::{submit_contact_handler, ContactReceipt};
pub use email_settings::{
    get_email_settings_handler, test_email_settings_handler, update_email_settings_handler,
    TestSendQuery, TestSendResponse,
};
pub use webhook_settings::{
    get_webhook_settings_handler, test_webhook_settings_handler, update_webhook_settings_handler,
};
