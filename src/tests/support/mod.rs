pub mod app_state_builder;
pub mod auth_helper;
pub mod editor_fixture;
pub mod http_stub;
pub mod stubs;
