mod notifications;

pub use notifications::{DeliveryChannel, NotificationUseCase};
