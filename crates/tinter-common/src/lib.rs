pub mod color;
pub mod errors;
pub mod id;
pub mod notifications;

pub use color::Color;
pub use errors::{ConfigError, ThemeError, TinterError};
pub use id::RequestId;
pub use notifications::{Notification, NotificationLevel, NotificationQueue};

pub type Result<T> = std::result::Result<T, TinterError>;
