pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliCommand, CliConfig};

pub use app::console::Console;
pub use config::AppConfig;
pub use crate::core::{
    catalog::ServiceCatalog,
    estimator::BookingEstimator,
    notification::NotificationDispatcher,
    pricing::{PricingPolicy, PricingRules},
    session::{Session, SessionState},
};
pub use utils::error::{Result, SkillBridgeError};
