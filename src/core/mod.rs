pub mod catalog;
pub mod estimator;
pub mod notification;
pub mod pricing;
pub mod session;

pub use crate::domain::model::{BookingRecord, NotificationPayload, PricingInput, Service};
pub use crate::domain::ports::{Channel, DateSource, InvoiceNumberSource};
pub use crate::utils::error::Result;
