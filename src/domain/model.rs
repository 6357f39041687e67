use serde::{Deserialize, Serialize};

/// A named offering with a base hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub base_rate: f64,
}

impl Service {
    pub fn new(name: impl Into<String>, base_rate: f64) -> Self {
        Self {
            name: name.into(),
            base_rate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInput {
    pub base_rate: f64,
    pub complexity: u8,
    pub hours: f64,
}

/// The single retained record of the latest confirmed booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub service: String,
    pub cost: f64,
    pub date: String,
}

/// Superset payload handed to every channel; each channel reads only the
/// fields it needs and ignores the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPayload {
    pub email: String,
    pub cost: f64,
    pub phone: String,
}

/// 金額顯示一律兩位小數
pub fn format_cost(cost: f64) -> String {
    format!("${:.2}", cost)
}
