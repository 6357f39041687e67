use crate::core::catalog::ServiceCatalog;
use crate::core::pricing::{PricingPolicy, PricingRules};
use crate::domain::model::{PricingInput, Service};
use serde::Serialize;

pub const MIN_COMPLEXITY: u8 = 1;
pub const MAX_COMPLEXITY: u8 = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub service: Service,
    pub policy: PricingPolicy,
    pub cost: f64,
}

/// Composition root: catalog lookup, policy selection, cost.
#[derive(Debug, Clone, Default)]
pub struct BookingEstimator {
    catalog: ServiceCatalog,
    rules: PricingRules,
}

impl BookingEstimator {
    pub fn new(catalog: ServiceCatalog, rules: PricingRules) -> Self {
        Self { catalog, rules }
    }

    pub fn quote(&self, type_id: &str, complexity: u8, hours: f64, is_rush: bool) -> Quote {
        let service = self.catalog.lookup(type_id);
        let policy = self.rules.select(is_rush, complexity);
        let cost = policy.calculate(&PricingInput {
            base_rate: service.base_rate,
            complexity,
            hours,
        });

        tracing::debug!(
            "Estimated {} x {}h (complexity {}, rush {}) with {} pricing: {:.2}",
            service.name,
            hours,
            complexity,
            is_rush,
            policy.label(),
            cost
        );

        Quote {
            service,
            policy,
            cost,
        }
    }

    pub fn estimate(&self, type_id: &str, complexity: u8, hours: f64, is_rush: bool) -> f64 {
        self.quote(type_id, complexity, hours, is_rush).cost
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }
}

/// Calculator screen state. Every setter normalises its input the way the
/// on-screen controls do and recomputes the quote immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateForm {
    service_type: String,
    complexity: u8,
    hours: f64,
    is_rush: bool,
    quote: Quote,
}

impl EstimateForm {
    pub fn new(estimator: &BookingEstimator) -> Self {
        let service_type = "web".to_string();
        let (complexity, hours, is_rush) = (MIN_COMPLEXITY, 10.0, false);
        let quote = estimator.quote(&service_type, complexity, hours, is_rush);
        Self {
            service_type,
            complexity,
            hours,
            is_rush,
            quote,
        }
    }

    pub fn set_service_type(&mut self, estimator: &BookingEstimator, type_id: &str) {
        self.service_type = type_id.to_string();
        self.recompute(estimator);
    }

    /// Clamped to `[1, 10]`.
    pub fn set_complexity(&mut self, estimator: &BookingEstimator, complexity: i64) {
        self.complexity =
            complexity.clamp(i64::from(MIN_COMPLEXITY), i64::from(MAX_COMPLEXITY)) as u8;
        self.recompute(estimator);
    }

    /// Negative or non-finite hours become 0.
    pub fn set_hours(&mut self, estimator: &BookingEstimator, hours: f64) {
        // `-0.0` 也視為 0，避免顯示 `$-0.00`
        self.hours = if hours.is_finite() && hours > 0.0 {
            hours
        } else {
            0.0
        };
        self.recompute(estimator);
    }

    pub fn set_rush(&mut self, estimator: &BookingEstimator, is_rush: bool) {
        self.is_rush = is_rush;
        self.recompute(estimator);
    }

    fn recompute(&mut self, estimator: &BookingEstimator) {
        self.quote = estimator.quote(
            &self.service_type,
            self.complexity,
            self.hours,
            self.is_rush,
        );
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn complexity(&self) -> u8 {
        self.complexity
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn is_rush(&self) -> bool {
        self.is_rush
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }

    pub fn estimated_cost(&self) -> f64 {
        self.quote.cost
    }
}
