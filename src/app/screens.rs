use crate::core::catalog::ServiceCatalog;
use crate::core::estimator::EstimateForm;
use crate::core::session::{Session, SessionState};
use crate::domain::model::{format_cost, BookingRecord};
use crate::domain::ports::DateSource;
use std::fmt;

pub const PRODUCT_NAME: &str = "SkillBridge";
pub const TAGLINE: &str = "Connect with Top Tier Freelancers";
pub const HIGHLIGHTS: [&str; 3] = ["Verified Experts", "Secure Payments", "SDG 8: Decent Work"];
pub const EMPTY_BOOKING: &str = "No active orders.";
pub const WAITING_LINE: &str = "> Waiting for updates...";

pub struct LoginScreen;

pub struct CalculatorScreen<'a> {
    pub catalog: &'a ServiceCatalog,
    pub form: &'a EstimateForm,
}

pub struct DashboardScreen<'a> {
    pub email: &'a str,
    pub booking: Option<&'a BookingRecord>,
    pub notifications: &'a [String],
}

impl fmt::Display for LoginScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ===", PRODUCT_NAME)?;
        writeln!(f, "{}", TAGLINE)?;
        writeln!(f, "[ {} ]", HIGHLIGHTS.join(" | "))?;
        writeln!(f)?;
        writeln!(f, "Member Login")?;
        writeln!(f, "  login <email> <password>")
    }
}

impl fmt::Display for CalculatorScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.form;
        writeln!(f, "=== Project Estimator ===")?;
        writeln!(f, "Service Type:")?;
        for entry in self.catalog.entries() {
            let marker = if entry.id == form.service_type() { '*' } else { ' ' };
            writeln!(
                f,
                "  {} {:<8} {} (${}/hr)",
                marker, entry.id, entry.name, entry.base_rate
            )?;
        }
        if !self.catalog.contains(form.service_type()) {
            let fallback = self.catalog.fallback();
            writeln!(
                f,
                "  * {:<8} {} (${}/hr)",
                form.service_type(),
                fallback.name,
                fallback.base_rate
            )?;
        }
        writeln!(f, "Complexity (1-10): Level {}", form.complexity())?;
        writeln!(f, "Estimated Hours: {}", form.hours())?;
        writeln!(
            f,
            "Rush Order (+50%): {}",
            if form.is_rush() { "yes" } else { "no" }
        )?;
        writeln!(f)?;
        writeln!(f, "Estimated Total: {}", format_cost(form.estimated_cost()))?;
        writeln!(f, "  (book | dashboard | logout)")
    }
}

impl fmt::Display for DashboardScreen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== User Dashboard ===")?;
        writeln!(f, "Welcome back, {}", self.email)?;
        writeln!(f)?;
        writeln!(f, "Latest Booking")?;
        match self.booking {
            Some(booking) => {
                writeln!(f, "  Service: {}", booking.service)?;
                writeln!(f, "  Cost: {}", format_cost(booking.cost))?;
                writeln!(f, "  Date: {}", booking.date)?;
            }
            None => writeln!(f, "  {}", EMPTY_BOOKING)?,
        }
        writeln!(f)?;
        writeln!(f, "System Notification Logs")?;
        for note in self.notifications {
            writeln!(f, "> {}", note)?;
        }
        writeln!(f, "{}", WAITING_LINE)?;
        writeln!(f, "  (calculator | logout)")
    }
}

pub fn render<D: DateSource>(session: &Session<D>) -> String {
    match session.state() {
        SessionState::LoggedOut => render_login(),
        SessionState::Estimating => {
            render_calculator(session.estimator().catalog(), session.form())
        }
        SessionState::Dashboard => {
            render_dashboard(session.email(), session.booking(), session.notifications())
        }
    }
}

pub fn render_login() -> String {
    LoginScreen.to_string()
}

pub fn render_calculator(catalog: &ServiceCatalog, form: &EstimateForm) -> String {
    CalculatorScreen { catalog, form }.to_string()
}

pub fn render_dashboard(
    email: &str,
    booking: Option<&BookingRecord>,
    notifications: &[String],
) -> String {
    DashboardScreen {
        email,
        booking,
        notifications,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::BookingEstimator;

    #[test]
    fn test_login_screen_lists_highlights() {
        let screen = render_login();
        assert!(screen.contains(PRODUCT_NAME));
        assert!(screen.contains(TAGLINE));
        for highlight in HIGHLIGHTS {
            assert!(screen.contains(highlight));
        }
    }

    #[test]
    fn test_calculator_screen_shows_selection_and_cost() {
        let estimator = BookingEstimator::default();
        let form = EstimateForm::new(&estimator);
        let screen = render_calculator(estimator.catalog(), &form);

        assert!(screen.contains("* web      Web Development ($100/hr)"));
        assert!(screen.contains("  design   Graphic Design ($50/hr)"));
        assert!(screen.contains("Estimated Total: $1000.00"));
    }

    #[test]
    fn test_calculator_screen_shows_fallback_selection() {
        let estimator = BookingEstimator::default();
        let mut form = EstimateForm::new(&estimator);
        form.set_service_type(&estimator, "other");
        let screen = render_calculator(estimator.catalog(), &form);

        assert!(screen.contains("* other    Generic ($20/hr)"));
        assert!(screen.contains("Estimated Total: $200.00"));
    }

    #[test]
    fn test_dashboard_without_booking() {
        let screen = render_dashboard("a@b.com", None, &[]);
        assert!(screen.contains("Welcome back, a@b.com"));
        assert!(screen.contains(EMPTY_BOOKING));
        assert!(screen.contains(WAITING_LINE));
    }

    #[test]
    fn test_dashboard_log_order_and_placeholder_last() {
        let booking = BookingRecord {
            service: "Web Development".to_string(),
            cost: 1000.0,
            date: "10/18/2026".to_string(),
        };
        let notes = vec!["first".to_string(), "second".to_string()];
        let screen = render_dashboard("a@b.com", Some(&booking), &notes);

        assert!(screen.contains("Cost: $1000.00"));
        let first = screen.find("> first").unwrap();
        let second = screen.find("> second").unwrap();
        let waiting = screen.find(WAITING_LINE).unwrap();
        assert!(first < second && second < waiting);
    }
}
