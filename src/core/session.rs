use crate::core::estimator::{BookingEstimator, EstimateForm};
use crate::core::notification::{EmailChannel, MessagingChannel, NotificationDispatcher};
use crate::domain::model::{BookingRecord, NotificationPayload};
use crate::domain::ports::DateSource;
use crate::utils::error::{Result, SkillBridgeError};
use crate::utils::validation::validate_credentials;

pub const DEFAULT_PHONE: &str = "+1234567890";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    Estimating,
    Dashboard,
}

impl SessionState {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::LoggedOut => "logged out",
            Self::Estimating => "on the calculator",
            Self::Dashboard => "on the dashboard",
        }
    }
}

/// Local date in en-US short form, e.g. `10/18/2026`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDate;

impl DateSource for LocalDate {
    fn today(&self) -> String {
        chrono::Local::now().format("%-m/%-d/%Y").to_string()
    }
}

#[derive(Debug, Clone)]
pub struct FixedDate(pub String);

impl DateSource for FixedDate {
    fn today(&self) -> String {
        self.0.clone()
    }
}

/// Session-level application state. Owns the single booking record and the
/// notification log of the dispatch that produced it.
pub struct Session<D: DateSource = LocalDate> {
    state: SessionState,
    email: String,
    form: EstimateForm,
    booking: Option<BookingRecord>,
    notifications: Vec<String>,
    estimator: BookingEstimator,
    dispatcher: NotificationDispatcher,
    phone: String,
    dates: D,
}

impl Session {
    /// Default catalog and rules, email + WhatsApp channels, local dates.
    pub fn with_defaults() -> Self {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.subscribe(Box::new(EmailChannel::new()));
        dispatcher.subscribe(Box::new(MessagingChannel));
        Self::new(
            BookingEstimator::default(),
            dispatcher,
            DEFAULT_PHONE.to_string(),
            LocalDate,
        )
    }
}

impl<D: DateSource> Session<D> {
    pub fn new(
        estimator: BookingEstimator,
        dispatcher: NotificationDispatcher,
        phone: String,
        dates: D,
    ) -> Self {
        let form = EstimateForm::new(&estimator);
        Self {
            state: SessionState::LoggedOut,
            email: String::new(),
            form,
            booking: None,
            notifications: Vec::new(),
            estimator,
            dispatcher,
            phone,
            dates,
        }
    }

    fn require(&self, action: &str, allowed: &[SessionState]) -> Result<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(SkillBridgeError::InvalidActionError {
                action: action.to_string(),
                state: self.state.describe().to_string(),
            })
        }
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.require("login", &[SessionState::LoggedOut])?;
        validate_credentials(email, password)?;

        self.email = email.to_string();
        self.form = EstimateForm::new(&self.estimator);
        self.state = SessionState::Estimating;
        tracing::info!("👤 {} logged in", self.email);
        Ok(())
    }

    pub fn select_service(&mut self, type_id: &str) -> Result<()> {
        self.require("service", &[SessionState::Estimating])?;
        self.form.set_service_type(&self.estimator, type_id);
        Ok(())
    }

    pub fn set_complexity(&mut self, complexity: i64) -> Result<()> {
        self.require("complexity", &[SessionState::Estimating])?;
        self.form.set_complexity(&self.estimator, complexity);
        Ok(())
    }

    pub fn set_hours(&mut self, hours: f64) -> Result<()> {
        self.require("hours", &[SessionState::Estimating])?;
        self.form.set_hours(&self.estimator, hours);
        Ok(())
    }

    pub fn set_rush(&mut self, is_rush: bool) -> Result<()> {
        self.require("rush", &[SessionState::Estimating])?;
        self.form.set_rush(&self.estimator, is_rush);
        Ok(())
    }

    /// Confirms the current estimate. Replaces any previous booking and
    /// dispatches exactly one notification.
    pub fn book(&mut self) -> Result<&BookingRecord> {
        self.require("book", &[SessionState::Estimating])?;

        let quote = self.form.quote();
        let booking = BookingRecord {
            service: quote.service.name.clone(),
            cost: quote.cost,
            date: self.dates.today(),
        };
        let payload = NotificationPayload {
            email: self.email.clone(),
            cost: booking.cost,
            phone: self.phone.clone(),
        };

        tracing::info!(
            "📦 Booked {} for ${:.2} ({} pricing)",
            booking.service,
            booking.cost,
            quote.policy.label()
        );

        self.notifications = self.dispatcher.notify(&payload);
        self.state = SessionState::Dashboard;
        Ok(&*self.booking.insert(booking))
    }

    pub fn open_dashboard(&mut self) -> Result<()> {
        self.require("dashboard", &[SessionState::Estimating, SessionState::Dashboard])?;
        self.state = SessionState::Dashboard;
        Ok(())
    }

    /// Returns to a fresh calculator.
    pub fn open_calculator(&mut self) -> Result<()> {
        self.require("calculator", &[SessionState::Estimating, SessionState::Dashboard])?;
        if self.state == SessionState::Dashboard {
            self.form = EstimateForm::new(&self.estimator);
        }
        self.state = SessionState::Estimating;
        Ok(())
    }

    pub fn logout(&mut self) {
        if self.state != SessionState::LoggedOut {
            tracing::info!("👋 {} logged out", self.email);
        }
        self.state = SessionState::LoggedOut;
        self.email.clear();
        self.booking = None;
        self.notifications.clear();
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn form(&self) -> &EstimateForm {
        &self.form
    }

    pub fn booking(&self) -> Option<&BookingRecord> {
        self.booking.as_ref()
    }

    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn estimator(&self) -> &BookingEstimator {
        &self.estimator
    }

    pub fn dispatcher(&self) -> &NotificationDispatcher {
        &self.dispatcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notification::FixedInvoiceNumber;

    fn session() -> Session<FixedDate> {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.subscribe(Box::new(EmailChannel::with_invoice_source(FixedInvoiceNumber(7))));
        dispatcher.subscribe(Box::new(MessagingChannel));
        Session::new(
            BookingEstimator::default(),
            dispatcher,
            DEFAULT_PHONE.to_string(),
            FixedDate("10/18/2026".to_string()),
        )
    }

    #[test]
    fn test_login_requires_both_fields() {
        let mut session = session();

        let err = session.login("", "x").unwrap_err();
        assert!(matches!(err, SkillBridgeError::ValidationError { .. }));
        assert_eq!(session.state(), SessionState::LoggedOut);

        assert!(session.login("a@b.com", "").is_err());
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert_eq!(session.email(), "");

        session.login("a@b.com", "x").unwrap();
        assert_eq!(session.state(), SessionState::Estimating);
        assert_eq!(session.email(), "a@b.com");
        assert_eq!(session.dispatcher().channel_names(), vec!["email", "whatsapp"]);
    }

    #[test]
    fn test_book_produces_record_and_notifications() {
        let mut session = session();
        session.login("a@b.com", "x").unwrap();
        session.select_service("web").unwrap();
        session.set_complexity(3).unwrap();
        session.set_hours(10.0).unwrap();

        let booking = session.book().unwrap().clone();
        assert_eq!(booking.service, "Web Development");
        assert_eq!(booking.cost, 1000.0);
        assert_eq!(booking.date, "10/18/2026");

        assert_eq!(session.state(), SessionState::Dashboard);
        assert_eq!(
            session.notifications(),
            &[
                "Email sent to a@b.com: Invoice #7".to_string(),
                "WhatsApp sent to +1234567890: \"Your order is confirmed!\"".to_string(),
            ]
        );
    }

    #[test]
    fn test_second_booking_replaces_first() {
        let mut session = session();
        session.login("a@b.com", "x").unwrap();
        session.book().unwrap();

        session.open_calculator().unwrap();
        session.select_service("content").unwrap();
        session.book().unwrap();

        assert_eq!(session.booking().unwrap().service, "Content Writing");
        assert_eq!(session.notifications().len(), 2);
    }

    #[test]
    fn test_navigation_does_not_notify() {
        let mut session = session();
        session.login("a@b.com", "x").unwrap();

        session.open_dashboard().unwrap();
        assert_eq!(session.state(), SessionState::Dashboard);
        assert!(session.booking().is_none());
        assert!(session.notifications().is_empty());

        session.open_calculator().unwrap();
        assert_eq!(session.state(), SessionState::Estimating);
    }

    #[test]
    fn test_calculator_resets_after_dashboard() {
        let mut session = session();
        session.login("a@b.com", "x").unwrap();
        session.set_rush(true).unwrap();
        session.open_dashboard().unwrap();
        session.open_calculator().unwrap();
        assert!(!session.form().is_rush());
    }

    #[test]
    fn test_logout_clears_state() {
        let mut session = session();
        session.login("a@b.com", "x").unwrap();
        session.set_hours(3.0).unwrap();
        session.book().unwrap();

        session.logout();
        assert_eq!(session.state(), SessionState::LoggedOut);
        assert_eq!(session.email(), "");
        assert!(session.booking().is_none());
        assert!(session.notifications().is_empty());

        session.login("c@d.com", "y").unwrap();
        assert_eq!(session.form().hours(), 10.0);
    }

    #[test]
    fn test_actions_rejected_in_wrong_state() {
        let mut session = session();

        let err = session.book().unwrap_err();
        assert!(matches!(err, SkillBridgeError::InvalidActionError { .. }));
        assert!(session.set_hours(1.0).is_err());
        assert!(session.open_dashboard().is_err());
        assert_eq!(session.state(), SessionState::LoggedOut);

        session.login("a@b.com", "x").unwrap();
        assert!(session.login("a@b.com", "x").is_err());

        session.book().unwrap();
        assert!(session.book().is_err());
        assert!(session.set_rush(true).is_err());
        assert_eq!(session.notifications().len(), 2);
    }

    #[test]
    fn test_local_date_format() {
        let today = LocalDate.today();
        let parts: Vec<&str> = today.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
        assert!(!parts[0].starts_with('0'));
    }
}
