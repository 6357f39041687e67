use crate::domain::model::NotificationPayload;
use crate::domain::ports::{Channel, InvoiceNumberSource};
use rand::Rng;

pub const EMAIL_CHANNEL: &str = "email";
pub const WHATSAPP_CHANNEL: &str = "whatsapp";

/// Invoice numbers in `[0, 1000)` from the thread-local RNG. Display only.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomInvoiceNumber;

impl InvoiceNumberSource for RandomInvoiceNumber {
    fn next_invoice_number(&self) -> u32 {
        rand::thread_rng().gen_range(0..1000)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedInvoiceNumber(pub u32);

impl InvoiceNumberSource for FixedInvoiceNumber {
    fn next_invoice_number(&self) -> u32 {
        self.0
    }
}

pub struct EmailChannel<N: InvoiceNumberSource = RandomInvoiceNumber> {
    invoices: N,
}

impl EmailChannel {
    pub fn new() -> Self {
        Self {
            invoices: RandomInvoiceNumber,
        }
    }
}

impl Default for EmailChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: InvoiceNumberSource> EmailChannel<N> {
    pub fn with_invoice_source(invoices: N) -> Self {
        Self { invoices }
    }
}

impl<N: InvoiceNumberSource> Channel for EmailChannel<N> {
    fn name(&self) -> &str {
        EMAIL_CHANNEL
    }

    fn update(&self, payload: &NotificationPayload) -> String {
        tracing::info!(
            "[Email System]: Sending invoice to {} for ${}",
            payload.email,
            payload.cost
        );
        format!(
            "Email sent to {}: Invoice #{}",
            payload.email,
            self.invoices.next_invoice_number()
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MessagingChannel;

impl Channel for MessagingChannel {
    fn name(&self) -> &str {
        WHATSAPP_CHANNEL
    }

    fn update(&self, payload: &NotificationPayload) -> String {
        tracing::info!("[WhatsApp]: Ping user {} about order status.", payload.phone);
        format!("WhatsApp sent to {}: \"Your order is confirmed!\"", payload.phone)
    }
}

/// Synchronous fan-out to every subscribed channel, in subscription order.
#[derive(Default)]
pub struct NotificationDispatcher {
    channels: Vec<Box<dyn Channel>>,
}

impl NotificationDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Channels are appended without deduplication.
    pub fn subscribe(&mut self, channel: Box<dyn Channel>) {
        tracing::debug!("Subscribed notification channel '{}'", channel.name());
        self.channels.push(channel);
    }

    /// Removes every channel registered under `name`, returning how many were dropped.
    pub fn unsubscribe(&mut self, name: &str) -> usize {
        let before = self.channels.len();
        self.channels.retain(|channel| channel.name() != name);
        before - self.channels.len()
    }

    pub fn notify(&self, payload: &NotificationPayload) -> Vec<String> {
        tracing::debug!("Dispatching notification to {} channel(s)", self.channels.len());
        self.channels
            .iter()
            .map(|channel| channel.update(payload))
            .collect()
    }

    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|channel| channel.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("channels", &self.channel_names())
            .finish()
    }
}

/// Builds a channel by its configured name.
pub fn channel_by_name(name: &str) -> Option<Box<dyn Channel>> {
    match name {
        EMAIL_CHANNEL => Some(Box::new(EmailChannel::new())),
        WHATSAPP_CHANNEL => Some(Box::new(MessagingChannel)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> NotificationPayload {
        NotificationPayload {
            email: "a@b.com".to_string(),
            cost: 1000.0,
            phone: "+1234567890".to_string(),
        }
    }

    struct Recorder {
        label: &'static str,
    }

    impl Channel for Recorder {
        fn name(&self) -> &str {
            self.label
        }

        fn update(&self, _payload: &NotificationPayload) -> String {
            self.label.to_string()
        }
    }

    #[test]
    fn test_email_channel_message() {
        let channel = EmailChannel::with_invoice_source(FixedInvoiceNumber(42));
        assert_eq!(channel.update(&payload()), "Email sent to a@b.com: Invoice #42");
    }

    #[test]
    fn test_email_channel_random_invoice_in_range() {
        let channel = EmailChannel::new();
        for _ in 0..50 {
            let message = channel.update(&payload());
            let number: u32 = message
                .strip_prefix("Email sent to a@b.com: Invoice #")
                .unwrap()
                .parse()
                .unwrap();
            assert!(number < 1000);
        }
    }

    #[test]
    fn test_messaging_channel_ignores_email_and_cost() {
        let message = MessagingChannel.update(&payload());
        assert_eq!(message, "WhatsApp sent to +1234567890: \"Your order is confirmed!\"");
        assert!(!message.contains("a@b.com"));
    }

    #[test]
    fn test_notify_returns_one_result_per_channel_in_order() {
        let mut dispatcher = NotificationDispatcher::new();
        assert!(dispatcher.notify(&payload()).is_empty());

        dispatcher.subscribe(Box::new(Recorder { label: "first" }));
        dispatcher.subscribe(Box::new(Recorder { label: "second" }));
        dispatcher.subscribe(Box::new(Recorder { label: "first" }));

        assert_eq!(dispatcher.len(), 3);
        assert_eq!(dispatcher.notify(&payload()), vec!["first", "second", "first"]);
    }

    #[test]
    fn test_unsubscribe_removes_all_matching() {
        let mut dispatcher = NotificationDispatcher::new();
        dispatcher.subscribe(Box::new(Recorder { label: "a" }));
        dispatcher.subscribe(Box::new(Recorder { label: "b" }));
        dispatcher.subscribe(Box::new(Recorder { label: "a" }));

        assert_eq!(dispatcher.unsubscribe("a"), 2);
        assert_eq!(dispatcher.unsubscribe("missing"), 0);
        assert_eq!(dispatcher.channel_names(), vec!["b"]);
    }

    #[test]
    fn test_channel_by_name() {
        assert_eq!(channel_by_name("email").unwrap().name(), EMAIL_CHANNEL);
        assert_eq!(channel_by_name("whatsapp").unwrap().name(), WHATSAPP_CHANNEL);
        assert!(channel_by_name("sms").is_none());
    }
}
