use crate::domain::model::NotificationPayload;

/// A notification sink that turns a payload into a delivery confirmation.
pub trait Channel {
    fn name(&self) -> &str;
    fn update(&self, payload: &NotificationPayload) -> String;
}

/// Source of the cosmetic invoice number shown in email confirmations.
pub trait InvoiceNumberSource {
    fn next_invoice_number(&self) -> u32;
}

/// Source of the display date stamped on a booking.
pub trait DateSource {
    fn today(&self) -> String;
}
