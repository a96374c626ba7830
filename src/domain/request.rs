use crate::domain::validation::ValidationError;
use crate::domain::value::{DataCode, Email, MessageText, PhoneNumber, SendAt, SenderId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Sender identity shown to the recipient.
pub enum Sender {
    /// Authorized sender number referenced by its id (`sender_id`).
    Id(SenderId),
    /// Authorized sender number given explicitly (`sender_phone`).
    Phone(PhoneNumber),
}

impl Sender {
    /// Query parameter name for [`Sender::Phone`] (`sender_phone`).
    pub const PHONE_FIELD: &'static str = "sender_phone";
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Optional message fields. Unset fields are not sent.
pub struct SmsOptions {
    pub when: Option<SendAt>,
    pub delivery_report: Option<bool>,
    pub sender: Option<Sender>,
    pub user_id: Option<UserId>,
    pub data_code: Option<DataCode>,
    pub answer_mail: Option<Email>,
    pub delivery_mail: Option<Email>,
}

impl SmsOptions {
    /// Query parameter name for the delivery-report flag (`delivery_report`).
    pub const DELIVERY_REPORT_FIELD: &'static str = "delivery_report";
    /// Query parameter name for the reply e-mail (`answer_mail`).
    pub const ANSWER_MAIL_FIELD: &'static str = "answer_mail";
    /// Query parameter name for the delivery-receipt e-mail (`delivery_mail`).
    pub const DELIVERY_MAIL_FIELD: &'static str = "delivery_mail";
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single SMS: recipient, text and optional fields.
pub struct Sms {
    number: PhoneNumber,
    message: MessageText,
    options: SmsOptions,
}

impl Sms {
    /// Message with only the required fields set.
    pub fn new(number: PhoneNumber, message: MessageText) -> Self {
        Self::with_options(number, message, SmsOptions::default())
    }

    pub fn with_options(number: PhoneNumber, message: MessageText, options: SmsOptions) -> Self {
        Self {
            number,
            message,
            options,
        }
    }

    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn options(&self) -> &SmsOptions {
        &self.options
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered batch of messages for `xml_queue`.
///
/// Invariant: never empty.
pub struct SmsQueue {
    messages: Vec<Sms>,
}

impl SmsQueue {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "queue";

    pub fn new(messages: Vec<Sms>) -> Result<Self, ValidationError> {
        if messages.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self { messages })
    }

    pub fn messages(&self) -> &[Sms] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Never `true`: a queue holds at least one message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl TryFrom<Vec<Sms>> for SmsQueue {
    type Error = ValidationError;

    fn try_from(messages: Vec<Sms>) -> Result<Self, Self::Error> {
        Self::new(messages)
    }
}
