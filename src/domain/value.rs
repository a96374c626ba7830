use std::fmt;

use time::OffsetDateTime;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS Connect account login.
///
/// Invariant: non-empty after trimming.
pub struct Login(String);

impl Login {
    /// Query parameter name used by SMS Connect (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS Connect account password.
///
/// Never sent over the wire; it only feeds the per-request auth hash.
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to SMS Connect (`number`).
///
/// National (`736339339`) or international (`+420736339339`) form. Foreign numbers
/// must always carry the country prefix; this type does not normalize.
///
/// Invariant: non-empty after trimming.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Query parameter name used by SMS Connect (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated (non-empty) phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to SMS Connect.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Invariant: non-empty after trimming. The original value (including whitespace) is preserved.
/// Length limits depend on [`DataCode`] and are enforced by the gateway (error `12`).
pub struct MessageText(String);

impl MessageText {
    /// Query parameter name used by SMS Connect (`message`).
    pub const FIELD: &'static str = "message";

    /// Create validated message text.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Id of an authorized sender number (`sender_id`).
///
/// Invariant: non-empty after trimming.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by SMS Connect (`sender_id`).
    pub const FIELD: &'static str = "sender_id";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Caller-supplied message label (`user_id`).
///
/// The gateway accepts only one message per `user_id` and day (error `-1`).
/// Invariant: non-empty after trimming, at most [`UserId::MAX_LEN`] characters.
pub struct UserId(String);

impl UserId {
    /// Query parameter name used by SMS Connect (`user_id`).
    pub const FIELD: &'static str = "user_id";

    /// Maximum length accepted by the gateway (`varchar(50)`).
    pub const MAX_LEN: usize = 50;

    /// Create a validated [`UserId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = trimmed.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Notification e-mail address (`answer_mail` / `delivery_mail`).
///
/// Invariant: non-empty after trimming and contains `@`.
pub struct Email(String);

impl Email {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "email";

    /// Create a validated [`Email`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !trimmed.contains('@') {
            return Err(ValidationError::InvalidEmail {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Text encoding of the message (`data_code`).
pub enum DataCode {
    /// Standard GSM alphabet: 160 characters per SMS, up to 459 in three parts.
    #[default]
    SevenBit,
    /// Unicode (diacritics, special characters): 70 characters per SMS, 67 per part.
    Ucs2,
}

impl DataCode {
    /// Query parameter name used by SMS Connect (`data_code`).
    pub const FIELD: &'static str = "data_code";

    /// Wire value (`7bit` / `ucs2`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SevenBit => "7bit",
            Self::Ucs2 => "ucs2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Earliest moment the gateway may send a message (`when`).
///
/// Any offset is accepted; it is rendered as gateway wall-clock time (UTC+2).
pub struct SendAt(OffsetDateTime);

impl SendAt {
    /// Query parameter name used by SMS Connect (`when`).
    pub const FIELD: &'static str = "when";

    /// Wrap a point in time (no range validation is performed).
    pub fn new(value: OffsetDateTime) -> Self {
        Self(value)
    }

    /// Get the wrapped point in time.
    pub fn value(self) -> OffsetDateTime {
        self.0
    }
}

impl From<OffsetDateTime> for SendAt {
    fn from(value: OffsetDateTime) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Gateway operation named in the `action` query parameter.
pub enum Action {
    SendSms,
    XmlQueue,
    CreditInfo,
    Inbox,
}

impl Action {
    /// Query parameter name used by SMS Connect (`action`).
    pub const FIELD: &'static str = "action";

    /// Wire name of the action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendSms => "send_sms",
            Self::XmlQueue => "xml_queue",
            Self::CreditInfo => "credit_info",
            Self::Inbox => "inbox",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
