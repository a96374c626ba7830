//! Domain layer: strong types with validation and invariants (no I/O).

mod error_code;
mod request;
mod response;
mod validation;
mod value;

pub use error_code::{ErrorCode, KnownErrorCode};
pub use request::{Sender, Sms, SmsOptions, SmsQueue};
pub use response::{Response, XmlMap, XmlValue};
pub use validation::ValidationError;
pub use value::{
    Action, DataCode, Email, Login, MessageText, Password, PhoneNumber, SendAt, SenderId, UserId,
};
