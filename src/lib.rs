//! Typed Rust client for the SMS Connect HTTP gateway (`api.smsbrana.cz`).
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! request signing and the XML wire format, and a small client layer orchestrating
//! requests. Each call signs itself with a fresh `time` / `salt` / `auth` triple;
//! the password is never sent.
//!
//! ```rust,no_run
//! use smsconnect::{Credentials, MessageText, PhoneNumber, Sms, SmsConnectClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsconnect::SmsConnectError> {
//!     let client = SmsConnectClient::new(Credentials::new("login", "password")?);
//!     let sms = Sms::new(PhoneNumber::new("+420736339339")?, MessageText::new("hello")?);
//!     let response = client.send_sms(sms).await?;
//!     if !response.is_success() {
//!         eprintln!("gateway error: {:?}", response.err());
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, SmsConnectClient, SmsConnectClientBuilder, SmsConnectError};
pub use domain::{
    Action, DataCode, Email, ErrorCode, KnownErrorCode, Login, MessageText, Password, PhoneNumber,
    Response, SendAt, Sender, SenderId, Sms, SmsOptions, SmsQueue, UserId, ValidationError,
    XmlMap, XmlValue,
};
