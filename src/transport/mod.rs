//! Transport layer: request signing and wire-format details (query encoding, XML).

mod auth;
mod query;
mod xml;

pub use auth::AuthToken;
#[cfg(test)]
pub use auth::auth_hash;
pub use query::{encode_action, encode_sms_fields};
#[cfg(test)]
pub use xml::decode_document;
pub use xml::{decode_response, encode_queue_body};
