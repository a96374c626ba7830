use md5::{Digest, Md5};
use rand::Rng;
use time::macros::offset;
use time::{OffsetDateTime, UtcOffset};

use crate::domain::{Login, Password};

/// Wall-clock offset the gateway expects for `time` and `when` (UTC+2).
pub const GATEWAY_OFFSET: UtcOffset = offset!(+2);

const SALT_LITERAL: &str = "RandomSecretText";

/// Per-request authentication triple. Never reuse one: the gateway rejects a salt
/// seen earlier the same day (error `7`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub time: String,
    pub salt: String,
    pub hash: String,
}

impl AuthToken {
    pub const TIME_FIELD: &'static str = "time";
    pub const SALT_FIELD: &'static str = "salt";
    pub const HASH_FIELD: &'static str = "auth";

    /// Derive a fresh token for the current moment.
    pub fn generate(password: &Password) -> Self {
        Self::generate_at(password, OffsetDateTime::now_utc())
    }

    pub fn generate_at(password: &Password, now: OffsetDateTime) -> Self {
        let time = format_gateway_time(now);
        let salt = random_salt(now);
        let hash = auth_hash(password.as_str(), &time, &salt);
        Self { time, salt, hash }
    }

    pub fn push_query_params(&self, login: &Login, params: &mut Vec<(String, String)>) {
        params.push((Login::FIELD.to_owned(), login.as_str().to_owned()));
        params.push((Self::TIME_FIELD.to_owned(), self.time.clone()));
        params.push((Self::SALT_FIELD.to_owned(), self.salt.clone()));
        params.push((Self::HASH_FIELD.to_owned(), self.hash.clone()));
    }
}

/// Render `at` as gateway wall-clock time, `YYYYMMDDTHHMMSS`.
pub fn format_gateway_time(at: OffsetDateTime) -> String {
    let local = at.to_offset(GATEWAY_OFFSET);
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        local.year(),
        u8::from(local.month()),
        local.day(),
        local.hour(),
        local.minute(),
        local.second()
    )
}

/// Hex MD5 of `password + time + salt`.
pub fn auth_hash(password: &str, time: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(time.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

fn random_salt(now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    // millisecond resolution alone collides for back-to-back calls
    let nonce: u64 = rand::thread_rng().r#gen();
    let seed = format!("{millis}{SALT_LITERAL}{nonce:016x}");
    hex::encode(Md5::digest(seed.as_bytes()))
}
