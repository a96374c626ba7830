#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Raw `result.err` value returned by SMS Connect.
///
/// The value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(String);

impl ErrorCode {
    /// Code reported on success.
    pub const SUCCESS: &'static str = "0";

    /// Construct a code from its textual representation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the code as returned by the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` for the literal success code `0`.
    pub fn is_success(&self) -> bool {
        self.0.trim() == Self::SUCCESS
    }

    /// Map this code to a known error variant, if one exists.
    ///
    /// Only the exact wire spelling matches: `"9"` is known, `"09"` or `"+9"` are not.
    pub fn known(&self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_wire(&self.0)
    }

    /// Human-readable vendor description, or the raw code when unmapped.
    ///
    /// The success code is returned unchanged as well.
    pub fn describe(&self) -> &str {
        match self.known() {
            Some(known) => known.description(),
            None => self.0.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error codes documented by SMS Connect.
pub enum KnownErrorCode {
    DuplicateUserId,
    Unknown,
    InvalidLogin,
    InvalidHashOrPassword,
    InvalidTime,
    IpNotAllowed,
    InvalidAction,
    SaltAlreadyUsed,
    DatabaseUnavailable,
    InsufficientCredit,
    InvalidRecipient,
    EmptyMessage,
    MessageTooLong,
}

impl KnownErrorCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::DuplicateUserId,
            1 => Self::Unknown,
            2 => Self::InvalidLogin,
            3 => Self::InvalidHashOrPassword,
            4 => Self::InvalidTime,
            5 => Self::IpNotAllowed,
            6 => Self::InvalidAction,
            7 => Self::SaltAlreadyUsed,
            8 => Self::DatabaseUnavailable,
            9 => Self::InsufficientCredit,
            10 => Self::InvalidRecipient,
            11 => Self::EmptyMessage,
            12 => Self::MessageTooLong,
            _ => return None,
        })
    }

    /// Look up a code by its exact textual form, e.g. `"-1"` or `"12"`.
    pub fn from_wire(code: &str) -> Option<Self> {
        Some(match code {
            "-1" => Self::DuplicateUserId,
            "1" => Self::Unknown,
            "2" => Self::InvalidLogin,
            "3" => Self::InvalidHashOrPassword,
            "4" => Self::InvalidTime,
            "5" => Self::IpNotAllowed,
            "6" => Self::InvalidAction,
            "7" => Self::SaltAlreadyUsed,
            "8" => Self::DatabaseUnavailable,
            "9" => Self::InsufficientCredit,
            "10" => Self::InvalidRecipient,
            "11" => Self::EmptyMessage,
            "12" => Self::MessageTooLong,
            _ => return None,
        })
    }

    /// Integer code as used on the wire.
    pub fn code(self) -> i32 {
        match self {
            Self::DuplicateUserId => -1,
            Self::Unknown => 1,
            Self::InvalidLogin => 2,
            Self::InvalidHashOrPassword => 3,
            Self::InvalidTime => 4,
            Self::IpNotAllowed => 5,
            Self::InvalidAction => 6,
            Self::SaltAlreadyUsed => 7,
            Self::DatabaseUnavailable => 8,
            Self::InsufficientCredit => 9,
            Self::InvalidRecipient => 10,
            Self::EmptyMessage => 11,
            Self::MessageTooLong => 12,
        }
    }

    /// Vendor description of the code, verbatim.
    pub fn description(self) -> &'static str {
        match self {
            Self::DuplicateUserId => {
                "Duplicitní ”user_id” - stejně označená SMS byla odeslaná již v minulosti"
            }
            Self::Unknown => "Neznámá chyba",
            Self::InvalidLogin => "Neplatný login",
            Self::InvalidHashOrPassword => {
                "Neplatný ”hash” nebo ”password” (podle varianty zabezpečení přihlášení)"
            }
            Self::InvalidTime => {
                "Neplatný ”time”, větší odchylka času mezi servery než maximální akceptovaná v nastavení služby SMS Connect"
            }
            Self::IpNotAllowed => "Nepovolená IP, viz nastavení služby SMS Connect",
            Self::InvalidAction => "Neplatný název akce",
            Self::SaltAlreadyUsed => "Tato ”salt” byla již jednou za daný den použita",
            Self::DatabaseUnavailable => "Nebylo navázáno spojení s databází",
            Self::InsufficientCredit => "Nedostatečný kredit",
            Self::InvalidRecipient => "Neplatné číslo příjemce SMS",
            Self::EmptyMessage => "Prázdný text zprávy",
            Self::MessageTooLong => "SMS je delší než povolených 459 znaků",
        }
    }

    /// Whether the code points at credentials, clock or salt problems.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidLogin
                | Self::InvalidHashOrPassword
                | Self::InvalidTime
                | Self::IpNotAllowed
                | Self::SaltAlreadyUsed
        )
    }
}
