use crate::domain::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A decoded XML node.
///
/// Leaf elements become [`XmlValue::Text`], elements with children or attributes become
/// [`XmlValue::Map`], and sibling elements sharing a name collapse into [`XmlValue::List`]
/// in document order.
pub enum XmlValue {
    Text(String),
    Map(XmlMap),
    List(Vec<XmlValue>),
}

impl XmlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&XmlMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// View the node as a list: repeated elements yield all entries, a single element
    /// yields a one-item slice.
    pub fn as_slice(&self) -> &[XmlValue] {
        match self {
            Self::List(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered mapping of element (or attribute) names to decoded values.
pub struct XmlMap {
    entries: Vec<(String, XmlValue)>,
}

impl XmlMap {
    /// Key holding the text of an element that also has children or attributes.
    pub const TEXT_KEY: &'static str = "$text";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.entries
            .iter()
            .find_map(|(name, value)| (name.as_str() == key).then_some(value))
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut XmlValue> {
        self.entries
            .iter_mut()
            .find_map(|(name, value)| (name.as_str() == key).then_some(value))
    }

    /// Follow a chain of nested maps, e.g. `["result", "err"]`.
    pub fn get_path(&self, path: &[&str]) -> Option<&XmlValue> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for key in parents {
            current = current.get(key)?.as_map()?;
        }
        current.get(last)
    }

    /// Text of a direct child, if it is a leaf.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(XmlValue::as_text)
    }

    /// Append an entry. A repeated key turns the existing entry into a list.
    pub fn push(&mut self, key: impl Into<String>, value: XmlValue) {
        let key = key.into();
        if let Some(existing) = self.get_mut(&key) {
            match existing {
                XmlValue::List(items) => items.push(value),
                single => {
                    let first = std::mem::replace(single, XmlValue::List(Vec::with_capacity(2)));
                    if let XmlValue::List(items) = single {
                        items.push(first);
                        items.push(value);
                    }
                }
            }
            return;
        }
        self.entries.push((key, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &XmlValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded SMS Connect response.
///
/// The whole document is kept because its shape varies per action. When `result.err` is
/// a known non-zero code, its text in [`Response::document`] is replaced by the vendor
/// description; the raw code stays available through [`Response::error_code`].
pub struct Response {
    document: XmlMap,
    error_code: Option<ErrorCode>,
}

impl Response {
    const RESULT: &'static str = "result";
    const ERR: &'static str = "err";

    /// Wrap a decoded document and substitute the error description.
    pub fn from_document(mut document: XmlMap) -> Self {
        let error_code = document
            .get_path(&[Self::RESULT, Self::ERR])
            .and_then(XmlValue::as_text)
            .map(ErrorCode::new);

        if let Some(code) = error_code.as_ref().filter(|code| !code.is_success()) {
            let description = code.describe().to_owned();
            if let Some(XmlValue::Map(result)) = document.get_mut(Self::RESULT) {
                if let Some(err) = result.get_mut(Self::ERR) {
                    *err = XmlValue::Text(description);
                }
            }
        }

        Self {
            document,
            error_code,
        }
    }

    /// The full decoded document (with the error description substituted).
    pub fn document(&self) -> &XmlMap {
        &self.document
    }

    pub fn into_document(self) -> XmlMap {
        self.document
    }

    /// The `result` element, if present.
    pub fn result(&self) -> Option<&XmlMap> {
        self.document.get(Self::RESULT).and_then(XmlValue::as_map)
    }

    /// `result.err` as returned to callers: `"0"`, a vendor description, or an unmapped raw code.
    pub fn err(&self) -> Option<&str> {
        self.result().and_then(|result| result.text(Self::ERR))
    }

    /// Raw `result.err` code before substitution.
    pub fn error_code(&self) -> Option<&ErrorCode> {
        self.error_code.as_ref()
    }

    /// `true` only when `result.err` is present and equals `0`.
    pub fn is_success(&self) -> bool {
        self.error_code.as_ref().is_some_and(ErrorCode::is_success)
    }

    /// Text of a direct child of `result`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.result().and_then(|result| result.text(name))
    }

    /// Remaining account credit (`credit_info`, `send_sms`).
    pub fn credit(&self) -> Option<&str> {
        self.field("credit")
    }

    /// Price of the sent message (`send_sms`).
    pub fn price(&self) -> Option<&str> {
        self.field("price")
    }

    /// Number of SMS parts the message was split into (`send_sms`).
    pub fn sms_count(&self) -> Option<&str> {
        self.field("sms_count")
    }

    /// Gateway id of the sent message (`send_sms`).
    pub fn sms_id(&self) -> Option<&str> {
        self.field("sms_id")
    }

    /// Messages received on the account (`inbox` → `delivery_sms`).
    pub fn received_messages(&self) -> Vec<&XmlMap> {
        self.inbox_items("delivery_sms")
    }

    /// Delivery receipts (`inbox` → `delivery_report`).
    pub fn delivery_reports(&self) -> Vec<&XmlMap> {
        self.inbox_items("delivery_report")
    }

    fn inbox_items(&self, section: &str) -> Vec<&XmlMap> {
        self.document
            .get_path(&[Self::RESULT, "inbox", section, "item"])
            .map(|items| items.as_slice().iter().filter_map(XmlValue::as_map).collect())
            .unwrap_or_default()
    }
}
