use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};

use crate::domain::{Response, SmsQueue, XmlMap, XmlValue};
use crate::transport::query::encode_sms_fields;

const QUEUE_ELEMENT: &str = "queue";
const SMS_ELEMENT: &str = "sms";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("response is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("response contains no XML element")]
    EmptyDocument,

    #[error("closing tag without a matching opening tag")]
    UnexpectedEnd,

    #[error("element `{name}` is not closed")]
    Unclosed { name: String },
}

/// `<queue><sms>…</sms>…</queue>` body for `xml_queue`, one `<sms>` per message in order.
pub fn encode_queue_body(queue: &SmsQueue) -> String {
    let mut body = String::new();
    open_tag(&mut body, QUEUE_ELEMENT);
    for sms in queue.messages() {
        open_tag(&mut body, SMS_ELEMENT);
        for (field, value) in encode_sms_fields(sms) {
            open_tag(&mut body, &field);
            body.push_str(&escape(value.as_str()));
            close_tag(&mut body, &field);
        }
        close_tag(&mut body, SMS_ELEMENT);
    }
    close_tag(&mut body, QUEUE_ELEMENT);
    body
}

fn open_tag(out: &mut String, name: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
}

fn close_tag(out: &mut String, name: &str) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

pub fn decode_response(xml: &str) -> Result<Response, TransportError> {
    decode_document(xml).map(Response::from_document)
}

struct Frame {
    name: String,
    children: XmlMap,
    text: String,
    has_elements: bool,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, TransportError> {
        let name = std::str::from_utf8(start.name().as_ref())?.to_owned();
        let mut children = XmlMap::new();
        for attribute in start.attributes() {
            let attribute = attribute.map_err(quick_xml::Error::from)?;
            let key = std::str::from_utf8(attribute.key.as_ref())?.to_owned();
            let value = attribute.unescape_value()?.into_owned();
            children.push(key, XmlValue::Text(value));
        }
        Ok(Self {
            name,
            children,
            text: String::new(),
            has_elements: false,
        })
    }

    fn close(self) -> (String, XmlValue) {
        let Self {
            name,
            mut children,
            text,
            has_elements,
        } = self;
        if children.is_empty() {
            return (name, XmlValue::Text(text));
        }
        // Text between child elements is layout; leaf text is kept verbatim.
        let text = if has_elements { text.trim() } else { text.as_str() };
        if !text.is_empty() {
            children.push(XmlMap::TEXT_KEY, XmlValue::Text(text.to_owned()));
        }
        (name, XmlValue::Map(children))
    }
}

/// Parse an XML document into an ordered mapping keyed by the root element name.
pub fn decode_document(xml: &str) -> Result<XmlMap, TransportError> {
    let mut reader = Reader::from_str(xml);

    let mut root = XmlMap::new();
    let mut stack = Vec::<Frame>::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(Frame::open(&start)?),
            Event::Empty(start) => {
                let (name, value) = Frame::open(&start)?.close();
                attach(&mut stack, &mut root, name, value);
            }
            Event::End(_) => {
                let (name, value) = stack.pop().ok_or(TransportError::UnexpectedEnd)?.close();
                attach(&mut stack, &mut root, name, value);
            }
            Event::Text(text) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    let data = data.into_inner();
                    frame.text.push_str(std::str::from_utf8(&data)?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(frame) = stack.pop() {
        return Err(TransportError::Unclosed { name: frame.name });
    }
    if root.is_empty() {
        return Err(TransportError::EmptyDocument);
    }
    Ok(root)
}

fn attach(stack: &mut [Frame], root: &mut XmlMap, name: String, value: XmlValue) {
    match stack.last_mut() {
        Some(parent) => {
            parent.has_elements = true;
            parent.children.push(name, value);
        }
        None => root.push(name, value),
    }
}
