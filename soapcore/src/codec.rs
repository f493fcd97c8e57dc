//! Envelope encoding and body decoding.
//!
//! The codec is payload-agnostic: the element identity (namespace + local
//! name) travels on the payload type through [`SoapPayload`], and the body
//! content is decoded generically per call site instead of through a
//! dynamically-typed slot.

use xmltree::{Element, XMLNode};

use crate::envelope::{SOAP_ENVELOPE_NS, parse_envelope};
use crate::error::CallError;
use crate::fault::SoapFault;
use crate::xmlutil::xml_children;

const SOAP_ENCODING_NS: &str = "http://schemas.xmlsoap.org/soap/encoding/";

/// Wire identity and tree conversion for one request or response type.
///
/// Implementations are mechanical: `to_element` emits the operation element
/// with its argument children, `from_element` reads them back. The codec
/// owns the namespace qualification, so `to_element` uses the plain local
/// name.
pub trait SoapPayload: Sized {
    /// Operation namespace, ex: "http://tempuri.org/"
    const NAMESPACE: &'static str;

    /// Local element name, ex: "AddResponse"
    const LOCAL_NAME: &'static str;

    fn to_element(&self) -> Element;

    fn from_element(element: &Element) -> Result<Self, CallError>;
}

/// Encode one request into a complete SOAP envelope document.
///
/// Shape: `Envelope > Body > m:<LOCAL_NAME> xmlns:m=<NAMESPACE>`. A fresh
/// envelope is built on every call; nothing is reused.
pub fn encode_request<T: SoapPayload>(request: &T) -> Result<String, CallError> {
    let mut payload = request.to_element();
    payload.name = format!("m:{}", T::LOCAL_NAME);
    payload
        .attributes
        .insert("xmlns:m".to_string(), T::NAMESPACE.to_string());

    let mut body = Element::new("s:Body");
    body.children.push(XMLNode::Element(payload));

    let mut envelope = Element::new("s:Envelope");
    envelope
        .attributes
        .insert("xmlns:s".to_string(), SOAP_ENVELOPE_NS.to_string());
    envelope.attributes.insert(
        "s:encodingStyle".to_string(),
        SOAP_ENCODING_NS.to_string(),
    );
    envelope.children.push(XMLNode::Element(body));

    let mut buf = Vec::new();
    let config = xmltree::EmitterConfig::new()
        .write_document_declaration(true)
        .perform_indent(true)
        .indent_string("  ");
    envelope.write_with_config(&mut buf, config)?;

    String::from_utf8(buf).map_err(|e| CallError::Serialization(e.to_string()))
}

/// Decode a response body into the expected payload type.
///
/// Exactly one of three outcomes:
/// - `Ok(None)` for an empty Body (void operations);
/// - `Err(CallError::Remote(..))` when the single body element is a
///   qualified SOAP Fault;
/// - `Ok(Some(T))` otherwise, trusting that the element maps onto `T`.
///
/// A second sibling element under Body fails the decode before any content
/// is handed back, so a partial result never escapes.
pub fn decode_body<T: SoapPayload>(raw: &[u8]) -> Result<Option<T>, CallError> {
    let envelope = parse_envelope(raw)?;

    let mut elements = xml_children(&envelope.body.content);
    let Some(first) = elements.next() else {
        return Ok(None);
    };
    if elements.next().is_some() {
        return Err(CallError::Protocol(
            "multiple elements inside SOAP body; not wrapped-document/literal compliant"
                .to_string(),
        ));
    }

    if first.name == "Fault" && first.namespace.as_deref() == Some(SOAP_ENVELOPE_NS) {
        let fault = SoapFault::from_element(first)?;
        return Err(CallError::Remote(fault));
    }

    T::from_element(first).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xmlutil::{parse_child_or_default, push_text_child};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Echo {
        number: i32,
        label: String,
    }

    impl SoapPayload for Echo {
        const NAMESPACE: &'static str = "http://tempuri.org/";
        const LOCAL_NAME: &'static str = "Echo";

        fn to_element(&self) -> Element {
            let mut element = Element::new(Self::LOCAL_NAME);
            push_text_child(&mut element, "Number", &self.number.to_string());
            if !self.label.is_empty() {
                push_text_child(&mut element, "Label", &self.label);
            }
            element
        }

        fn from_element(element: &Element) -> Result<Self, CallError> {
            Ok(Self {
                number: parse_child_or_default(element, "Number")?,
                label: crate::xmlutil::child_text(element, "Label").unwrap_or_default(),
            })
        }
    }

    fn body_document(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>{inner}</s:Body>
</s:Envelope>"#
        )
    }

    #[test]
    fn encode_wraps_payload_in_envelope() {
        let xml = encode_request(&Echo {
            number: 7,
            label: "seven".to_string(),
        })
        .unwrap();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"xmlns:s="http://schemas.xmlsoap.org/soap/envelope/""#));
        assert!(xml.contains("<s:Body>"));
        assert!(xml.contains(r#"<m:Echo xmlns:m="http://tempuri.org/">"#));
        assert!(xml.contains("<Number>7</Number>"));
        assert!(xml.contains("<Label>seven</Label>"));
    }

    #[test]
    fn encode_then_decode_round_trips_field_values() {
        let original = Echo {
            number: -12,
            label: "négatif".to_string(),
        };
        let xml = encode_request(&original).unwrap();

        let decoded: Echo = decode_body(xml.as_bytes()).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_empty_body_is_not_an_error() {
        let xml = body_document("");
        let decoded: Option<Echo> = decode_body(xml.as_bytes()).unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn decode_fault_suppresses_content() {
        let xml = body_document(
            r#"<s:Fault>
                <faultcode>soap:Server</faultcode>
                <faultstring>Divide by zero</faultstring>
            </s:Fault>"#,
        );

        let err = decode_body::<Echo>(xml.as_bytes()).unwrap_err();
        match err {
            CallError::Remote(fault) => {
                assert_eq!(fault.code, "soap:Server");
                assert_eq!(fault.fault_string, "Divide by zero");
            }
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn decode_fault_error_message_is_the_fault_string() {
        let xml = body_document(
            r#"<s:Fault><faultcode>c</faultcode><faultstring>out of cheese</faultstring></s:Fault>"#,
        );

        let err = decode_body::<Echo>(xml.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "out of cheese");
    }

    #[test]
    fn decode_rejects_two_sibling_elements() {
        let xml = body_document(
            r#"<m:Echo xmlns:m="http://tempuri.org/"><Number>1</Number></m:Echo>
               <m:Echo xmlns:m="http://tempuri.org/"><Number>2</Number></m:Echo>"#,
        );

        let err = decode_body::<Echo>(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, CallError::Protocol(_)));
    }

    #[test]
    fn decode_rejects_fault_with_trailing_sibling() {
        let xml = body_document(
            r#"<s:Fault><faultstring>x</faultstring></s:Fault>
               <m:Echo xmlns:m="http://tempuri.org/"/>"#,
        );

        let err = decode_body::<Echo>(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, CallError::Protocol(_)));
    }

    #[test]
    fn unqualified_fault_element_decodes_as_content() {
        // Only the namespace-qualified Fault element is special.
        let xml = body_document(r#"<Fault><Number>3</Number></Fault>"#);
        let decoded: Echo = decode_body(xml.as_bytes()).unwrap().unwrap();
        assert_eq!(decoded.number, 3);
    }
}
