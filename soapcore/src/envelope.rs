//! SOAP envelope structures and parsing

use std::io::BufReader;
use xmltree::Element;

use crate::error::CallError;

/// Namespace of the SOAP 1.1 Envelope/Header/Body/Fault elements
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// Parsed SOAP envelope
#[derive(Debug, Clone)]
pub struct SoapEnvelope {
    /// Optional SOAP header, normally absent
    pub header: Option<SoapHeader>,

    /// SOAP body containing the fault or the response payload
    pub body: SoapBody,
}

/// SOAP header, kept as raw XML
#[derive(Debug, Clone)]
pub struct SoapHeader {
    pub content: Element,
}

/// SOAP body, kept as raw XML
#[derive(Debug, Clone)]
pub struct SoapBody {
    pub content: Element,
}

impl SoapEnvelope {
    pub fn new(body: SoapBody) -> Self {
        Self { header: None, body }
    }

    pub fn with_header(header: SoapHeader, body: SoapBody) -> Self {
        Self {
            header: Some(header),
            body,
        }
    }
}

/// Parse a complete SOAP envelope from raw XML bytes.
///
/// The root element must be an Envelope and must contain a Body; the Header
/// is optional. Elements are located by local name so any namespace prefix
/// is accepted.
pub fn parse_envelope(xml: &[u8]) -> Result<SoapEnvelope, CallError> {
    let reader = BufReader::new(xml);
    let root = Element::parse(reader)?;

    if root.name != "Envelope" {
        return Err(CallError::Serialization(format!(
            "expected SOAP Envelope, found <{}>",
            root.name
        )));
    }

    let header = root
        .get_child("Header")
        .map(|e| SoapHeader { content: e.clone() });

    let body_elem = root
        .get_child("Body")
        .ok_or_else(|| CallError::Serialization("missing SOAP Body".to_string()))?;

    let body = SoapBody {
        content: body_elem.clone(),
    };

    Ok(SoapEnvelope { header, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_envelope_with_body() {
        let xml = r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <m:AddResponse xmlns:m="http://tempuri.org/">
      <AddResult>15</AddResult>
    </m:AddResponse>
  </s:Body>
</s:Envelope>"#;

        let envelope = parse_envelope(xml.as_bytes()).unwrap();
        assert!(envelope.header.is_none());
        assert_eq!(envelope.body.content.name, "Body");
    }

    #[test]
    fn parse_envelope_with_header() {
        let xml = r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Header><Session>abc</Session></s:Header>
  <s:Body/>
</s:Envelope>"#;

        let envelope = parse_envelope(xml.as_bytes()).unwrap();
        assert!(envelope.header.is_some());
    }

    #[test]
    fn parse_rejects_non_envelope_root() {
        let xml = r#"<root><child/></root>"#;
        let err = parse_envelope(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, CallError::Serialization(_)));
    }

    #[test]
    fn parse_rejects_missing_body() {
        let xml = r#"<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/"/>"#;
        let err = parse_envelope(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, CallError::Serialization(_)));
    }

    #[test]
    fn parse_rejects_malformed_xml() {
        let err = parse_envelope(b"<s:Envelope").unwrap_err();
        assert!(matches!(err, CallError::Serialization(_)));
    }
}
