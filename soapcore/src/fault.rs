//! SOAP Fault handling

use thiserror::Error;
use xmltree::{Element, XMLNode};

use crate::envelope::SOAP_ENVELOPE_NS;
use crate::error::CallError;
use crate::xmlutil::{child_text, push_text_child, xml_children};

/// Server-reported SOAP Fault.
///
/// When a Fault is present it is the authoritative outcome of the call and
/// suppresses the response payload. The display of this type is the
/// faultstring alone, so wrapping it in an error keeps the server's message
/// intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{fault_string}")]
pub struct SoapFault {
    /// Coarse fault code (ex: "soap:Client", "soap:Server")
    pub code: String,

    /// Human-readable description
    pub fault_string: String,

    /// Who raised the fault, when reported
    pub actor: Option<String>,

    /// Implementation-specific diagnostic text, kept opaque
    pub detail: Option<String>,
}

impl SoapFault {
    pub fn new(code: impl Into<String>, fault_string: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            fault_string: fault_string.into(),
            actor: None,
            detail: None,
        }
    }

    /// Decode a Fault from its body element.
    ///
    /// The detail sub-element has no schema of its own; nested markup is
    /// serialized back to text and stored opaquely.
    pub fn from_element(element: &Element) -> Result<Self, CallError> {
        let code = child_text(element, "faultcode").unwrap_or_default();
        let fault_string = child_text(element, "faultstring").unwrap_or_default();
        let actor = child_text(element, "faultactor");

        let detail = match element.get_child("detail") {
            Some(detail_elem) => opaque_text(detail_elem)?,
            None => None,
        };

        Ok(Self {
            code,
            fault_string,
            actor,
            detail,
        })
    }

    /// Build a complete fault response envelope.
    ///
    /// Used by stub servers and tests to produce canned fault bodies.
    pub fn to_xml(&self) -> Result<String, CallError> {
        let mut fault = Element::new("s:Fault");
        push_text_child(&mut fault, "faultcode", &self.code);
        push_text_child(&mut fault, "faultstring", &self.fault_string);
        if let Some(actor) = &self.actor {
            push_text_child(&mut fault, "faultactor", actor);
        }
        if let Some(detail) = &self.detail {
            push_text_child(&mut fault, "detail", detail);
        }

        let mut body = Element::new("s:Body");
        body.children.push(XMLNode::Element(fault));

        let mut envelope = Element::new("s:Envelope");
        envelope
            .attributes
            .insert("xmlns:s".to_string(), SOAP_ENVELOPE_NS.to_string());
        envelope.children.push(XMLNode::Element(body));

        let mut buf = Vec::new();
        let config = xmltree::EmitterConfig::new()
            .write_document_declaration(true)
            .perform_indent(true)
            .indent_string("  ");
        envelope.write_with_config(&mut buf, config)?;

        String::from_utf8(buf).map_err(|e| CallError::Serialization(e.to_string()))
    }
}

/// Flatten an element of unspecified shape into diagnostic text.
fn opaque_text(element: &Element) -> Result<Option<String>, CallError> {
    let mut nested = String::new();
    for child in xml_children(element) {
        let mut buf = Vec::new();
        let config = xmltree::EmitterConfig::new().write_document_declaration(false);
        child.write_with_config(&mut buf, config)?;
        nested.push_str(&String::from_utf8_lossy(&buf));
    }

    if !nested.is_empty() {
        return Ok(Some(nested));
    }

    Ok(element.get_text().map(|t| t.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_fault_envelope() {
        let fault = SoapFault::new("s:Client", "Invalid Action");
        let xml = fault.to_xml().unwrap();

        assert!(xml.contains("<s:Fault>"));
        assert!(xml.contains("<faultcode>s:Client</faultcode>"));
        assert!(xml.contains("<faultstring>Invalid Action</faultstring>"));
        assert!(!xml.contains("faultactor"));
        assert!(!xml.contains("detail"));
    }

    #[test]
    fn build_fault_envelope_with_actor_and_detail() {
        let fault = SoapFault {
            code: "s:Server".to_string(),
            fault_string: "boom".to_string(),
            actor: Some("urn:backend".to_string()),
            detail: Some("stack overflow at 0x0".to_string()),
        };
        let xml = fault.to_xml().unwrap();

        assert!(xml.contains("<faultactor>urn:backend</faultactor>"));
        assert!(xml.contains("<detail>stack overflow at 0x0</detail>"));
    }

    #[test]
    fn decode_fault_with_text_detail() {
        let xml = r#"<Fault xmlns="http://schemas.xmlsoap.org/soap/envelope/">
            <faultcode>soap:Server</faultcode>
            <faultstring>Internal error</faultstring>
            <faultactor>urn:storage</faultactor>
            <detail>bucket is locked</detail>
        </Fault>"#;
        let element = Element::parse(xml.as_bytes()).unwrap();

        let fault = SoapFault::from_element(&element).unwrap();
        assert_eq!(fault.code, "soap:Server");
        assert_eq!(fault.fault_string, "Internal error");
        assert_eq!(fault.actor.as_deref(), Some("urn:storage"));
        assert_eq!(fault.detail.as_deref(), Some("bucket is locked"));
    }

    #[test]
    fn decode_fault_keeps_structured_detail_opaque() {
        let xml = r#"<Fault>
            <faultcode>soap:Client</faultcode>
            <faultstring>No such bucket</faultstring>
            <detail><Error><Code>NoSuchBucket</Code></Error></detail>
        </Fault>"#;
        let element = Element::parse(xml.as_bytes()).unwrap();

        let fault = SoapFault::from_element(&element).unwrap();
        let detail = fault.detail.unwrap();
        assert!(detail.contains("NoSuchBucket"));
    }

    #[test]
    fn display_is_the_fault_string() {
        let fault = SoapFault::new("s:Server", "Divide by zero");
        assert_eq!(fault.to_string(), "Divide by zero");
    }
}
