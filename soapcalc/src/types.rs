//! Request/response shapes of the calculator service.
//!
//! Integer arguments follow the service's omit-when-zero wire convention:
//! a zero operand is left out of the request element and an absent result
//! reads back as zero.

use soapcore::xmlutil::{parse_child_or_default, push_text_child};
use soapcore::{CallError, SoapPayload};
use xmltree::Element;

/// Namespace of every calculator operation
pub const TEMPURI_NS: &str = "http://tempuri.org/";

fn push_operand(element: &mut Element, name: &str, value: i32) {
    if value != 0 {
        push_text_child(element, name, &value.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Add {
    pub int_a: i32,
    pub int_b: i32,
}

impl SoapPayload for Add {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "Add";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "intA", self.int_a);
        push_operand(&mut element, "intB", self.int_b);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            int_a: parse_child_or_default(element, "intA")?,
            int_b: parse_child_or_default(element, "intB")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddResponse {
    pub add_result: i32,
}

impl SoapPayload for AddResponse {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "AddResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "AddResult", self.add_result);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            add_result: parse_child_or_default(element, "AddResult")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtract {
    pub int_a: i32,
    pub int_b: i32,
}

impl SoapPayload for Subtract {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "Subtract";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "intA", self.int_a);
        push_operand(&mut element, "intB", self.int_b);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            int_a: parse_child_or_default(element, "intA")?,
            int_b: parse_child_or_default(element, "intB")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtractResponse {
    pub subtract_result: i32,
}

impl SoapPayload for SubtractResponse {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "SubtractResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "SubtractResult", self.subtract_result);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            subtract_result: parse_child_or_default(element, "SubtractResult")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Multiply {
    pub int_a: i32,
    pub int_b: i32,
}

impl SoapPayload for Multiply {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "Multiply";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "intA", self.int_a);
        push_operand(&mut element, "intB", self.int_b);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            int_a: parse_child_or_default(element, "intA")?,
            int_b: parse_child_or_default(element, "intB")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiplyResponse {
    pub multiply_result: i32,
}

impl SoapPayload for MultiplyResponse {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "MultiplyResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "MultiplyResult", self.multiply_result);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            multiply_result: parse_child_or_default(element, "MultiplyResult")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Divide {
    pub int_a: i32,
    pub int_b: i32,
}

impl SoapPayload for Divide {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "Divide";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "intA", self.int_a);
        push_operand(&mut element, "intB", self.int_b);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            int_a: parse_child_or_default(element, "intA")?,
            int_b: parse_child_or_default(element, "intB")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivideResponse {
    pub divide_result: i32,
}

impl SoapPayload for DivideResponse {
    const NAMESPACE: &'static str = TEMPURI_NS;
    const LOCAL_NAME: &'static str = "DivideResponse";

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::LOCAL_NAME);
        push_operand(&mut element, "DivideResult", self.divide_result);
        element
    }

    fn from_element(element: &Element) -> Result<Self, CallError> {
        Ok(Self {
            divide_result: parse_child_or_default(element, "DivideResult")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soapcore::{decode_body, encode_request};

    #[test]
    fn request_round_trips_through_the_codec() {
        let request = Add { int_a: 10, int_b: 5 };
        let xml = encode_request(&request).unwrap();

        assert!(xml.contains(r#"<m:Add xmlns:m="http://tempuri.org/">"#));
        assert!(xml.contains("<intA>10</intA>"));
        assert!(xml.contains("<intB>5</intB>"));

        let back: Add = decode_body(xml.as_bytes()).unwrap().unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn zero_operands_are_omitted() {
        let xml = encode_request(&Divide { int_a: 4, int_b: 0 }).unwrap();
        assert!(xml.contains("<intA>4</intA>"));
        assert!(!xml.contains("intB"));

        let back: Divide = decode_body(xml.as_bytes()).unwrap().unwrap();
        assert_eq!(back, Divide { int_a: 4, int_b: 0 });
    }

    #[test]
    fn response_reads_its_result_field() {
        let xml = r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <m:MultiplyResponse xmlns:m="http://tempuri.org/">
      <MultiplyResult>50</MultiplyResult>
    </m:MultiplyResponse>
  </s:Body>
</s:Envelope>"#;

        let response: MultiplyResponse = decode_body(xml.as_bytes()).unwrap().unwrap();
        assert_eq!(response.multiply_result, 50);
    }
}
