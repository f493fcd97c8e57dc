//! Golden calculator scenarios against a stub arithmetic backend.

use soapcalc::{Add, CalculatorClient, Divide, Multiply, Subtract};
use soapcore::CallError;
use soapcore::xmlutil::child_text;
use soapstub::{StubResponse, StubSoapServer};
use xmltree::Element;

/// A stub that actually does the arithmetic, so each golden value exercises
/// the full encode/transport/decode path.
fn arithmetic_stub() -> StubSoapServer {
    StubSoapServer::start(|request| {
        let root = Element::parse(request.body.as_bytes()).expect("malformed request envelope");
        let body = root.get_child("Body").expect("missing Body");
        let operation = body
            .children
            .iter()
            .find_map(|n| n.as_element())
            .expect("empty Body");

        let int_a: i64 = child_text(operation, "intA")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let int_b: i64 = child_text(operation, "intB")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        let result = match operation.name.as_str() {
            "Add" => int_a + int_b,
            "Subtract" => int_a - int_b,
            "Multiply" => int_a * int_b,
            "Divide" if int_b != 0 => int_a / int_b,
            "Divide" => {
                let fault = soapcore::SoapFault::new("soap:Server", "Divide by zero");
                return StubResponse::xml(fault.to_xml().unwrap()).with_status(500);
            }
            other => panic!("unexpected operation {other}"),
        };

        StubResponse::xml(format!(
            r#"<?xml version="1.0"?>
<s:Envelope xmlns:s="http://schemas.xmlsoap.org/soap/envelope/">
  <s:Body>
    <m:{name}Response xmlns:m="http://tempuri.org/">
      <{name}Result>{result}</{name}Result>
    </m:{name}Response>
  </s:Body>
</s:Envelope>"#,
            name = operation.name
        ))
    })
}

fn stub_client(server: &StubSoapServer) -> CalculatorClient {
    CalculatorClient::new(Some(&server.url()), false, None)
}

#[test]
fn add_ten_and_five_is_fifteen() {
    let server = arithmetic_stub();
    let client = stub_client(&server);
    let response = client.add(&Add { int_a: 10, int_b: 5 }).unwrap();
    assert_eq!(response.add_result, 15);
}

#[test]
fn subtract_five_from_ten_is_five() {
    let server = arithmetic_stub();
    let client = stub_client(&server);
    let response = client
        .subtract(&Subtract { int_a: 10, int_b: 5 })
        .unwrap();
    assert_eq!(response.subtract_result, 5);
}

#[test]
fn multiply_ten_by_five_is_fifty() {
    let server = arithmetic_stub();
    let client = stub_client(&server);
    let response = client
        .multiply(&Multiply { int_a: 10, int_b: 5 })
        .unwrap();
    assert_eq!(response.multiply_result, 50);
}

#[test]
fn divide_ten_by_five_is_two() {
    let server = arithmetic_stub();
    let client = stub_client(&server);
    let response = client.divide(&Divide { int_a: 10, int_b: 5 }).unwrap();
    assert_eq!(response.divide_result, 2);
}

#[test]
fn divide_by_zero_surfaces_the_server_fault() {
    let server = arithmetic_stub();
    let client = stub_client(&server);
    let err = client.divide(&Divide { int_a: 10, int_b: 0 }).unwrap_err();

    match err {
        CallError::Remote(fault) => assert_eq!(fault.fault_string, "Divide by zero"),
        other => panic!("expected Remote fault, got {other:?}"),
    }
    // int_b = 0 is omitted on the wire, the stub reads it back as zero.
}

#[test]
fn empty_body_yields_the_default_response() {
    let server = StubSoapServer::start(|_| StubResponse::empty());
    let client = stub_client(&server);
    let response = client.add(&Add { int_a: 1, int_b: 2 }).unwrap();
    assert_eq!(response.add_result, 0);
}
