//! Calculator operation facade.

use soapcore::{BasicAuth, CallError, SoapClient};

use crate::types::{
    Add, AddResponse, Divide, DivideResponse, Multiply, MultiplyResponse, Subtract,
    SubtractResponse,
};

/// Public test endpoint of the calculator service
pub const DEFAULT_ENDPOINT: &str = "http://www.dneonline.com/calculator.asmx";

/// One client per service; immutable after construction, reusable across
/// calls and threads.
#[derive(Debug, Clone)]
pub struct CalculatorClient {
    client: SoapClient,
}

impl CalculatorClient {
    /// `endpoint = None` targets the public service.
    pub fn new(endpoint: Option<&str>, insecure_tls: bool, auth: Option<BasicAuth>) -> Self {
        let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT);
        Self {
            client: SoapClient::new(endpoint, insecure_tls, auth),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }

    pub fn add(&self, request: &Add) -> Result<AddResponse, CallError> {
        let response = self.client.call("http://tempuri.org/Add", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn subtract(&self, request: &Subtract) -> Result<SubtractResponse, CallError> {
        let response = self.client.call("http://tempuri.org/Subtract", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn multiply(&self, request: &Multiply) -> Result<MultiplyResponse, CallError> {
        let response = self.client.call("http://tempuri.org/Multiply", request)?;
        Ok(response.unwrap_or_default())
    }

    pub fn divide(&self, request: &Divide) -> Result<DivideResponse, CallError> {
        let response = self.client.call("http://tempuri.org/Divide", request)?;
        Ok(response.unwrap_or_default())
    }
}
