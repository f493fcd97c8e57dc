//! One-shot SOAP HTTP transport.

use std::time::Duration;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;
use ureq::Agent;
use ureq::tls::TlsConfig;

use crate::codec::{SoapPayload, decode_body, encode_request};
use crate::error::CallError;

/// Bound on connection establishment. Read/write rely on the transport's
/// own defaults; only the connect phase is time-boxed.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "soapwire/0.1";

/// Static HTTP Basic credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub login: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    fn header_value(&self) -> String {
        let credentials = format!("{}:{}", self.login, self.password);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

/// SOAP transport client.
///
/// Configuration is immutable after construction and the client owns no
/// connection state: every call builds its own agent and buffers, so one
/// client can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct SoapClient {
    endpoint: String,
    insecure_tls: bool,
    auth: Option<BasicAuth>,
    connect_timeout: Duration,
}

impl SoapClient {
    /// `insecure_tls` bypasses certificate verification during dial. It is
    /// a trust-the-caller escape hatch and changes nothing else about the
    /// exchange.
    pub fn new(endpoint: impl Into<String>, insecure_tls: bool, auth: Option<BasicAuth>) -> Self {
        Self {
            endpoint: endpoint.into(),
            insecure_tls,
            auth,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Override the connect timeout. Each client carries its own value, so
    /// clients with different timeouts can coexist.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute exactly one request/response exchange.
    ///
    /// `action` goes into the SOAPAction header and is omitted when empty.
    /// Any HTTP status is accepted as long as the body is well-formed XML
    /// or empty; application errors travel as SOAP Faults. An empty body
    /// yields `Ok(None)`. No retries.
    pub fn call<Req, Resp>(&self, action: &str, request: &Req) -> Result<Option<Resp>, CallError>
    where
        Req: SoapPayload,
        Resp: SoapPayload,
    {
        let envelope = encode_request(request)?;
        debug!("SOAP request to {}: {}", self.endpoint, envelope);

        let agent = self.build_agent();
        let mut builder = agent
            .post(&self.endpoint)
            .header("Content-Type", r#"text/xml; charset="utf-8""#)
            .header("User-Agent", USER_AGENT)
            .header("Connection", "close");
        if !action.is_empty() {
            builder = builder.header("SOAPAction", action);
        }
        if let Some(auth) = &self.auth {
            builder = builder.header("Authorization", auth.header_value());
        }

        let mut response = builder.send(envelope).map_err(map_transport_error)?;
        let raw = response
            .body_mut()
            .read_to_string()
            .map_err(map_transport_error)?;
        debug!("SOAP response from {}: {}", self.endpoint, raw);

        if raw.is_empty() {
            debug!("empty SOAP response body, treating as success");
            return Ok(None);
        }

        decode_body(raw.as_bytes())
    }

    // A fresh agent per call: no connection reuse across calls, and 4xx/5xx
    // must not short-circuit before the fault body is read.
    fn build_agent(&self) -> Agent {
        let mut config = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_connect(Some(self.connect_timeout));
        if self.insecure_tls {
            config = config.tls_config(TlsConfig::builder().disable_verification(true).build());
        }
        config.build().into()
    }
}

fn map_transport_error(err: ureq::Error) -> CallError {
    if matches!(err, ureq::Error::Timeout(_)) {
        CallError::Timeout(err.to_string())
    } else {
        CallError::Transport(err.to_string())
    }
}
