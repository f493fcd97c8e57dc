use thiserror::Error;

use crate::fault::SoapFault;

/// Everything that can go wrong during one SOAP call.
///
/// A [`SoapFault`] reported by the server is a normal application-level
/// outcome and is carried in [`CallError::Remote`]; its display is exactly
/// the faultstring. Nothing is retried at this layer.
#[derive(Debug, Error)]
pub enum CallError {
    /// DNS, connect or socket failure
    #[error("transport error: {0}")]
    Transport(String),

    /// The connect attempt exceeded the configured bound
    #[error("connect timeout: {0}")]
    Timeout(String),

    /// Malformed XML on encode or decode
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Response violates the single-element-body contract
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The server returned a SOAP Fault
    #[error("{0}")]
    Remote(#[from] SoapFault),
}

impl From<xmltree::ParseError> for CallError {
    fn from(err: xmltree::ParseError) -> Self {
        CallError::Serialization(err.to_string())
    }
}

impl From<xmltree::Error> for CallError {
    fn from(err: xmltree::Error) -> Self {
        CallError::Serialization(err.to_string())
    }
}
