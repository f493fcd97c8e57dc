//! # soapcore - SOAP 1.1 envelope codec and transport
//!
//! Generic, fault-aware SOAP RPC core shared by the service binding crates.
//! It turns a typed request value into an XML envelope, POSTs it over HTTP,
//! and turns the HTTP response back into a typed value or a structured error.
//!
//! ## Architecture
//!
//! - [`SoapEnvelope`] : parsed envelope (header + body)
//! - [`SoapPayload`] : element identity + tree conversion for payload types
//! - [`SoapFault`] : server-reported SOAP Fault
//! - [`SoapClient`] : one-shot HTTP POST transport
//! - [`CallError`] : error taxonomy for a call
//!
//! ## Example
//!
//! ```ignore
//! use soapcore::{SoapClient, SoapPayload};
//!
//! let client = SoapClient::new("http://example.org/service.asmx", false, None);
//! let response: Option<AddResponse> = client.call("http://tempuri.org/Add", &request)?;
//! ```

mod client;
mod codec;
mod envelope;
mod error;
mod fault;
pub mod xmlutil;

pub use client::{BasicAuth, DEFAULT_CONNECT_TIMEOUT, SoapClient};
pub use codec::{SoapPayload, decode_body, encode_request};
pub use envelope::{SOAP_ENVELOPE_NS, SoapBody, SoapEnvelope, SoapHeader, parse_envelope};
pub use error::CallError;
pub use fault::SoapFault;
