//! # soapcalc - calculator SOAP service bindings
//!
//! Typed request/response pairs and a facade for the DNE Online test
//! calculator (`http://tempuri.org/`): Add, Subtract, Multiply, Divide.
//! All wire handling is delegated to [`soapcore`].

mod client;
mod types;

pub use client::{CalculatorClient, DEFAULT_ENDPOINT};
pub use types::{
    Add, AddResponse, Divide, DivideResponse, Multiply, MultiplyResponse, Subtract,
    SubtractResponse, TEMPURI_NS,
};
