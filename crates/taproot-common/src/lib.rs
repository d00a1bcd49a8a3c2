//! Shared infrastructure for the taproot analyzer.
//!
//! This crate provides the one capability the scanning core consumes but
//! never implements itself:
//! - **Document retrieval** - fetch a URL's body as text, or fail

pub mod net;

pub use net::{DocumentSource, HttpSource, RetrievalError};
