// Real Estate Listing Generator - HTTP service
//
// Exposes the listing pipeline over HTTP. The pipeline itself lives in the
// `listing` crate; this crate only wires configuration, transport and
// request/response artifacts around it.

pub mod artifacts;
pub mod config;
pub mod server;

pub use config::*;
