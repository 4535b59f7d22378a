//! Interoperability with engines that report failures as data.
//!
//! Engines running in another process (or written in another language) can
//! hand their failure tree over as JSON; [`json::decode_node`] turns it into
//! an [`ErrorNode`](crate::ErrorNode).

pub mod json;

pub use json::decode_node;
