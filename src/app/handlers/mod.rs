//! Event handlers for the application
//!
//! Completions of backend requests arrive here from the event loop.

mod service;

pub use service::ServiceEvent;
