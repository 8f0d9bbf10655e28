//! Configuration store adapters.

mod json;

pub use json::JsonConfigStore;
