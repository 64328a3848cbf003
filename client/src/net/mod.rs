//! Network modules for server API calls and external address lookups.

pub mod api;
pub mod ipify;
pub mod types;
