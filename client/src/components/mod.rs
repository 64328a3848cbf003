//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each feature card reads and writes its own state through a Leptos context
//! provided by `app::App`; cards never share state with each other.

pub mod ai_assistant;
pub mod ipv6_check;
pub mod regional_stats;
pub mod toast;
