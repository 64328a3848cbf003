//! Utility helpers shared across client UI modules.

pub mod bar_chart;
pub mod markdown;
