//! Pure UI state, provided to components as `RwSignal` context.

pub mod assistant;
pub mod connectivity;
pub mod toast;
