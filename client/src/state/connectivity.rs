//! Connectivity check state.
//!
//! DESIGN
//! ======
//! A run moves `NotRun -> Pending -> Completed`, and a completed check
//! re-enters `Pending` when run again. Each run replaces the previous result
//! wholesale; nothing from an earlier run survives into the next.

#[cfg(test)]
#[path = "connectivity_test.rs"]
mod connectivity_test;

use crate::net::ipify::{ConnectivityError, LookupReport};

/// Banner shown when neither lookup endpoint could be reached.
pub const COMBINED_ERROR: &str = "Could not connect to test servers. Please check your internet connection.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckPhase {
    #[default]
    NotRun,
    Pending,
    Completed,
}

/// Outcome of one completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectivityResult {
    pub ipv4_address: Option<String>,
    pub ipv6_address: Option<String>,
    pub error_message: Option<String>,
}

/// Per-protocol verdict shown in the result cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProtocolStatus {
    /// No completed run to report on.
    Unknown,
    Supported(String),
    Unsupported,
}

impl ProtocolStatus {
    #[must_use]
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectivityState {
    pub phase: CheckPhase,
    pub result: Option<ConnectivityResult>,
}

impl ConnectivityState {
    /// Clear any previous result and enter `Pending`.
    #[must_use]
    pub fn begin_run(self) -> Self {
        Self { phase: CheckPhase::Pending, result: None }
    }

    /// Record the lookup outcome and enter `Completed`.
    #[must_use]
    pub fn complete(self, outcome: Result<LookupReport, ConnectivityError>) -> Self {
        let result = match outcome {
            Ok(report) => ConnectivityResult {
                ipv4_address: report.ipv4,
                ipv6_address: report.ipv6,
                error_message: None,
            },
            Err(_) => ConnectivityResult {
                error_message: Some(COMBINED_ERROR.to_owned()),
                ..ConnectivityResult::default()
            },
        };
        Self { phase: CheckPhase::Completed, result: Some(result) }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.phase == CheckPhase::Pending
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.phase != CheckPhase::NotRun
    }

    #[must_use]
    pub fn ipv6_status(&self) -> ProtocolStatus {
        self.status(|r| r.ipv6_address.as_deref())
    }

    #[must_use]
    pub fn ipv4_status(&self) -> ProtocolStatus {
        self.status(|r| r.ipv4_address.as_deref())
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.result.as_ref()?.error_message.as_deref()
    }

    /// Label for the run button in the current phase.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            CheckPhase::NotRun => "Run IPv6 Test",
            CheckPhase::Pending => "Running tests...",
            CheckPhase::Completed => "Run Test Again",
        }
    }

    fn status(&self, pick: impl Fn(&ConnectivityResult) -> Option<&str>) -> ProtocolStatus {
        if self.phase != CheckPhase::Completed {
            return ProtocolStatus::Unknown;
        }
        match self.result.as_ref().and_then(pick) {
            Some(addr) => ProtocolStatus::Supported(addr.to_owned()),
            None => ProtocolStatus::Unsupported,
        }
    }
}

// =============================================================================
// LABELS
// =============================================================================

#[must_use]
pub fn ipv6_label(status: &ProtocolStatus) -> String {
    match status {
        ProtocolStatus::Supported(addr) => format!("Supported. Your IPv6 address is: {addr}"),
        ProtocolStatus::Unsupported => "Not supported or not configured.".to_owned(),
        ProtocolStatus::Unknown => String::new(),
    }
}

#[must_use]
pub fn ipv4_label(status: &ProtocolStatus) -> String {
    match status {
        ProtocolStatus::Supported(addr) => format!("Supported. Your IPv4 address is: {addr}"),
        ProtocolStatus::Unsupported => "Not supported. You may have an IPv6-only connection.".to_owned(),
        ProtocolStatus::Unknown => String::new(),
    }
}
