use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::task::Poll;

use futures::executor::block_on;

use super::*;

// =========================================================================
// StubFetcher
// =========================================================================

#[derive(Default)]
struct StubFetcher {
    replies: HashMap<&'static str, Result<String, LookupError>>,
    calls: RefCell<Vec<String>>,
}

impl StubFetcher {
    fn with(mut self, url: &'static str, reply: Result<&str, LookupError>) -> Self {
        self.replies.insert(url, reply.map(str::to_owned));
        self
    }
}

impl AddressFetcher for StubFetcher {
    async fn fetch_ip(&self, url: &str) -> Result<String, LookupError> {
        self.calls.borrow_mut().push(url.to_owned());
        self.replies
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::Transport("unexpected url".into())))
    }
}

fn offline() -> LookupError {
    LookupError::Transport("network unreachable".into())
}

// =========================================================================
// check_connectivity
// =========================================================================

#[test]
fn dual_stack_reports_both_addresses() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Ok("203.0.113.7"))
        .with(IPV64_ENDPOINT, Ok("2001:db8::7"));

    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4.as_deref(), Some("203.0.113.7"));
    assert_eq!(report.ipv6.as_deref(), Some("2001:db8::7"));
    assert_eq!(fetcher.calls.borrow().len(), 2);
}

#[test]
fn ipv4_only_host_has_no_ipv6() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Ok("198.51.100.4"))
        .with(IPV64_ENDPOINT, Ok("198.51.100.4"));

    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4.as_deref(), Some("198.51.100.4"));
    assert_eq!(report.ipv6, None);
}

#[test]
fn ipv6_only_host_has_no_ipv4() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Err(offline()))
        .with(IPV64_ENDPOINT, Ok("2001:db8:1::1"));

    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4, None);
    assert_eq!(report.ipv6.as_deref(), Some("2001:db8:1::1"));
}

#[test]
fn ipv4_address_from_dual_endpoint_fills_missing_ipv4() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Err(LookupError::Status(503)))
        .with(IPV64_ENDPOINT, Ok("192.0.2.10"));

    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4.as_deref(), Some("192.0.2.10"));
    assert_eq!(report.ipv6, None);
}

#[test]
fn both_failing_is_combined_error() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Err(offline()))
        .with(IPV64_ENDPOINT, Err(LookupError::Status(500)));

    let err = block_on(check_connectivity(&fetcher)).unwrap_err();
    assert_eq!(err.ipv4, offline());
    assert_eq!(err.ipv6, LookupError::Status(500));
}

#[test]
fn non_address_body_counts_as_failure() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Ok("203.0.113.7"))
        .with(IPV64_ENDPOINT, Ok("<html>captive portal</html>"));

    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4.as_deref(), Some("203.0.113.7"));
    assert_eq!(report.ipv6, None);
}

#[test]
fn non_address_bodies_on_both_is_combined_error() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Ok("nope"))
        .with(IPV64_ENDPOINT, Ok(""));

    let err = block_on(check_connectivity(&fetcher)).unwrap_err();
    assert_eq!(err.ipv4, LookupError::NotAnAddress("nope".into()));
    assert_eq!(err.ipv6, LookupError::NotAnAddress(String::new()));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let fetcher = StubFetcher::default()
        .with(IPV4_ENDPOINT, Ok(" 203.0.113.7\n"))
        .with(IPV64_ENDPOINT, Ok("2001:db8::7 "));

    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4.as_deref(), Some("203.0.113.7"));
    assert_eq!(report.ipv6.as_deref(), Some("2001:db8::7"));
}

// =========================================================================
// concurrency
// =========================================================================

/// Each lookup waits (for a bounded number of polls) until its sibling has
/// started. A sequential implementation starves the first lookup and fails.
#[derive(Default)]
struct RendezvousFetcher {
    started: Cell<usize>,
}

impl AddressFetcher for RendezvousFetcher {
    async fn fetch_ip(&self, url: &str) -> Result<String, LookupError> {
        self.started.set(self.started.get() + 1);

        let mut polls = 0;
        futures::future::poll_fn(|cx| {
            if self.started.get() >= 2 || polls > 8 {
                return Poll::Ready(());
            }
            polls += 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        })
        .await;

        if self.started.get() < 2 {
            return Err(LookupError::Transport("sibling lookup never started".into()));
        }
        Ok(if url == IPV4_ENDPOINT { "203.0.113.7" } else { "2001:db8::7" }.to_owned())
    }
}

#[test]
fn lookups_are_in_flight_together() {
    let fetcher = RendezvousFetcher::default();
    let report = block_on(check_connectivity(&fetcher)).unwrap();
    assert_eq!(report.ipv4.as_deref(), Some("203.0.113.7"));
    assert_eq!(report.ipv6.as_deref(), Some("2001:db8::7"));
}
