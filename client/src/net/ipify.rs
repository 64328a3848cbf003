//! IP lookup client for the connectivity check.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs in the browser: the point is to observe the visitor's own network
//! path, so the requests must leave from the visitor's machine. Both lookups
//! are put in flight together and each settles on its own; one endpoint's
//! failure never masks the other's answer.
//!
//! The dual-stack endpoint answers over whichever family the browser picked.
//! An IPv6 literal from it proves an IPv6 path; an IPv4 literal proves only
//! IPv4, so it is filed under IPv4 instead.

#[cfg(test)]
#[path = "ipify_test.rs"]
mod ipify_test;

use std::net::IpAddr;

/// Resolves over IPv4 only.
pub const IPV4_ENDPOINT: &str = "https://api.ipify.org?format=json";
/// Resolves over IPv6 when the caller has a working IPv6 path, IPv4 otherwise.
pub const IPV64_ENDPOINT: &str = "https://api64.ipify.org?format=json";

/// Why a single lookup produced no address.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("lookup returned status {0}")]
    Status(u16),
    #[error("response body unreadable: {0}")]
    Body(String),
    #[error("not an IP address: {0:?}")]
    NotAnAddress(String),
}

/// Both lookups failed; the visitor is probably offline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("both address lookups failed (IPv4: {ipv4}; IPv6: {ipv6})")]
pub struct ConnectivityError {
    pub ipv4: LookupError,
    pub ipv6: LookupError,
}

/// Per-protocol outcome. `None` means that protocol looked unsupported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupReport {
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
}

/// Fetches the `ip` field from one lookup endpoint.
#[allow(async_fn_in_trait)]
pub trait AddressFetcher {
    /// # Errors
    ///
    /// Returns a [`LookupError`] for transport failures, non-2xx statuses, or
    /// an undecodable body.
    async fn fetch_ip(&self, url: &str) -> Result<String, LookupError>;
}

/// Run both lookups concurrently and combine their settled results.
///
/// # Errors
///
/// Returns [`ConnectivityError`] only when both lookups fail.
pub async fn check_connectivity<F: AddressFetcher>(fetcher: &F) -> Result<LookupReport, ConnectivityError> {
    let (ipv4, ipv64) = futures::join!(lookup(fetcher, IPV4_ENDPOINT), lookup(fetcher, IPV64_ENDPOINT));
    settle(ipv4, ipv64)
}

async fn lookup<F: AddressFetcher>(fetcher: &F, url: &str) -> Result<IpAddr, LookupError> {
    let raw = fetcher.fetch_ip(url).await?;
    raw.trim()
        .parse::<IpAddr>()
        .map_err(|_| LookupError::NotAnAddress(raw))
}

fn settle(
    ipv4: Result<IpAddr, LookupError>,
    ipv64: Result<IpAddr, LookupError>,
) -> Result<LookupReport, ConnectivityError> {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = &ipv4 {
            log::warn!("IPv4 lookup failed: {e}");
        }
        if let Err(e) = &ipv64 {
            log::warn!("IPv6 lookup failed: {e}");
        }
    }

    let (ipv4, ipv64) = match (ipv4, ipv64) {
        (Err(ipv4), Err(ipv6)) => return Err(ConnectivityError { ipv4, ipv6 }),
        pair => pair,
    };

    let mut report = LookupReport {
        ipv4: ipv4.ok().filter(IpAddr::is_ipv4).map(|a| a.to_string()),
        ipv6: None,
    };
    match ipv64 {
        Ok(addr @ IpAddr::V6(_)) => report.ipv6 = Some(addr.to_string()),
        Ok(addr @ IpAddr::V4(_)) => {
            if report.ipv4.is_none() {
                report.ipv4 = Some(addr.to_string());
            }
        }
        Err(_) => {}
    }
    Ok(report)
}

// =============================================================================
// BROWSER FETCHER
// =============================================================================

/// `gloo-net` fetcher used by the hydrated UI.
#[cfg(feature = "hydrate")]
pub struct BrowserFetcher;

#[cfg(feature = "hydrate")]
impl AddressFetcher for BrowserFetcher {
    async fn fetch_ip(&self, url: &str) -> Result<String, LookupError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(LookupError::Status(resp.status()));
        }
        let body: super::types::IpResponse = resp
            .json()
            .await
            .map_err(|e| LookupError::Body(e.to_string()))?;
        Ok(body.ip)
    }
}
