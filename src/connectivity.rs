//! Startup connectivity probe
//!
//! Resolves the lookup service's host name once before the picker starts
//! listening for keys. Only a "host not found" failure puts the picker
//! offline; any other probe error is treated as reachable and left for the
//! lookups themselves to report.

use crate::picker::Stage;
use log::{debug, info};
use std::io;
use std::net::ToSocketAddrs;

/// Default host checked at startup
pub const DEFAULT_PROBE_HOST: &str = "emoji.getdango.com";

/// Result of a single probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The host resolved to at least one address
    Reachable,
    /// The resolver reported that the host does not exist
    Unreachable,
    /// Any other failure (resolver timeout, permission, ...)
    OtherError,
}

impl ProbeOutcome {
    /// Stage the picker enters once this outcome is known
    #[must_use]
    pub const fn initial_stage(self) -> Stage {
        match self {
            Self::Unreachable => Stage::Offline,
            Self::Reachable | Self::OtherError => Stage::Searching,
        }
    }
}

/// Network-presence probe collaborator
pub trait Probe {
    /// Probe `host` once
    fn probe(&self, host: &str) -> ProbeOutcome;
}

/// Probe backed by the system resolver
#[derive(Debug, Default, Clone, Copy)]
pub struct DnsProbe;

impl Probe for DnsProbe {
    fn probe(&self, host: &str) -> ProbeOutcome {
        let outcome = match (host, 443).to_socket_addrs() {
            Ok(mut addrs) => {
                if addrs.next().is_some() {
                    ProbeOutcome::Reachable
                } else {
                    ProbeOutcome::Unreachable
                }
            }
            Err(e) => classify_resolve_error(&e),
        };
        debug!("Probe of {host} finished: {outcome:?}");
        outcome
    }
}

/// Map a resolver error onto a probe outcome
///
/// The standard library reports getaddrinfo failures as uncategorized
/// errors, so "host not found" is recognised by the resolver's message.
fn classify_resolve_error(e: &io::Error) -> ProbeOutcome {
    if e.kind() == io::ErrorKind::NotFound {
        return ProbeOutcome::Unreachable;
    }

    let message = e.to_string().to_lowercase();
    let not_found = [
        "name or service not known",
        "nodename nor servname provided",
        "no such host",
        "no address associated with hostname",
        "host not found",
    ];

    if not_found.iter().any(|sig| message.contains(sig)) {
        ProbeOutcome::Unreachable
    } else {
        ProbeOutcome::OtherError
    }
}

/// Run the startup check against `host` and return the picker's first stage
pub fn check(probe: &dyn Probe, host: &str) -> Stage {
    let outcome = probe.probe(host);
    let stage = outcome.initial_stage();
    info!("Connectivity check for {host}: {outcome:?} -> {stage:?}");
    stage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubProbe;

    #[test]
    fn test_unreachable_goes_offline() {
        let probe = StubProbe::new(ProbeOutcome::Unreachable);
        assert_eq!(check(&probe, DEFAULT_PROBE_HOST), Stage::Offline);
        assert_eq!(probe.probed(), vec![DEFAULT_PROBE_HOST.to_string()]);
    }

    #[test]
    fn test_reachable_starts_searching() {
        let probe = StubProbe::new(ProbeOutcome::Reachable);
        assert_eq!(check(&probe, "example.com"), Stage::Searching);
    }

    #[test]
    fn test_other_error_starts_searching() {
        let probe = StubProbe::new(ProbeOutcome::OtherError);
        assert_eq!(check(&probe, "example.com"), Stage::Searching);
    }

    #[test]
    fn test_classify_not_found_messages() {
        let e = io::Error::other("failed to lookup address information: Name or service not known");
        assert_eq!(classify_resolve_error(&e), ProbeOutcome::Unreachable);

        let e = io::Error::other(
            "failed to lookup address information: nodename nor servname provided, or not known",
        );
        assert_eq!(classify_resolve_error(&e), ProbeOutcome::Unreachable);

        let e = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(classify_resolve_error(&e), ProbeOutcome::Unreachable);
    }

    #[test]
    fn test_classify_other_errors() {
        let e = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(classify_resolve_error(&e), ProbeOutcome::OtherError);

        // EAI_AGAIN is a resolver hiccup, not a missing host
        let e = io::Error::other(
            "failed to lookup address information: Temporary failure in name resolution",
        );
        let outcome = classify_resolve_error(&e);
        assert_eq!(outcome, ProbeOutcome::OtherError);
        assert_eq!(outcome.initial_stage(), Stage::Searching);
    }

    #[test]
    fn test_dns_probe_resolves_localhost() {
        assert_eq!(DnsProbe.probe("localhost"), ProbeOutcome::Reachable);
    }
}
