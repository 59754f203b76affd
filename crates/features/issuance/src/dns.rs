//! DNS gate: only request certificates for apexes that point at this host.
//!
//! HTTP-01 validation reaches whatever address the apex resolves to, so an
//! apex that resolves elsewhere would fail validation and burn CA rate limit.

use fweb_domain::DomainGroup;
use fweb_domain::config::RunConfig;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::{debug, info};

/// Address lookups. Failures and missing records both yield an empty list.
pub trait DnsResolver {
    fn resolve_a(&self, host: &str) -> Vec<Ipv4Addr>;
    fn resolve_aaaa(&self, host: &str) -> Vec<Ipv6Addr>;
}

/// This host's externally visible IPv4 address, `None` when it cannot be determined.
pub trait PublicAddressOracle {
    fn public_ipv4(&self) -> Option<Ipv4Addr>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The apex has no A record.
    Unresolved,
    /// The public address of this host is unknown.
    PublicAddressUnknown,
    /// The apex points at another host.
    Mismatch { resolved: Ipv4Addr, public: Ipv4Addr },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => f.write_str("apex has no A record"),
            Self::PublicAddressUnknown => f.write_str("public IPv4 of this host is unknown"),
            Self::Mismatch { resolved, public } => {
                write!(f, "apex resolves to {resolved}, this host is {public}")
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    Proceed,
    Skip(SkipReason),
}

/// Per-run gate. The public address is looked up once by the caller and
/// shared by every group.
pub struct DnsGate<'a> {
    resolver: &'a dyn DnsResolver,
    public: Option<Ipv4Addr>,
    check_a: bool,
    check_aaaa: bool,
}

impl<'a> DnsGate<'a> {
    pub fn new(resolver: &'a dyn DnsResolver, public: Option<Ipv4Addr>, config: &RunConfig) -> Self {
        Self {
            resolver,
            public,
            check_a: config.check_a_record,
            check_aaaa: config.check_aaaa_record,
        }
    }

    /// Decides whether `group` may proceed to issuance.
    ///
    /// With the A check on, only the first A answer is compared; resolvers that
    /// rotate answers can make the verdict flip between runs. The AAAA check
    /// only reports, it never skips a group.
    #[must_use]
    pub fn evaluate(&self, group: &DomainGroup) -> GateVerdict {
        let apex = group.apex();

        if self.check_aaaa {
            self.report_aaaa(apex);
        }

        if !self.check_a {
            debug!(apex, "A record check disabled");
            return GateVerdict::Proceed;
        }

        let Some(resolved) = self.resolver.resolve_a(apex).first().copied() else {
            return GateVerdict::Skip(SkipReason::Unresolved);
        };
        let Some(public) = self.public else {
            return GateVerdict::Skip(SkipReason::PublicAddressUnknown);
        };

        if resolved == public {
            debug!(apex, %resolved, "A record matches this host");
            GateVerdict::Proceed
        } else {
            GateVerdict::Skip(SkipReason::Mismatch { resolved, public })
        }
    }

    fn report_aaaa(&self, apex: &str) {
        let records = self.resolver.resolve_aaaa(apex);
        match records.first() {
            Some(first) => info!(
                apex,
                %first,
                count = records.len(),
                "AAAA record present; make sure it points at this host or HTTP-01 may fail over IPv6"
            ),
            None => info!(apex, "No AAAA record"),
        }
    }
}

impl fmt::Debug for DnsGate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsGate")
            .field("public", &self.public)
            .field("check_a", &self.check_a)
            .field("check_aaaa", &self.check_aaaa)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log::capture_logs;
    use fweb_domain::Domain;
    use std::cell::Cell;

    #[derive(Default)]
    struct StaticDns {
        a: Vec<Ipv4Addr>,
        aaaa: Vec<Ipv6Addr>,
        aaaa_queries: Cell<usize>,
    }

    impl DnsResolver for StaticDns {
        fn resolve_a(&self, _host: &str) -> Vec<Ipv4Addr> {
            self.a.clone()
        }

        fn resolve_aaaa(&self, _host: &str) -> Vec<Ipv6Addr> {
            self.aaaa_queries.set(self.aaaa_queries.get() + 1);
            self.aaaa.clone()
        }
    }

    const HOST: Ipv4Addr = Ipv4Addr::new(1, 2, 3, 4);

    fn group() -> DomainGroup {
        DomainGroup::new(Domain::parse("example.com").unwrap())
    }

    fn gate<'a>(dns: &'a StaticDns, public: Option<Ipv4Addr>, config: &RunConfig) -> DnsGate<'a> {
        DnsGate::new(dns, public, config)
    }

    #[test]
    fn matching_first_answer_proceeds() {
        let dns = StaticDns { a: vec![HOST, Ipv4Addr::new(9, 9, 9, 9)], ..StaticDns::default() };
        let verdict = gate(&dns, Some(HOST), &RunConfig::default()).evaluate(&group());
        assert_eq!(verdict, GateVerdict::Proceed);
    }

    #[test]
    fn other_host_is_skipped() {
        let dns = StaticDns { a: vec![Ipv4Addr::new(5, 6, 7, 8)], ..StaticDns::default() };
        let verdict = gate(&dns, Some(HOST), &RunConfig::default()).evaluate(&group());
        assert_eq!(
            verdict,
            GateVerdict::Skip(SkipReason::Mismatch { resolved: Ipv4Addr::new(5, 6, 7, 8), public: HOST })
        );
    }

    #[test]
    fn only_the_first_answer_counts() {
        let dns = StaticDns { a: vec![Ipv4Addr::new(5, 6, 7, 8), HOST], ..StaticDns::default() };
        let verdict = gate(&dns, Some(HOST), &RunConfig::default()).evaluate(&group());
        assert!(matches!(verdict, GateVerdict::Skip(SkipReason::Mismatch { .. })));
    }

    #[test]
    fn unresolved_apex_is_skipped_whatever_the_public_address() {
        let dns = StaticDns::default();
        for public in [Some(HOST), None] {
            let verdict = gate(&dns, public, &RunConfig::default()).evaluate(&group());
            assert_eq!(verdict, GateVerdict::Skip(SkipReason::Unresolved));
        }
    }

    #[test]
    fn unknown_public_address_is_skipped() {
        let dns = StaticDns { a: vec![HOST], ..StaticDns::default() };
        let verdict = gate(&dns, None, &RunConfig::default()).evaluate(&group());
        assert_eq!(verdict, GateVerdict::Skip(SkipReason::PublicAddressUnknown));
    }

    #[test]
    fn disabled_a_check_always_proceeds() {
        let config = RunConfig { check_a_record: false, ..RunConfig::default() };
        let verdict = gate(&StaticDns::default(), None, &config).evaluate(&group());
        assert_eq!(verdict, GateVerdict::Proceed);
    }

    #[test]
    fn aaaa_presence_never_blocks() {
        let dns = StaticDns { a: vec![HOST], aaaa: vec![Ipv6Addr::LOCALHOST], ..StaticDns::default() };
        let config = RunConfig { check_aaaa_record: true, ..RunConfig::default() };

        let (verdict, logs) = capture_logs(|| gate(&dns, Some(HOST), &config).evaluate(&group()));
        assert_eq!(verdict, GateVerdict::Proceed);
        assert_eq!(dns.aaaa_queries.get(), 1);

        let notice = logs.lines().find(|line| line.contains("AAAA record present")).unwrap();
        assert!(notice.contains(" INFO "), "got: {notice}");
        assert!(!logs.contains("WARN"), "got: {logs}");
    }

    #[test]
    fn aaaa_is_not_queried_by_default() {
        let dns = StaticDns { a: vec![HOST], ..StaticDns::default() };
        let _ = gate(&dns, Some(HOST), &RunConfig::default()).evaluate(&group());
        assert_eq!(dns.aaaa_queries.get(), 0);
    }
}
