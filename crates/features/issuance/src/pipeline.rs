//! One issuance pass over all groups, sequential and in apex order.

use crate::decision::{CertificateStore, DecisionEngine};
use crate::dns::{DnsGate, DnsResolver, GateVerdict, PublicAddressOracle, SkipReason};
use crate::executor::{CertificateAuthority, IssuanceExecutor, Outcome};
use fweb_domain::config::RunConfig;
use fweb_domain::{DomainGroup, Environment};
use std::fmt;
use tracing::{info, info_span, warn};

/// Result of one decision within a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateReport {
    pub cert_name: String,
    pub environment: Environment,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    /// The DNS gate stopped the group before any decision was made.
    Gated(SkipReason),
    Processed(Vec<CertificateReport>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub apex: String,
    pub outcome: GroupOutcome,
}

impl GroupReport {
    fn certificates(&self) -> &[CertificateReport] {
        match &self.outcome {
            GroupOutcome::Processed(reports) => reports,
            GroupOutcome::Gated(_) => &[],
        }
    }
}

/// Per-group results of a run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub groups: Vec<GroupReport>,
}

impl RunReport {
    #[must_use]
    pub fn issued(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Issued))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failure)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    #[must_use]
    pub fn gated(&self) -> usize {
        self.groups.iter().filter(|g| matches!(g.outcome, GroupOutcome::Gated(_))).count()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.groups
            .iter()
            .flat_map(GroupReport::certificates)
            .filter(|report| pred(&report.outcome))
            .count()
    }
}

/// Wires the gate, the decision engine and the executor to their services.
pub struct Pipeline<'a> {
    config: &'a RunConfig,
    resolver: &'a dyn DnsResolver,
    oracle: &'a dyn PublicAddressOracle,
    store: &'a dyn CertificateStore,
    authority: &'a dyn CertificateAuthority,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a RunConfig,
        resolver: &'a dyn DnsResolver,
        oracle: &'a dyn PublicAddressOracle,
        store: &'a dyn CertificateStore,
        authority: &'a dyn CertificateAuthority,
    ) -> Self {
        Self { config, resolver, oracle, store, authority }
    }

    /// Processes every group. Nothing here aborts the run: gated groups and
    /// failed requests are recorded and the next group is attempted.
    pub fn run(&self, groups: &[DomainGroup]) -> RunReport {
        let public = self.public_address();
        let gate = DnsGate::new(self.resolver, public, self.config);
        let engine = DecisionEngine::new(self.config, self.store);
        let executor = IssuanceExecutor::new(self.authority, self.config.email.as_deref());

        let mut report = RunReport::default();
        for group in groups {
            let _span = info_span!("group", apex = group.apex()).entered();

            let outcome = match gate.evaluate(group) {
                GateVerdict::Skip(reason) => {
                    warn!(names = %group, %reason, "Skipping group");
                    GroupOutcome::Gated(reason)
                },
                GateVerdict::Proceed => GroupOutcome::Processed(
                    engine
                        .decide(group)
                        .iter()
                        .map(|decision| CertificateReport {
                            cert_name: decision.cert_name.clone(),
                            environment: decision.environment,
                            outcome: executor.execute(decision),
                        })
                        .collect(),
                ),
            };

            report.groups.push(GroupReport { apex: group.apex().to_owned(), outcome });
        }

        info!(
            groups = report.groups.len(),
            gated = report.gated(),
            issued = report.issued(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Issuance pass finished"
        );
        report
    }

    /// Looked up once per run, and only when the A check needs it.
    fn public_address(&self) -> Option<std::net::Ipv4Addr> {
        if !self.config.check_a_record {
            return None;
        }
        let public = self.oracle.public_ipv4();
        match public {
            Some(ip) => info!(public_ipv4 = %ip, "Public address"),
            None => warn!("Public IPv4 unknown; every group will be skipped by the A record check"),
        }
        public
    }
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline").field("config", self.config).finish_non_exhaustive()
    }
}
