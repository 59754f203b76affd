use fweb_domain::config::RunConfig;
use fweb_domain::{Action, DomainGroup, Environment, IssuanceDecision, RenewalPolicy, SkipCause};
use std::fmt;
use strum::IntoEnumIterator;
use tracing::info;

/// Read-only view of issued certificates.
pub trait CertificateStore {
    /// `true` when complete certificate material exists under `cert_name`.
    fn exists(&self, cert_name: &str) -> bool;
}

/// Turns a gated group into one decision per enabled environment.
pub struct DecisionEngine<'a> {
    config: &'a RunConfig,
    store: &'a dyn CertificateStore,
}

impl<'a> DecisionEngine<'a> {
    pub fn new(config: &'a RunConfig, store: &'a dyn CertificateStore) -> Self {
        Self { config, store }
    }

    /// Staging first, then production. A disabled environment yields no
    /// decision and is logged as skipped for this apex.
    ///
    /// * Staging (`<apex>-staging`) is a one-shot bootstrap: skipped once a
    ///   certificate exists, otherwise issued without a renewal policy.
    /// * Production (`<apex>`) is always issued, keeping an unexpired
    ///   certificate unless forced renewal is configured.
    #[must_use]
    pub fn decide(&self, group: &DomainGroup) -> Vec<IssuanceDecision> {
        Environment::iter()
            .filter(|env| {
                let enabled = self.enabled(*env);
                if !enabled {
                    info!(
                        apex = group.apex(),
                        environment = %env,
                        "Skipping: disabled by configuration"
                    );
                }
                enabled
            })
            .map(|env| self.decide_for(group, env))
            .inspect(|decision| {
                info!(
                    apex = group.apex(),
                    cert_name = %decision.cert_name,
                    environment = %decision.environment,
                    action = ?decision.action,
                    renewal = ?decision.renewal,
                    "Decided"
                );
            })
            .collect()
    }

    const fn enabled(&self, env: Environment) -> bool {
        match env {
            Environment::Staging => self.config.staging,
            Environment::Production => self.config.production,
        }
    }

    fn decide_for(&self, group: &DomainGroup, environment: Environment) -> IssuanceDecision {
        let cert_name = environment.cert_name(group.apex());

        let (action, renewal) = match environment {
            Environment::Staging if self.store.exists(&cert_name) => {
                (Action::Skip(SkipCause::AlreadyIssued), None)
            },
            Environment::Staging => (Action::Issue, None),
            Environment::Production if self.config.force_production => {
                (Action::Issue, Some(RenewalPolicy::ForceRenew))
            },
            Environment::Production => (Action::Issue, Some(RenewalPolicy::KeepUntilExpiring)),
        };

        IssuanceDecision { cert_name, names: group.names().to_vec(), environment, action, renewal }
    }
}

impl fmt::Debug for DecisionEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecisionEngine").field("config", self.config).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log::capture_logs;
    use fweb_domain::Domain;

    struct Existing(&'static [&'static str]);

    impl CertificateStore for Existing {
        fn exists(&self, cert_name: &str) -> bool {
            self.0.iter().any(|name| *name == cert_name)
        }
    }

    fn group() -> DomainGroup {
        let mut group = DomainGroup::new(Domain::parse("example.com").unwrap());
        group.absorb(Domain::parse("www.example.com").unwrap());
        group
    }

    fn config(staging: bool, production: bool, force: bool) -> RunConfig {
        RunConfig { staging, production, force_production: force, ..RunConfig::default() }
    }

    #[test]
    fn missing_staging_certificate_is_issued() {
        let cfg = config(true, false, false);
        let decisions = DecisionEngine::new(&cfg, &Existing(&[])).decide(&group());

        assert_eq!(decisions.len(), 1);
        let staging = &decisions[0];
        assert_eq!(staging.cert_name, "example.com-staging");
        assert_eq!(staging.environment, Environment::Staging);
        assert_eq!(staging.action, Action::Issue);
        assert_eq!(staging.renewal, None);
        assert_eq!(staging.names, group().names());
    }

    #[test]
    fn existing_staging_certificate_is_skipped() {
        let cfg = config(true, false, false);
        let decisions =
            DecisionEngine::new(&cfg, &Existing(&["example.com-staging"])).decide(&group());
        assert_eq!(decisions[0].action, Action::Skip(SkipCause::AlreadyIssued));
    }

    #[test]
    fn production_is_issued_even_when_present() {
        let cfg = config(false, true, false);
        let decisions = DecisionEngine::new(&cfg, &Existing(&["example.com"])).decide(&group());

        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].cert_name, "example.com");
        assert_eq!(decisions[0].action, Action::Issue);
        assert_eq!(decisions[0].renewal, Some(RenewalPolicy::KeepUntilExpiring));
    }

    #[test]
    fn forced_production_renews() {
        let cfg = config(false, true, true);
        let decisions = DecisionEngine::new(&cfg, &Existing(&[])).decide(&group());
        assert_eq!(decisions[0].renewal, Some(RenewalPolicy::ForceRenew));
    }

    #[test]
    fn both_environments_in_order_and_none_when_disabled() {
        let both = config(true, true, false);
        let envs: Vec<_> = DecisionEngine::new(&both, &Existing(&[]))
            .decide(&group())
            .into_iter()
            .map(|d| d.environment)
            .collect();
        assert_eq!(envs, [Environment::Staging, Environment::Production]);

        let none = config(false, false, true);
        assert!(DecisionEngine::new(&none, &Existing(&[])).decide(&group()).is_empty());
    }

    #[test]
    fn disabled_environments_are_logged_per_apex() {
        let none = config(false, false, false);
        let (decisions, logs) =
            capture_logs(|| DecisionEngine::new(&none, &Existing(&[])).decide(&group()));

        assert!(decisions.is_empty());
        let skips: Vec<_> =
            logs.lines().filter(|line| line.contains("disabled by configuration")).collect();
        assert_eq!(skips.len(), 2, "got: {logs}");
        assert!(skips.iter().all(|line| line.contains("INFO") && line.contains("example.com")));
        assert!(skips[0].contains("environment=STAGING"), "got: {logs}");
        assert!(skips[1].contains("environment=PRODUCTION"), "got: {logs}");
    }

    #[test]
    fn enabled_environments_log_no_skip() {
        let both = config(true, true, false);
        let (_, logs) = capture_logs(|| DecisionEngine::new(&both, &Existing(&[])).decide(&group()));
        assert!(!logs.contains("disabled by configuration"), "got: {logs}");
    }
}
