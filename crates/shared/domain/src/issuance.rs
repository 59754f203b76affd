use crate::constants::STAGING_SUFFIX;
use crate::domain::Domain;
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Certificate authority environment. Never mixed within one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    /// Certificate name used for `apex` in this environment.
    ///
    /// ```rust
    /// use fweb_domain::Environment;
    ///
    /// assert_eq!(Environment::Staging.cert_name("example.com"), "example.com-staging");
    /// assert_eq!(Environment::Production.cert_name("example.com"), "example.com");
    /// ```
    #[must_use]
    pub fn cert_name(self, apex: &str) -> String {
        match self {
            Self::Staging => format!("{apex}{STAGING_SUFFIX}"),
            Self::Production => apex.to_owned(),
        }
    }

    #[must_use]
    pub const fn is_staging(self) -> bool {
        matches!(self, Self::Staging)
    }
}

/// How the CA client treats an existing, still valid certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RenewalPolicy {
    /// Only renew when close to expiry.
    KeepUntilExpiring,
    /// Always request a new certificate.
    ForceRenew,
}

/// Why an enabled environment produced no request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipCause {
    /// A staging certificate already exists; staging is never renewed.
    AlreadyIssued,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    Skip(SkipCause),
    Issue,
}

/// What to do for one group in one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuanceDecision {
    pub cert_name: String,
    pub names: Vec<Domain>,
    pub environment: Environment,
    pub action: Action,
    /// `None` for first-time staging requests.
    pub renewal: Option<RenewalPolicy>,
}

impl IssuanceDecision {
    #[must_use]
    pub const fn is_issue(&self) -> bool {
        matches!(self.action, Action::Issue)
    }
}
