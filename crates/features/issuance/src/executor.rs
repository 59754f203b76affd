use crate::error::IssuanceError;
use fweb_domain::{Action, Domain, Environment, IssuanceDecision, RenewalPolicy, SkipCause};
use std::fmt;
use tracing::{error, info};

/// Everything the certificate authority client needs for one certificate.
///
/// Every name becomes a SAN of the same certificate; staging and production
/// are never mixed in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssuanceRequest<'a> {
    pub cert_name: &'a str,
    pub names: &'a [Domain],
    pub email: Option<&'a str>,
    pub environment: Environment,
    pub renewal: Option<RenewalPolicy>,
}

/// Obtains certificates. Calls are blocking and not retried.
pub trait CertificateAuthority {
    fn issue(&self, request: &IssuanceRequest<'_>) -> Result<(), IssuanceError>;
}

/// Result of executing one decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Issued,
    Skipped(SkipCause),
    /// The CA call failed; the message is the rendered error.
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

pub struct IssuanceExecutor<'a> {
    authority: &'a dyn CertificateAuthority,
    email: Option<&'a str>,
}

impl<'a> IssuanceExecutor<'a> {
    pub fn new(authority: &'a dyn CertificateAuthority, email: Option<&'a str>) -> Self {
        Self { authority, email }
    }

    /// Carries out `decision`. A failed CA call is logged and returned as
    /// [`Outcome::Failed`], never as an error.
    pub fn execute(&self, decision: &IssuanceDecision) -> Outcome {
        if let Action::Skip(cause) = decision.action {
            info!(cert_name = %decision.cert_name, environment = %decision.environment, %cause, "Skipping");
            return Outcome::Skipped(cause);
        }

        let request = IssuanceRequest {
            cert_name: &decision.cert_name,
            names: &decision.names,
            email: self.email,
            environment: decision.environment,
            renewal: decision.renewal,
        };

        info!(
            cert_name = request.cert_name,
            environment = %request.environment,
            names = request.names.len(),
            "Requesting certificate"
        );

        match self.authority.issue(&request) {
            Ok(()) => {
                info!(cert_name = request.cert_name, environment = %request.environment, "Certificate issued");
                Outcome::Issued
            },
            Err(e) => {
                error!(
                    cert_name = request.cert_name,
                    environment = %request.environment,
                    error = %e,
                    "Certificate request failed"
                );
                Outcome::Failed(e.to_string())
            },
        }
    }
}

impl fmt::Debug for IssuanceExecutor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuanceExecutor").field("email", &self.email).finish_non_exhaustive()
    }
}
