use crate::error::{IssuanceError, IssuanceErrorExt};
use crate::executor::{CertificateAuthority, IssuanceRequest};
use fweb_compose::DockerCompose;
use fweb_domain::RenewalPolicy;
use fweb_domain::constants::CONTAINER_WEBROOT;

const SERVICE: &str = "certbot";

/// Runs certbot's HTTP-01 webroot flow in a one-off `certbot` container.
#[derive(Debug, Clone)]
pub struct CertbotClient {
    compose: DockerCompose,
}

impl CertbotClient {
    #[must_use]
    pub const fn new(compose: DockerCompose) -> Self {
        Self { compose }
    }
}

impl CertificateAuthority for CertbotClient {
    fn issue(&self, request: &IssuanceRequest<'_>) -> Result<(), IssuanceError> {
        self.compose
            .run_service(SERVICE, Some("certbot"), &certbot_args(request))
            .context(format!("certbot {} ({})", request.cert_name, request.environment))
    }
}

/// `certbot` arguments for `request`.
///
/// ```rust
/// use fweb_domain::{Domain, Environment};
/// use fweb_issuance::IssuanceRequest;
/// use fweb_issuance::adapters::certbot_args;
///
/// let names = [Domain::parse("example.com")?];
/// let args = certbot_args(&IssuanceRequest {
///     cert_name: "example.com-staging",
///     names: &names,
///     email: None,
///     environment: Environment::Staging,
///     renewal: None,
/// });
///
/// assert!(args.contains(&"--staging".to_owned()));
/// assert!(args.contains(&"--register-unsafely-without-email".to_owned()));
/// assert_eq!(args[args.len() - 2..], ["-d", "example.com"]);
/// # Ok::<(), fweb_domain::InvalidDomain>(())
/// ```
#[must_use]
pub fn certbot_args(request: &IssuanceRequest<'_>) -> Vec<String> {
    let mut args: Vec<String> = [
        "certonly",
        "--webroot",
        "-w",
        CONTAINER_WEBROOT,
        "--non-interactive",
        "--preferred-challenges",
        "http",
        "--agree-tos",
        "--no-eff-email",
        "--cert-name",
        request.cert_name,
    ]
    .into_iter()
    .map(str::to_owned)
    .collect();

    if request.environment.is_staging() {
        args.push("--staging".to_owned());
    }

    match request.email {
        Some(email) => args.extend(["--email".to_owned(), email.to_owned()]),
        None => args.push("--register-unsafely-without-email".to_owned()),
    }

    match request.renewal {
        Some(RenewalPolicy::ForceRenew) => args.push("--force-renewal".to_owned()),
        Some(RenewalPolicy::KeepUntilExpiring) => args.push("--keep-until-expiring".to_owned()),
        None => {},
    }

    for name in request.names {
        args.extend(["-d".to_owned(), name.to_string()]);
    }
    args
}
