//! Reads the two operator inputs: `app/domain.list` and `app/proxy_pass`.

use crate::error::{IssuanceError, IssuanceErrorExt};
use fweb_domain::Domain;
use fweb_domain::constants::COMMENT_MARKER;
use fxhash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Validated, deduplicated domains in input order, plus the rejected lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainList {
    domains: Vec<Domain>,
    rejected: Vec<String>,
}

impl DomainList {
    /// Never empty.
    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// Candidates that failed validation, each reported once.
    #[must_use]
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }
}

/// Parses a domain list: one candidate per line, blank and `#` lines ignored.
///
/// Lines are trimmed (which also drops a trailing `\r`), exact duplicates
/// keep their first occurrence and invalid candidates are logged and left
/// out.
///
/// # Errors
/// [`IssuanceError::NoValidDomains`] when nothing valid remains.
pub fn parse_domain_list(raw: &str) -> Result<DomainList, IssuanceError> {
    let mut seen = FxHashSet::default();
    let mut domains = Vec::new();
    let mut rejected = Vec::new();

    for candidate in raw.lines().map(str::trim) {
        if candidate.is_empty() || candidate.starts_with(COMMENT_MARKER) {
            continue;
        }
        if !seen.insert(candidate) {
            continue;
        }

        match Domain::parse(candidate) {
            Ok(domain) => domains.push(domain),
            Err(e) => {
                warn!(candidate = %e.candidate, "Dropping invalid domain");
                rejected.push(e.candidate);
            },
        }
    }

    if domains.is_empty() {
        return Err(IssuanceError::NoValidDomains {
            message: format!("{} candidate(s), none valid", rejected.len()).into(),
            context: None,
        });
    }

    Ok(DomainList { domains, rejected })
}

/// Reads and parses the domain list at `path`.
///
/// # Errors
/// * [`IssuanceError::MissingInput`] if the file does not exist.
/// * [`IssuanceError::Io`] if it cannot be read.
/// * [`IssuanceError::NoValidDomains`] if it holds no valid domain.
pub fn load_domain_list(path: &Path) -> Result<DomainList, IssuanceError> {
    let raw = read_required(path)?;
    let list = parse_domain_list(&raw).context(path.display().to_string())?;
    info!(
        path = %path.display(),
        domains = list.domains.len(),
        rejected = list.rejected.len(),
        "Loaded domain list"
    );
    Ok(list)
}

/// The proxy target is the first non-blank, non-comment line.
#[must_use]
pub fn parse_proxy_target(raw: &str) -> Option<&str> {
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
}

/// Reads the upstream the HTTP vhost proxies to, e.g. `http://app:8080`.
///
/// # Errors
/// * [`IssuanceError::MissingInput`] if the file does not exist.
/// * [`IssuanceError::MissingProxyTarget`] if it only holds blanks and comments.
pub fn load_proxy_target(path: &Path) -> Result<String, IssuanceError> {
    let raw = read_required(path)?;
    parse_proxy_target(&raw).map(str::to_owned).ok_or_else(|| IssuanceError::MissingProxyTarget {
        message: path.display().to_string().into(),
        context: None,
    })
}

/// Fails with [`IssuanceError::MissingInput`] unless every path exists.
pub fn ensure_inputs(paths: &[&Path]) -> Result<(), IssuanceError> {
    match paths.iter().find(|p| !p.is_file()) {
        Some(missing) => Err(IssuanceError::MissingInput {
            message: missing.display().to_string().into(),
            context: None,
        }),
        None => Ok(()),
    }
}

fn read_required(path: &Path) -> Result<String, IssuanceError> {
    ensure_inputs(&[path])?;
    fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
}
