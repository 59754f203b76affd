//! # Certificate Issuance
//!
//! The core of front-web: turns a domain list into per-apex certificate
//! requests and drives them through the certificate authority.
//!
//! ## Flow
//!
//! 1.  **Load ([`loader`]):** parse, deduplicate and validate `app/domain.list`.
//! 2.  **Group ([`grouping`]):** one [`DomainGroup`] per apex, sorted by apex.
//! 3.  **Gate ([`dns`]):** skip a group whose apex does not resolve to this host.
//! 4.  **Decide ([`decision`]):** staging and production decisions per group.
//! 5.  **Execute ([`executor`]):** call the certificate authority for `Issue` decisions.
//! 6.  **Reload ([`proxy`]):** test the proxy configuration, then reload it.
//!
//! Steps 1 to 4 are pure. The external services sit behind traits
//! ([`DnsResolver`], [`PublicAddressOracle`], [`CertificateStore`],
//! [`CertificateAuthority`], [`ProxyControl`]); production implementations live in
//! [`adapters`].
//!
//! ```rust
//! use fweb_issuance::{grouping::group_by_apex, loader::parse_domain_list};
//!
//! let list = parse_domain_list("example.com\nwww.example.com\nother.org\n")?;
//! let groups = group_by_apex(list.domains())?;
//!
//! assert_eq!(groups[0].to_string(), "example.com=>example.com,www.example.com");
//! assert_eq!(groups[1].to_string(), "other.org=>other.org");
//! # Ok::<(), fweb_issuance::IssuanceError>(())
//! ```

pub mod adapters;
pub mod bootstrap;
pub mod decision;
pub mod dns;
mod error;
pub mod executor;
pub mod grouping;
pub mod loader;
pub mod pipeline;
pub mod proxy;
pub mod vhost;
pub mod watch;

#[cfg(test)]
mod test_log;

pub use crate::decision::{CertificateStore, DecisionEngine};
pub use crate::dns::{DnsGate, DnsResolver, GateVerdict, PublicAddressOracle, SkipReason};
pub use crate::error::{IssuanceError, IssuanceErrorExt};
pub use crate::executor::{CertificateAuthority, IssuanceExecutor, IssuanceRequest, Outcome};
pub use crate::pipeline::{Pipeline, RunReport};
pub use crate::proxy::{ProxyControl, reload_proxy};
pub use fweb_domain::{Domain, DomainGroup, Environment, IssuanceDecision};
