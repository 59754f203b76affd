//! # Domain Models
//!
//! Pure data types shared by every front-web crate: validated hostnames, apex
//! groups, per-environment issuance decisions and the run configuration.
//! No I/O lives here; loading and side effects belong to the kernel and the
//! issuance slice.

pub mod config;
pub mod constants;
pub mod domain;
pub mod group;
pub mod issuance;

pub use crate::domain::{Domain, InvalidDomain};
pub use crate::group::DomainGroup;
pub use crate::issuance::{Action, Environment, IssuanceDecision, RenewalPolicy, SkipCause};
