//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it owns run-configuration loading.
//!
//! ```rust,no_run
//! use fweb_domain::config::ProjectLayout;
//! use fweb_kernel::config::load_run_config;
//!
//! let layout = ProjectLayout::new(".");
//! let cfg = load_run_config(&layout).unwrap();
//! println!("staging enabled: {}", cfg.staging);
//! ```
pub mod config;

pub use fweb_domain as domain;
