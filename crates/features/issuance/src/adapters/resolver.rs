use crate::dns::DnsResolver;
use crate::error::{IssuanceError, IssuanceErrorExt};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{Resolver, TokioResolver};
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

/// Blocking facade over the async hickory resolver.
///
/// Uses the host's resolver configuration (`/etc/resolv.conf`), falling back
/// to hickory's default upstreams when it cannot be read. Caching is off so
/// every run sees current records.
pub struct HickoryResolver {
    runtime: Runtime,
    resolver: TokioResolver,
}

impl HickoryResolver {
    pub fn new() -> Result<Self, IssuanceError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start the DNS runtime")?;
        let _guard = runtime.enter();

        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(5);
        opts.attempts = 2;
        opts.cache_size = 0;

        let builder = Resolver::builder_tokio().unwrap_or_else(|e| {
            warn!(error = %e, "System resolver configuration unavailable; using defaults");
            Resolver::builder_with_config(ResolverConfig::default(), TokioConnectionProvider::default())
        });
        let resolver = builder.with_options(opts).build();

        Ok(Self { runtime, resolver })
    }
}

impl DnsResolver for HickoryResolver {
    fn resolve_a(&self, host: &str) -> Vec<Ipv4Addr> {
        match self.runtime.block_on(self.resolver.ipv4_lookup(host)) {
            Ok(lookup) => lookup.iter().map(|a| a.0).collect(),
            Err(e) => {
                debug!(host, error = %e, "A lookup failed");
                Vec::new()
            },
        }
    }

    fn resolve_aaaa(&self, host: &str) -> Vec<Ipv6Addr> {
        match self.runtime.block_on(self.resolver.ipv6_lookup(host)) {
            Ok(lookup) => lookup.iter().map(|aaaa| aaaa.0).collect(),
            Err(e) => {
                debug!(host, error = %e, "AAAA lookup failed");
                Vec::new()
            },
        }
    }
}

impl fmt::Debug for HickoryResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HickoryResolver").finish_non_exhaustive()
    }
}
