use crate::dns::PublicAddressOracle;
use crate::error::{IssuanceError, IssuanceErrorExt};
use reqwest::blocking::Client;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;
use tracing::{debug, warn};

/// Plain-text IP echo endpoint.
pub const IFCONFIG_ENDPOINT: &str = "https://ifconfig.me/ip";

/// Asks an echo service which address this host connects from.
///
/// The client binds to `0.0.0.0`, so the request and the answer are IPv4 even
/// on dual-stack hosts.
#[derive(Debug, Clone)]
pub struct IfconfigOracle {
    client: Client,
    endpoint: String,
}

impl IfconfigOracle {
    pub fn new() -> Result<Self, IssuanceError> {
        Self::with_endpoint(IFCONFIG_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, IssuanceError> {
        let client = Client::builder()
            .local_address(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("front-web/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build the public address client")?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    fn fetch(&self) -> Result<String, reqwest::Error> {
        self.client.get(&self.endpoint).send()?.error_for_status()?.text()
    }
}

impl PublicAddressOracle for IfconfigOracle {
    fn public_ipv4(&self) -> Option<Ipv4Addr> {
        let body = match self.fetch() {
            Ok(body) => body,
            Err(e) => {
                warn!(endpoint = %self.endpoint, error = %e, "Public address lookup failed");
                return None;
            },
        };

        match body.trim().parse::<Ipv4Addr>() {
            Ok(ip) => Some(ip),
            Err(_) => {
                debug!(endpoint = %self.endpoint, body = %body.trim(), "Not an IPv4 address");
                warn!(endpoint = %self.endpoint, "Public address lookup returned garbage");
                None
            },
        }
    }
}
