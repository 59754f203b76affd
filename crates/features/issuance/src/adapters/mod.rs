//! Production implementations of the service traits.
//!
//! | Trait | Adapter | Backed by |
//! |-------|---------|-----------|
//! | [`CertificateStore`](crate::CertificateStore) | [`FsCertificateStore`] | `data/certbot/conf/live` |
//! | [`CertificateAuthority`](crate::CertificateAuthority) | [`CertbotClient`] | `docker compose run certbot` |
//! | [`ProxyControl`](crate::ProxyControl) | [`ComposeNginx`] | `docker compose exec nginx` |
//! | [`DnsResolver`](crate::DnsResolver) | [`HickoryResolver`] | system resolver configuration |
//! | [`PublicAddressOracle`](crate::PublicAddressOracle) | [`IfconfigOracle`] | `https://ifconfig.me` over IPv4 |

mod certbot;
mod nginx;
mod public_ip;
mod resolver;
mod store;

pub use certbot::{CertbotClient, certbot_args};
pub use nginx::ComposeNginx;
pub use public_ip::IfconfigOracle;
pub use resolver::HickoryResolver;
pub use store::FsCertificateStore;
