//! Fixed names shared by the loader, the certificate store and the CA client.

/// Suffix appended to the apex to name its staging certificate.
pub const STAGING_SUFFIX: &str = "-staging";

/// Prefix stripped from a hostname to obtain its apex.
pub const WWW_PREFIX: &str = "www.";

/// Marks a comment line in the domain list and the proxy_pass file.
pub const COMMENT_MARKER: char = '#';

/// Certificate chain file inside a certificate's live directory.
pub const FULLCHAIN_FILE: &str = "fullchain.pem";

/// Private key file inside a certificate's live directory.
pub const PRIVKEY_FILE: &str = "privkey.pem";

/// HTTP-01 webroot as mounted inside the proxy and certbot containers.
pub const CONTAINER_WEBROOT: &str = "/var/www/certbot";
