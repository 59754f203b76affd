//! Plain-HTTP server block: serves ACME challenges and proxies the rest.

use crate::error::{IssuanceError, IssuanceErrorExt};
use crate::loader::{load_domain_list, load_proxy_target};
use fweb_domain::Domain;
use fweb_domain::config::ProjectLayout;
use fweb_domain::constants::CONTAINER_WEBROOT;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name inside the nginx sites directory; sorts before any other site.
pub const HTTP_VHOST_FILE: &str = "00-front-web-http.conf";

/// Renders the port-80 server block. `server_name` keeps input order.
#[must_use]
pub fn render_http_vhost(domains: &[Domain], upstream: &str) -> String {
    let server_names = domains.iter().map(Domain::as_str).collect::<Vec<_>>().join(" ");

    format!(
        "server {{
    listen 80;
    server_name {server_names};

    location /.well-known/acme-challenge/ {{
        root {CONTAINER_WEBROOT};
    }}

    location / {{
        proxy_pass {upstream};
        proxy_read_timeout    90;
        proxy_connect_timeout 90;
        proxy_set_header Host $http_host;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_http_version 1.1;
    }}
}}
"
    )
}

/// Writes `contents` to `<sites_dir>/00-front-web-http.conf` through a
/// temporary file and a rename, so nginx never sees a half-written file.
///
/// Returns `false` without touching the file when it already holds `contents`.
pub fn write_http_vhost(sites_dir: &Path, contents: &str) -> Result<bool, IssuanceError> {
    let target = sites_dir.join(HTTP_VHOST_FILE);
    if fs::read_to_string(&target).is_ok_and(|current| current == contents) {
        debug!(path = %target.display(), "Vhost unchanged");
        return Ok(false);
    }

    fs::create_dir_all(sites_dir).context(format!("Failed to create {}", sites_dir.display()))?;
    let tmp = temp_path(&target);
    fs::write(&tmp, contents).context(format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, &target).context(format!("Failed to replace {}", target.display()))?;

    info!(path = %target.display(), "Wrote HTTP vhost");
    Ok(true)
}

/// Renders the vhost for already loaded inputs and writes it into `sites_dir`.
pub fn apply_http_vhost(
    sites_dir: &Path,
    domains: &[Domain],
    upstream: &str,
) -> Result<bool, IssuanceError> {
    info!(domains = domains.len(), upstream, "Rendering HTTP vhost");
    write_http_vhost(sites_dir, &render_http_vhost(domains, upstream))
}

/// Loads both inputs of `layout` and rewrites the HTTP vhost from them.
pub fn sync_http_vhost(layout: &ProjectLayout) -> Result<bool, IssuanceError> {
    let list = load_domain_list(&layout.domain_list())?;
    let upstream = load_proxy_target(&layout.proxy_pass())?;
    apply_http_vhost(&layout.nginx_sites(), list.domains(), &upstream)
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(raw: &[&str]) -> Vec<Domain> {
        raw.iter().map(|d| Domain::parse(*d).unwrap()).collect()
    }

    #[test]
    fn server_names_follow_input_order() {
        let conf = render_http_vhost(&domains(&["www.b.io", "a.io"]), "http://app:8080");

        assert!(conf.contains("server_name www.b.io a.io;"));
        assert!(conf.contains("proxy_pass http://app:8080;"));
        assert!(conf.contains("root /var/www/certbot;"));
        assert!(conf.starts_with("server {\n    listen 80;\n"));
        assert!(conf.ends_with("}\n"));
    }

    #[test]
    fn rewrite_is_skipped_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let sites = dir.path().join("sites");

        assert!(write_http_vhost(&sites, "server {}\n").unwrap());
        assert!(!write_http_vhost(&sites, "server {}\n").unwrap());
        assert!(write_http_vhost(&sites, "server { listen 80; }\n").unwrap());

        assert_eq!(fs::read_to_string(sites.join(HTTP_VHOST_FILE)).unwrap(), "server { listen 80; }\n");
        assert!(!sites.join("00-front-web-http.conf.tmp").exists());
    }

    #[test]
    fn applied_inputs_are_rendered_into_the_sites_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sites = dir.path().join("sites");
        let list = domains(&["example.com", "www.example.com"]);

        assert!(apply_http_vhost(&sites, &list, "http://app:3000").unwrap());
        assert!(!apply_http_vhost(&sites, &list, "http://app:3000").unwrap());

        let conf = fs::read_to_string(sites.join(HTTP_VHOST_FILE)).unwrap();
        assert_eq!(conf, render_http_vhost(&list, "http://app:3000"));
    }
}
