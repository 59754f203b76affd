use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Switches for one deployment run. Loaded once, read-only afterwards.
///
/// Field names match the environment variables of the deployment
/// (`CERTBOT_EMAIL`, `DO_STAGING`, ...) after lower-casing. Defaults favour
/// safety: staging on, production off, no forced renewal, A-record gate on,
/// AAAA notice off.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// ACME account contact; without it the account is registered anonymously.
    #[serde(rename = "certbot_email", deserialize_with = "empty_as_none")]
    pub email: Option<String>,
    #[serde(rename = "do_staging")]
    pub staging: bool,
    #[serde(rename = "do_prod")]
    pub production: bool,
    #[serde(rename = "force_prod")]
    pub force_production: bool,
    pub check_a_record: bool,
    pub check_aaaa_record: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            email: None,
            staging: true,
            production: false,
            force_production: false,
            check_a_record: true,
            check_aaaa_record: false,
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()))
}

/// Where everything lives relative to the deployment root.
///
/// ```text
/// <root>/app/domain.list
/// <root>/app/proxy_pass
/// <root>/data/nginx/{sites,logs}
/// <root>/data/certbot/{www,conf}
/// <root>/data/certbot/conf/live/<cert-name>/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn domain_list(&self) -> PathBuf {
        self.root.join("app").join("domain.list")
    }

    #[must_use]
    pub fn proxy_pass(&self) -> PathBuf {
        self.root.join("app").join("proxy_pass")
    }

    #[must_use]
    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }

    #[must_use]
    pub fn settings_file(&self) -> PathBuf {
        self.root.join("front-web.toml")
    }

    #[must_use]
    pub fn nginx_sites(&self) -> PathBuf {
        self.root.join("data").join("nginx").join("sites")
    }

    #[must_use]
    pub fn nginx_logs(&self) -> PathBuf {
        self.root.join("data").join("nginx").join("logs")
    }

    #[must_use]
    pub fn certbot_webroot(&self) -> PathBuf {
        self.root.join("data").join("certbot").join("www")
    }

    #[must_use]
    pub fn certbot_conf(&self) -> PathBuf {
        self.root.join("data").join("certbot").join("conf")
    }

    /// Directory certbot writes `fullchain.pem` and `privkey.pem` into.
    #[must_use]
    pub fn live_dir(&self) -> PathBuf {
        self.certbot_conf().join("live")
    }

    /// Directories created before the stack is brought up.
    #[must_use]
    pub fn bootstrap_dirs(&self) -> [PathBuf; 4] {
        [self.nginx_sites(), self.nginx_logs(), self.certbot_webroot(), self.certbot_conf()]
    }
}

/// Settings of the `watch` controller loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchConfig {
    pub interval: Duration,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self { interval: Duration::from_secs(5) }
    }
}
