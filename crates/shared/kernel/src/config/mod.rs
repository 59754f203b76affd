mod env_file;

pub use env_file::parse_env_file;

use config::{Config, Environment, File, Map};
use fweb_domain::config::{ProjectLayout, RunConfig};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variables that make up [`RunConfig`].
pub const RUN_CONFIG_VARS: [&str; 6] = [
    "CERTBOT_EMAIL",
    "DO_STAGING",
    "DO_PROD",
    "FORCE_PROD",
    "CHECK_A_RECORD",
    "CHECK_AAAA_RECORD",
];

/// Errors raised while loading the run configuration.
#[fweb_derive::fweb_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Env file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Everything [`load_from`] layers, lowest priority first.
#[derive(Debug, Default)]
pub struct ConfigSources {
    /// Optional TOML settings file; silently skipped when absent.
    pub file: Option<PathBuf>,
    /// Values from the deployment's `.env` file.
    pub env_file: Map<String, String>,
    /// Values from the process environment.
    pub process: Map<String, String>,
}

impl ConfigSources {
    /// Collects the sources for a deployment root: `front-web.toml`, `.env`
    /// and the [`RUN_CONFIG_VARS`] present in the process environment.
    pub fn discover(layout: &ProjectLayout) -> Result<Self, ConfigError> {
        let env_file = read_env_file(&layout.env_file())?;
        let process = RUN_CONFIG_VARS
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| ((*key).to_owned(), value)))
            .collect();

        Ok(Self { file: Some(layout.settings_file()), env_file, process })
    }
}

/// Loads the [`RunConfig`] for a deployment root.
///
/// Layering, lowest to highest priority:
/// 1. Built-in defaults of [`RunConfig`].
/// 2. `front-web.toml` in the root (optional).
/// 3. `.env` in the root (optional).
/// 4. Process environment.
///
/// Booleans accept `1`/`0`, `true`/`false`, `on`/`off` and `yes`/`no`; empty
/// variables count as unset.
pub fn load_run_config(layout: &ProjectLayout) -> Result<RunConfig, ConfigError> {
    let sources = ConfigSources::discover(layout)?;
    let cfg = load_from(sources)?;
    info!(
        root = %layout.root().display(),
        staging = cfg.staging,
        production = cfg.production,
        force_production = cfg.force_production,
        check_a = cfg.check_a_record,
        check_aaaa = cfg.check_aaaa_record,
        email = cfg.email.as_deref().unwrap_or("<none>"),
        "Loaded run configuration"
    );
    Ok(cfg)
}

/// Layers explicit sources; the building block behind [`load_run_config`].
pub fn load_from(sources: ConfigSources) -> Result<RunConfig, ConfigError> {
    let mut merged = lowercase_keys(sources.env_file);
    merged.extend(lowercase_keys(sources.process));

    let mut builder = Config::builder();
    if let Some(file) = &sources.file {
        debug!(path = %file.display(), "Layering settings file");
        builder = builder.add_source(File::from(file.as_path()).required(false));
    }

    builder
        .add_source(Environment::default().ignore_empty(true).source(Some(merged)))
        .build()
        .context("Failed to build run configuration")?
        .try_deserialize::<RunConfig>()
        .context("Failed to deserialize run configuration")
}

fn read_env_file(path: &Path) -> Result<Map<String, String>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => {
            debug!(path = %path.display(), "Reading env file");
            Ok(parse_env_file(&raw))
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
        Err(e) => Err(e).context(format!("Failed to read {}", path.display())),
    }
}

fn lowercase_keys(map: Map<String, String>) -> Map<String, String> {
    map.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect()
}
