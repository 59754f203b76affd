//! # CLI Argument Definitions

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use fweb_logger::FileFormat;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fweb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Certificate issuance for a front-web reverse-proxy host")]
pub struct Cli {
    /// Deployment root holding `app/`, `data/` and the compose file
    #[arg(long, global = true, default_value = ".", env = "FWEB_ROOT")]
    pub root: PathBuf,

    /// Compose file passed to `docker compose -f`, relative to the root
    #[arg(long, global = true, env = "FWEB_COMPOSE_FILE")]
    pub compose_file: Option<PathBuf>,

    /// Also write daily rolling log files into this directory
    #[arg(long, global = true, env = "FWEB_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Encoding of the log files
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, requires = "log_dir")]
    pub log_format: LogFormat,

    /// Number of rotated log files to keep
    #[arg(long, global = true, default_value_t = 14, requires = "log_dir")]
    pub log_retain: usize,

    /// Filter directives such as `fweb_issuance=debug`; replaces `RUST_LOG`
    #[arg(long, global = true, env = "FWEB_LOG_FILTER")]
    pub log_filter: Option<String>,

    /// More output: -v for debug, -vv for trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// No console output; needs `--log-dir`
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap directories, start the stack, request certificates and reload nginx
    Deploy {
        /// Do not run `docker compose up -d` first
        #[arg(long)]
        no_up: bool,
    },
    /// Validate and group the domain list without touching any service
    Check {},
    /// Render the HTTP vhost from `app/domain.list` and `app/proxy_pass`
    Vhost {},
    /// Keep the HTTP vhost in sync with the input files
    Watch {
        /// Polling interval in seconds
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
        interval: u64,
        /// Test and reload nginx after every rewrite
        #[arg(long)]
        reload: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl From<LogFormat> for FileFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Text => Self::Text,
            LogFormat::Json => Self::Json,
        }
    }
}
