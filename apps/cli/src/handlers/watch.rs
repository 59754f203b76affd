use anyhow::{Context, Result};
use fweb_compose::DockerCompose;
use fweb_domain::config::{ProjectLayout, WatchConfig};
use fweb_issuance::adapters::ComposeNginx;
use fweb_issuance::reload_proxy;
use fweb_issuance::vhost::sync_http_vhost;
use fweb_issuance::watch::InputWatcher;
use std::thread;
use tracing::{info, warn};

/// Polls the inputs forever, rewriting the vhost whenever they change.
///
/// A broken edit is reported and retried on the next poll; the last good vhost
/// stays in place meanwhile.
///
/// With `reload`, nginx is tested and reloaded through that compose project
/// after every rewrite.
pub fn watch(
    layout: &ProjectLayout,
    config: WatchConfig,
    reload: Option<DockerCompose>,
) -> Result<()> {
    let mut inputs = InputWatcher::new([layout.domain_list(), layout.proxy_pass()]);
    sync_http_vhost(layout).context("Initial inputs are invalid")?;

    let nginx = reload.map(ComposeNginx::new);
    info!(interval_secs = config.interval.as_secs(), reload = nginx.is_some(), "Watching inputs");

    loop {
        thread::sleep(config.interval);
        let Some(snapshot) = inputs.poll() else {
            continue;
        };

        match sync_http_vhost(layout) {
            Ok(rewritten) => {
                inputs.commit(snapshot);
                info!(rewritten, "Inputs changed");
                if let (true, Some(nginx)) = (rewritten, &nginx) {
                    if let Err(e) = reload_proxy(nginx) {
                        warn!(error = %e, "nginx keeps its previous configuration");
                    }
                }
            },
            Err(e) => warn!(error = %e, "Reload failed; keeping the last good configuration"),
        }
    }
}
