use anyhow::{Context, Result};
use fweb_compose::DockerCompose;
use fweb_domain::config::ProjectLayout;
use fweb_issuance::adapters::{
    CertbotClient, ComposeNginx, FsCertificateStore, HickoryResolver, IfconfigOracle,
};
use fweb_issuance::bootstrap::create_data_dirs;
use fweb_issuance::grouping::group_by_apex;
use fweb_issuance::loader::{ensure_inputs, load_domain_list, load_proxy_target};
use fweb_issuance::vhost::apply_http_vhost;
use fweb_issuance::{Pipeline, reload_proxy};
use fweb_kernel::config::load_run_config;
use tracing::{info, warn};

/// Full deployment run.
///
/// Structural problems (missing inputs, no valid domains, a proxy
/// configuration that fails `nginx -t`) abort with an error. Groups that are
/// gated or whose certificate request fails are only reported.
pub fn deploy(layout: &ProjectLayout, compose: DockerCompose, bring_up: bool) -> Result<()> {
    create_data_dirs(layout)?;
    ensure_inputs(&[&layout.domain_list(), &layout.proxy_pass()])?;

    let config = load_run_config(layout).context("Configuration is malformed")?;
    let list = load_domain_list(&layout.domain_list())?;
    let groups = group_by_apex(list.domains())?;
    info!(groups = groups.len(), "Grouped domains");

    let upstream = load_proxy_target(&layout.proxy_pass())?;
    apply_http_vhost(&layout.nginx_sites(), list.domains(), &upstream)?;

    if bring_up {
        compose.up().context("Failed to bring the stack up")?;
    }

    let resolver = HickoryResolver::new()?;
    let oracle = IfconfigOracle::new()?;
    let store = FsCertificateStore::new(layout.live_dir());
    let certbot = CertbotClient::new(compose.clone());

    let report = Pipeline::new(&config, &resolver, &oracle, &store, &certbot).run(&groups);

    reload_proxy(&ComposeNginx::new(compose)).context("nginx was not reloaded")?;

    if report.failed() > 0 {
        warn!(failed = report.failed(), "Some certificate requests failed; see the log above");
    }
    info!("Done");
    Ok(())
}
