use anyhow::Result;
use fweb_domain::config::ProjectLayout;
use fweb_issuance::vhost::{HTTP_VHOST_FILE, sync_http_vhost};

pub fn render(layout: &ProjectLayout) -> Result<()> {
    let path = layout.nginx_sites().join(HTTP_VHOST_FILE);
    if sync_http_vhost(layout)? {
        println!("Wrote {} (reload nginx to apply)", path.display());
    } else {
        println!("{} is up to date", path.display());
    }
    Ok(())
}
