use crate::error::{IssuanceError, IssuanceErrorExt};
use fweb_domain::config::ProjectLayout;
use std::fs;
use tracing::debug;

/// Creates the data directories the proxy and certbot containers mount.
pub fn create_data_dirs(layout: &ProjectLayout) -> Result<(), IssuanceError> {
    for dir in layout.bootstrap_dirs() {
        fs::create_dir_all(&dir).context(format!("Failed to create {}", dir.display()))?;
        debug!(path = %dir.display(), "Ensured directory");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_every_data_dir_and_is_repeatable() {
        let root = tempfile::tempdir().unwrap();
        let layout = ProjectLayout::new(root.path());

        create_data_dirs(&layout).unwrap();
        create_data_dirs(&layout).unwrap();

        assert!(layout.nginx_sites().is_dir());
        assert!(layout.nginx_logs().is_dir());
        assert!(layout.certbot_webroot().is_dir());
        assert!(layout.certbot_conf().is_dir());
    }
}
