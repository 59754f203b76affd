use crate::decision::CertificateStore;
use fweb_domain::constants::{FULLCHAIN_FILE, PRIVKEY_FILE};
use std::path::PathBuf;

/// Certbot's `live/` directory on the host.
#[derive(Debug, Clone)]
pub struct FsCertificateStore {
    live_dir: PathBuf,
}

impl FsCertificateStore {
    pub fn new(live_dir: impl Into<PathBuf>) -> Self {
        Self { live_dir: live_dir.into() }
    }
}

impl CertificateStore for FsCertificateStore {
    /// Both `fullchain.pem` and `privkey.pem` must be present.
    fn exists(&self, cert_name: &str) -> bool {
        let dir = self.live_dir.join(cert_name);
        dir.join(FULLCHAIN_FILE).is_file() && dir.join(PRIVKEY_FILE).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn certificate_needs_chain_and_key() {
        let live = tempfile::tempdir().unwrap();
        let store = FsCertificateStore::new(live.path());
        let dir = live.path().join("example.com-staging");
        fs::create_dir_all(&dir).unwrap();

        assert!(!store.exists("example.com-staging"));

        fs::write(dir.join(FULLCHAIN_FILE), "chain").unwrap();
        assert!(!store.exists("example.com-staging"), "key still missing");

        fs::write(dir.join(PRIVKEY_FILE), "key").unwrap();
        assert!(store.exists("example.com-staging"));
        assert!(!store.exists("example.com"), "names are exact");
    }
}
