use crate::error::IssuanceError;
use tracing::{error, info};

/// Control surface of the reverse proxy.
pub trait ProxyControl {
    /// Validates the on-disk configuration without applying it.
    fn test_config(&self) -> Result<(), IssuanceError>;
    /// Applies the configuration to the running proxy.
    fn reload(&self) -> Result<(), IssuanceError>;
}

/// Tests the proxy configuration and reloads only if the test passes.
///
/// # Errors
/// [`IssuanceError::ProxyConfigInvalid`] when the test fails (the proxy keeps
/// its current configuration), or the reload error itself.
pub fn reload_proxy(proxy: &dyn ProxyControl) -> Result<(), IssuanceError> {
    if let Err(e) = proxy.test_config() {
        error!(error = %e, "Proxy configuration test failed; not reloading");
        return Err(IssuanceError::ProxyConfigInvalid { message: e.to_string().into(), context: None });
    }

    proxy.reload()?;
    info!("Proxy reloaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct FakeProxy {
        broken: bool,
        reloads: Cell<usize>,
    }

    impl ProxyControl for FakeProxy {
        fn test_config(&self) -> Result<(), IssuanceError> {
            if self.broken { Err("unknown directive \"proxy_pas\"".into()) } else { Ok(()) }
        }

        fn reload(&self) -> Result<(), IssuanceError> {
            self.reloads.set(self.reloads.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn valid_configuration_is_reloaded() {
        let proxy = FakeProxy::default();
        reload_proxy(&proxy).unwrap();
        assert_eq!(proxy.reloads.get(), 1);
    }

    #[test]
    fn failed_test_aborts_the_reload() {
        let proxy = FakeProxy { broken: true, ..FakeProxy::default() };
        let err = reload_proxy(&proxy).unwrap_err();

        assert!(matches!(err, IssuanceError::ProxyConfigInvalid { .. }), "got: {err}");
        assert!(err.to_string().contains("proxy_pas"));
        assert_eq!(proxy.reloads.get(), 0);
    }
}
