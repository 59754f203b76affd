use crate::error::{IssuanceError, IssuanceErrorExt};
use crate::proxy::ProxyControl;
use fweb_compose::DockerCompose;

const SERVICE: &str = "nginx";

/// The `nginx` service of the compose stack.
#[derive(Debug, Clone)]
pub struct ComposeNginx {
    compose: DockerCompose,
}

impl ComposeNginx {
    #[must_use]
    pub const fn new(compose: DockerCompose) -> Self {
        Self { compose }
    }
}

impl ProxyControl for ComposeNginx {
    fn test_config(&self) -> Result<(), IssuanceError> {
        self.compose.exec(SERVICE, &["nginx", "-t"]).context("nginx -t")
    }

    fn reload(&self) -> Result<(), IssuanceError> {
        self.compose.exec(SERVICE, &["nginx", "-s", "reload"]).context("nginx -s reload")
    }
}
