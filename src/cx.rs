use tracing::debug;

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub verbose: bool,
}

pub fn init_chain_cx(config: ChainConfig) -> VaultChain {
    VaultChain { config }
}

/// The entry object of the process. Owns its configuration for its whole
/// lifetime; nothing reads configuration from ambient state.
#[derive(Debug)]
pub struct VaultChain {
    config: ChainConfig,
}
impl VaultChain {
    pub async fn execute(&self) -> anyhow::Result<()> {
        debug!(verbose = self.config.verbose, "chain context ready");
        Ok(())
    }
}
