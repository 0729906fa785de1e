//! Emits a [`ResolvedConfig`] as `KEY=value` lines for the test suite.

use std::fs;
use std::path::Path;

use crate::resolver::ResolvedConfig;
use crate::Result;

/// Where the test suite expects the rendered variables, relative to the
/// working directory.
pub const DEFAULT_ENV_PATH: &str = "testing.env";

/// Renders the seven `TEST_*` variables, one per line, trailing newline.
///
/// The key order is fixed; addresses render in EIP-55 checksummed form.
pub fn render(config: &ResolvedConfig) -> String {
    format!(
        "TEST_RPC={}\n\
         TEST_FOREIGN_CHAIN_ID={}\n\
         TEST_USDC_ADDRESS={}\n\
         TEST_FOREIGN_USDC_ADDRESS={}\n\
         TEST_CIRCLE_INTEGRATION_ADDRESS={}\n\
         TEST_UNISWAP_V3_ROUTER_ADDRESS={}\n\
         TEST_PERMIT2_ADDRESS={}\n",
        config.rpc,
        config.foreign_chain_id,
        config.usdc,
        config.foreign_usdc,
        config.circle_integration,
        config.uniswap_v3_router,
        config.permit2,
    )
}

/// Writes the rendered variables to `path`, replacing any prior content.
///
/// Callers only reach this with a fully assembled config, so the file is
/// either absent or complete; there is no partial state to clean up.
pub fn write(config: &ResolvedConfig, path: &Path) -> Result<()> {
    fs::write(path, render(config))?;
    tracing::debug!(path = %path.display(), "wrote env file");
    Ok(())
}
