use std::fmt;

use thiserror::Error;

use crate::{Chain, Network};

#[derive(Error, Debug)]
pub enum TestEnvError {
    #[error("Usage: <network (e.g. Mainnet)> <chain (e.g. Ethereum)>")]
    InvalidArgumentCount,

    #[error("Invalid network: {0}")]
    UnknownNetwork(String),

    #[error("Invalid chain: {0}")]
    UnknownChain(String),

    #[error("No {registry} for {network} {chain}")]
    MissingRegistryEntry {
        registry: RegistryKind,
        network: Network,
        chain: Chain,
    },

    #[error("Failed to write env file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TestEnvError>;

/// Identifies which registry a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
    Rpc,
    UniswapV3Router,
    UsdcContract,
    CircleIntegration,
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rpc => "RPC address",
            Self::UniswapV3Router => "Uniswap V3 router",
            Self::UsdcContract => "USDC contract",
            Self::CircleIntegration => "Circle integration contract",
        };
        write!(f, "{name}")
    }
}
