//! Chains known to the address registries.
//!
//! Chain identifiers follow the wormhole naming convention ("Ethereum",
//! "Avalanche", ...) rather than execution-layer chain IDs; the numeric IDs
//! returned by [`Chain::chain_id`] are wormhole chain IDs, not EVM chain IDs.

use std::fmt;
use std::str::FromStr;

use crate::TestEnvError;

/// A blockchain the registries may hold addresses for.
///
/// The set is closed. Adding a chain here requires giving it a wormhole chain
/// ID below, which keeps [`Chain::chain_id`] total by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Ethereum,
    Avalanche,
    Arbitrum,
    Optimism,
    Polygon,
    Base,
    Bsc,
    Celo,
}

impl Chain {
    pub const ALL: [Chain; 8] = [
        Chain::Ethereum,
        Chain::Avalanche,
        Chain::Arbitrum,
        Chain::Optimism,
        Chain::Polygon,
        Chain::Base,
        Chain::Bsc,
        Chain::Celo,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Avalanche => "Avalanche",
            Self::Arbitrum => "Arbitrum",
            Self::Optimism => "Optimism",
            Self::Polygon => "Polygon",
            Self::Base => "Base",
            Self::Bsc => "Bsc",
            Self::Celo => "Celo",
        }
    }

    /// The canonical wormhole chain ID.
    ///
    /// <https://docs.wormhole.com/wormhole/reference/constants>
    pub const fn chain_id(self) -> u16 {
        match self {
            Self::Ethereum => 2,
            Self::Bsc => 4,
            Self::Polygon => 5,
            Self::Avalanche => 6,
            Self::Celo => 14,
            Self::Arbitrum => 23,
            Self::Optimism => 24,
            Self::Base => 30,
        }
    }

    /// The counterpart chain for a cross-chain test scenario.
    ///
    /// Ethereum pairs with Avalanche; every other chain, Avalanche included,
    /// pairs with Ethereum. The rule is a fixed two-branch mapping, not an
    /// involution.
    pub const fn foreign(self) -> Chain {
        match self {
            Self::Ethereum => Self::Avalanche,
            _ => Self::Ethereum,
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chain {
    type Err = TestEnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ethereum" => Ok(Self::Ethereum),
            "Avalanche" => Ok(Self::Avalanche),
            "Arbitrum" => Ok(Self::Arbitrum),
            "Optimism" => Ok(Self::Optimism),
            "Polygon" => Ok(Self::Polygon),
            "Base" => Ok(Self::Base),
            "Bsc" => Ok(Self::Bsc),
            "Celo" => Ok(Self::Celo),
            other => Err(TestEnvError::UnknownChain(other.to_string())),
        }
    }
}
