//! Deployment environments known to the address registries.

use std::fmt;
use std::str::FromStr;

use crate::TestEnvError;

/// A deployment environment for the wormhole ecosystem.
///
/// The set is closed: registry data only exists for these three environments,
/// and selection parsing rejects anything else up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Devnet];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Testnet => "Testnet",
            Self::Devnet => "Devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = TestEnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mainnet" => Ok(Self::Mainnet),
            "Testnet" => Ok(Self::Testnet),
            "Devnet" => Ok(Self::Devnet),
            other => Err(TestEnvError::UnknownNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_network() {
        for network in Network::ALL {
            assert_eq!(network.name().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn rejects_unknown_network_with_raw_input() {
        let err = "Localnet".parse::<Network>().unwrap_err();
        assert!(matches!(err, TestEnvError::UnknownNetwork(ref s) if s == "Localnet"));
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("mainnet".parse::<Network>().is_err());
        assert!("MAINNET".parse::<Network>().is_err());
    }
}
