//! Turns a raw (network, chain) selection into a fully resolved configuration.

use alloy_primitives::Address;

use crate::registry::{AddressRegistry, PERMIT2_ADDRESS};
use crate::{Chain, Network, RegistryKind, Result, TestEnvError};

/// The validated (network, chain) pair a run operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub network: Network,
    pub chain: Chain,
}

/// Everything the downstream test suite needs, fully resolved.
///
/// Only ever constructed by [`resolve`], and only when every required registry
/// lookup succeeded; there are no default or placeholder values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub rpc: String,
    pub foreign_chain_id: u16,
    pub usdc: Address,
    pub foreign_usdc: Address,
    pub circle_integration: Address,
    pub uniswap_v3_router: Address,
    pub permit2: Address,
}

/// Validates the raw positional arguments into a [`Selection`].
///
/// Expects exactly the two tokens following the program name. The count is
/// checked before any parsing, so `parse_selection(&[])` reports usage rather
/// than an unknown network.
pub fn parse_selection(args: &[String]) -> Result<Selection> {
    let [raw_network, raw_chain] = args else {
        return Err(TestEnvError::InvalidArgumentCount);
    };

    Ok(Selection {
        network: raw_network.parse()?,
        chain: raw_chain.parse()?,
    })
}

/// Resolves a selection against a registry.
///
/// Performs the lookups in a fixed order (RPC, router, USDC, circle
/// integration, foreign USDC) and aborts on the first absent entry, so every
/// failure is attributable to exactly one registry and pair. Pure: same
/// selection and registry contents, same result.
pub fn resolve<R: AddressRegistry>(selection: Selection, registry: &R) -> Result<ResolvedConfig> {
    let Selection { network, chain } = selection;
    let foreign_chain = chain.foreign();

    tracing::debug!(%network, %chain, %foreign_chain, "resolving test environment");

    let rpc = registry
        .rpc_address(network, chain)
        .ok_or(TestEnvError::MissingRegistryEntry {
            registry: RegistryKind::Rpc,
            network,
            chain,
        })?
        .to_string();

    let uniswap_v3_router =
        registry
            .uniswap_v3_router(network, chain)
            .ok_or(TestEnvError::MissingRegistryEntry {
                registry: RegistryKind::UniswapV3Router,
                network,
                chain,
            })?;

    let usdc =
        registry
            .usdc_contract(network, chain)
            .ok_or(TestEnvError::MissingRegistryEntry {
                registry: RegistryKind::UsdcContract,
                network,
                chain,
            })?;

    let circle_integration = registry
        .circle_contracts(network, chain)
        .and_then(|contracts| contracts.wormhole)
        .ok_or(TestEnvError::MissingRegistryEntry {
            registry: RegistryKind::CircleIntegration,
            network,
            chain,
        })?;

    let foreign_usdc =
        registry
            .usdc_contract(network, foreign_chain)
            .ok_or(TestEnvError::MissingRegistryEntry {
                registry: RegistryKind::UsdcContract,
                network,
                chain: foreign_chain,
            })?;

    Ok(ResolvedConfig {
        rpc,
        foreign_chain_id: foreign_chain.chain_id(),
        usdc,
        foreign_usdc,
        circle_integration,
        uniswap_v3_router,
        permit2: PERMIT2_ADDRESS,
    })
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, Address};
    use rstest::rstest;

    use super::*;
    use crate::registry::{CircleContracts, StaticRegistry};

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[rstest]
    #[case::none(&[])]
    #[case::one(&["Mainnet"])]
    #[case::three(&["Mainnet", "Ethereum", "extra"])]
    fn wrong_argument_count_reports_usage(#[case] tokens: &[&str]) {
        let err = parse_selection(&args(tokens)).unwrap_err();
        assert!(matches!(err, TestEnvError::InvalidArgumentCount));
    }

    #[test]
    fn argument_count_checked_before_parsing() {
        // Three garbage tokens still report usage, not an unknown network.
        let err = parse_selection(&args(&["bogus", "bogus", "bogus"])).unwrap_err();
        assert!(matches!(err, TestEnvError::InvalidArgumentCount));
    }

    #[test]
    fn parses_valid_selection() {
        let selection = parse_selection(&args(&["Mainnet", "Ethereum"])).unwrap();
        assert_eq!(selection.network, Network::Mainnet);
        assert_eq!(selection.chain, Chain::Ethereum);
    }

    #[test]
    fn unknown_network_reported_before_chain() {
        let err = parse_selection(&args(&["Moonnet", "Dogechain"])).unwrap_err();
        assert!(matches!(err, TestEnvError::UnknownNetwork(ref s) if s == "Moonnet"));
    }

    #[test]
    fn unknown_chain_carries_raw_input() {
        let err = parse_selection(&args(&["Mainnet", "Dogechain"])).unwrap_err();
        assert!(matches!(err, TestEnvError::UnknownChain(ref s) if s == "Dogechain"));
    }

    #[test]
    fn resolves_mainnet_ethereum_against_static_tables() {
        let registry = StaticRegistry;
        let selection = Selection {
            network: Network::Mainnet,
            chain: Chain::Ethereum,
        };

        let config = resolve(selection, &registry).unwrap();

        assert_eq!(config.rpc, "https://rpc.ankr.com/eth");
        assert_eq!(config.foreign_chain_id, Chain::Avalanche.chain_id());
        assert_eq!(
            Some(config.usdc),
            registry.usdc_contract(Network::Mainnet, Chain::Ethereum)
        );
        assert_eq!(
            Some(config.foreign_usdc),
            registry.usdc_contract(Network::Mainnet, Chain::Avalanche)
        );
        assert_eq!(
            Some(config.circle_integration),
            registry
                .circle_contracts(Network::Mainnet, Chain::Ethereum)
                .and_then(|c| c.wormhole)
        );
        assert_eq!(
            Some(config.uniswap_v3_router),
            registry.uniswap_v3_router(Network::Mainnet, Chain::Ethereum)
        );
        assert_eq!(config.permit2, PERMIT2_ADDRESS);
    }

    #[test]
    fn avalanche_selection_uses_ethereum_as_foreign_chain() {
        let selection = Selection {
            network: Network::Mainnet,
            chain: Chain::Avalanche,
        };

        let config = resolve(selection, &StaticRegistry).unwrap();

        assert_eq!(config.foreign_chain_id, Chain::Ethereum.chain_id());
        assert_eq!(
            Some(config.foreign_usdc),
            StaticRegistry.usdc_contract(Network::Mainnet, Chain::Ethereum)
        );
    }

    #[rstest]
    #[case::no_rpc(Network::Devnet, Chain::Avalanche, RegistryKind::Rpc)]
    #[case::no_router(Network::Testnet, Chain::Avalanche, RegistryKind::UniswapV3Router)]
    #[case::no_usdc(Network::Mainnet, Chain::Bsc, RegistryKind::UsdcContract)]
    #[case::no_circle(Network::Mainnet, Chain::Celo, RegistryKind::CircleIntegration)]
    fn missing_entry_aborts_with_registry_and_pair(
        #[case] network: Network,
        #[case] chain: Chain,
        #[case] expected: RegistryKind,
    ) {
        let err = resolve(Selection { network, chain }, &StaticRegistry).unwrap_err();
        match err {
            TestEnvError::MissingRegistryEntry {
                registry,
                network: n,
                chain: c,
            } => {
                assert_eq!(registry, expected);
                assert_eq!(n, network);
                assert_eq!(c, chain);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    /// A registry with a hole wherever the overrides say so, used to reach
    /// failure cases the static tables cannot produce.
    struct HoleyRegistry {
        foreign_usdc_missing: bool,
        wormhole_missing: bool,
    }

    const TEST_TOKEN_MESSENGER: Address = address!("0000000000000000000000000000000000000001");
    const TEST_MESSAGE_TRANSMITTER: Address = address!("0000000000000000000000000000000000000002");
    const TEST_WORMHOLE: Address = address!("0000000000000000000000000000000000000003");
    const TEST_USDC: Address = address!("0000000000000000000000000000000000000004");
    const TEST_ROUTER: Address = address!("0000000000000000000000000000000000000005");

    impl AddressRegistry for HoleyRegistry {
        fn rpc_address(&self, _network: Network, _chain: Chain) -> Option<&str> {
            Some("http://localhost:8545")
        }

        fn usdc_contract(&self, _network: Network, chain: Chain) -> Option<Address> {
            if self.foreign_usdc_missing && chain == Chain::Avalanche {
                None
            } else {
                Some(TEST_USDC)
            }
        }

        fn circle_contracts(&self, _network: Network, _chain: Chain) -> Option<CircleContracts> {
            Some(CircleContracts {
                token_messenger: TEST_TOKEN_MESSENGER,
                message_transmitter: TEST_MESSAGE_TRANSMITTER,
                wormhole: (!self.wormhole_missing).then_some(TEST_WORMHOLE),
            })
        }

        fn uniswap_v3_router(&self, _network: Network, _chain: Chain) -> Option<Address> {
            Some(TEST_ROUTER)
        }
    }

    #[test]
    fn missing_foreign_usdc_names_the_foreign_chain() {
        let registry = HoleyRegistry {
            foreign_usdc_missing: true,
            wormhole_missing: false,
        };
        let selection = Selection {
            network: Network::Mainnet,
            chain: Chain::Ethereum,
        };

        let err = resolve(selection, &registry).unwrap_err();
        match err {
            TestEnvError::MissingRegistryEntry {
                registry: RegistryKind::UsdcContract,
                network: Network::Mainnet,
                chain: Chain::Avalanche,
            } => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn circle_record_without_wormhole_field_counts_as_missing() {
        let registry = HoleyRegistry {
            foreign_usdc_missing: false,
            wormhole_missing: true,
        };
        let selection = Selection {
            network: Network::Mainnet,
            chain: Chain::Ethereum,
        };

        let err = resolve(selection, &registry).unwrap_err();
        assert!(matches!(
            err,
            TestEnvError::MissingRegistryEntry {
                registry: RegistryKind::CircleIntegration,
                ..
            }
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let selection = Selection {
            network: Network::Testnet,
            chain: Chain::Ethereum,
        };
        let first = resolve(selection, &StaticRegistry).unwrap();
        let second = resolve(selection, &StaticRegistry).unwrap();
        assert_eq!(first, second);
    }
}
