//! Read-only address registries keyed by (network, chain)
//!
//! Every lookup answers with `Some(value)` or `None`; absence is data, not an
//! error. Chains without a native Circle USDC deployment (Bsc) or without a
//! wormhole circle-integration deployment (Celo) simply have no entry, and the
//! resolver decides what absence means for a given run.

pub mod addresses;

use alloy_primitives::Address;

use crate::{Chain, Network};
use addresses::*;

pub use addresses::PERMIT2_ADDRESS;

/// The Circle contract deployments for one (network, chain) pair.
///
/// `wormhole` is the circle-integration bridge contract; it lags the core
/// Circle contracts on some chains, so a present record may still carry
/// `wormhole: None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleContracts {
    pub token_messenger: Address,
    pub message_transmitter: Address,
    pub wormhole: Option<Address>,
}

/// Read-only source of per-(network, chain) address data.
///
/// The compiled-in tables implement this via [`StaticRegistry`]; tests use
/// hand-built fakes to exercise resolution against registries with holes.
pub trait AddressRegistry {
    /// Public RPC endpoint for the pair, if one is known.
    fn rpc_address(&self, network: Network, chain: Chain) -> Option<&str>;

    /// Circle USDC token contract for the pair, if deployed.
    fn usdc_contract(&self, network: Network, chain: Chain) -> Option<Address>;

    /// Circle contract record for the pair, if Circle is deployed there.
    fn circle_contracts(&self, network: Network, chain: Chain) -> Option<CircleContracts>;

    /// Uniswap V3 SwapRouter02 for the pair, if deployed.
    fn uniswap_v3_router(&self, network: Network, chain: Chain) -> Option<Address>;
}

/// The compiled-in registry backed by the tables in [`addresses`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRegistry;

impl AddressRegistry for StaticRegistry {
    fn rpc_address(&self, network: Network, chain: Chain) -> Option<&str> {
        use Chain::*;
        use Network::*;

        match (network, chain) {
            (Mainnet, Ethereum) => Some(ETHEREUM_RPC),
            (Mainnet, Avalanche) => Some(AVALANCHE_RPC),
            (Mainnet, Arbitrum) => Some(ARBITRUM_RPC),
            (Mainnet, Optimism) => Some(OPTIMISM_RPC),
            (Mainnet, Polygon) => Some(POLYGON_RPC),
            (Mainnet, Base) => Some(BASE_RPC),
            (Mainnet, Bsc) => Some(BSC_RPC),
            (Mainnet, Celo) => Some(CELO_RPC),
            (Testnet, Ethereum) => Some(ETHEREUM_GOERLI_RPC),
            (Testnet, Avalanche) => Some(AVALANCHE_FUJI_RPC),
            (Testnet, Arbitrum) => Some(ARBITRUM_GOERLI_RPC),
            (Testnet, Optimism) => Some(OPTIMISM_GOERLI_RPC),
            (Testnet, Polygon) => Some(POLYGON_MUMBAI_RPC),
            (Testnet, Base) => Some(BASE_GOERLI_RPC),
            (Testnet, Bsc) => Some(BSC_TESTNET_RPC),
            (Testnet, Celo) => Some(CELO_ALFAJORES_RPC),
            (Devnet, Ethereum) => Some(ETHEREUM_DEVNET_RPC),
            (Devnet, Bsc) => Some(BSC_DEVNET_RPC),
            _ => None,
        }
    }

    fn usdc_contract(&self, network: Network, chain: Chain) -> Option<Address> {
        use Chain::*;
        use Network::*;

        match (network, chain) {
            (Mainnet, Ethereum) => Some(ETHEREUM_USDC),
            (Mainnet, Avalanche) => Some(AVALANCHE_USDC),
            (Mainnet, Arbitrum) => Some(ARBITRUM_USDC),
            (Mainnet, Optimism) => Some(OPTIMISM_USDC),
            (Mainnet, Polygon) => Some(POLYGON_USDC),
            (Mainnet, Base) => Some(BASE_USDC),
            (Mainnet, Celo) => Some(CELO_USDC),
            (Testnet, Ethereum) => Some(ETHEREUM_GOERLI_USDC),
            (Testnet, Avalanche) => Some(AVALANCHE_FUJI_USDC),
            (Testnet, Arbitrum) => Some(ARBITRUM_GOERLI_USDC),
            (Testnet, Optimism) => Some(OPTIMISM_GOERLI_USDC),
            (Testnet, Polygon) => Some(POLYGON_MUMBAI_USDC),
            (Testnet, Base) => Some(BASE_GOERLI_USDC),
            _ => None,
        }
    }

    fn circle_contracts(&self, network: Network, chain: Chain) -> Option<CircleContracts> {
        use Chain::*;
        use Network::*;

        match (network, chain) {
            (Mainnet, Ethereum) => Some(CircleContracts {
                token_messenger: ETHEREUM_TOKEN_MESSENGER,
                message_transmitter: ETHEREUM_MESSAGE_TRANSMITTER,
                wormhole: Some(ETHEREUM_CIRCLE_INTEGRATION),
            }),
            (Mainnet, Avalanche) => Some(CircleContracts {
                token_messenger: AVALANCHE_TOKEN_MESSENGER,
                message_transmitter: AVALANCHE_MESSAGE_TRANSMITTER,
                wormhole: Some(AVALANCHE_CIRCLE_INTEGRATION),
            }),
            (Mainnet, Arbitrum) => Some(CircleContracts {
                token_messenger: ARBITRUM_TOKEN_MESSENGER,
                message_transmitter: ARBITRUM_MESSAGE_TRANSMITTER,
                wormhole: Some(ARBITRUM_CIRCLE_INTEGRATION),
            }),
            (Mainnet, Optimism) => Some(CircleContracts {
                token_messenger: OPTIMISM_TOKEN_MESSENGER,
                message_transmitter: OPTIMISM_MESSAGE_TRANSMITTER,
                wormhole: Some(OPTIMISM_CIRCLE_INTEGRATION),
            }),
            (Mainnet, Polygon) => Some(CircleContracts {
                token_messenger: POLYGON_TOKEN_MESSENGER,
                message_transmitter: POLYGON_MESSAGE_TRANSMITTER,
                wormhole: Some(POLYGON_CIRCLE_INTEGRATION),
            }),
            (Mainnet, Base) => Some(CircleContracts {
                token_messenger: BASE_TOKEN_MESSENGER,
                message_transmitter: BASE_MESSAGE_TRANSMITTER,
                wormhole: Some(BASE_CIRCLE_INTEGRATION),
            }),
            (Testnet, Ethereum) => Some(CircleContracts {
                token_messenger: ETHEREUM_GOERLI_TOKEN_MESSENGER,
                message_transmitter: ETHEREUM_GOERLI_MESSAGE_TRANSMITTER,
                wormhole: Some(ETHEREUM_GOERLI_CIRCLE_INTEGRATION),
            }),
            (Testnet, Avalanche) => Some(CircleContracts {
                token_messenger: AVALANCHE_FUJI_TOKEN_MESSENGER,
                message_transmitter: AVALANCHE_FUJI_MESSAGE_TRANSMITTER,
                wormhole: Some(AVALANCHE_FUJI_CIRCLE_INTEGRATION),
            }),
            (Testnet, Arbitrum) => Some(CircleContracts {
                token_messenger: ARBITRUM_GOERLI_TOKEN_MESSENGER,
                message_transmitter: ARBITRUM_GOERLI_MESSAGE_TRANSMITTER,
                wormhole: Some(ARBITRUM_GOERLI_CIRCLE_INTEGRATION),
            }),
            // Circle is live on Base Goerli but the circle-integration
            // contract is not deployed there.
            (Testnet, Base) => Some(CircleContracts {
                token_messenger: BASE_GOERLI_TOKEN_MESSENGER,
                message_transmitter: BASE_GOERLI_MESSAGE_TRANSMITTER,
                wormhole: None,
            }),
            _ => None,
        }
    }

    fn uniswap_v3_router(&self, network: Network, chain: Chain) -> Option<Address> {
        use Chain::*;
        use Network::*;

        match (network, chain) {
            (Mainnet, Ethereum | Arbitrum | Optimism | Polygon) => Some(UNISWAP_V3_ROUTER),
            (Mainnet, Avalanche) => Some(AVALANCHE_UNISWAP_V3_ROUTER),
            (Mainnet, Base) => Some(BASE_UNISWAP_V3_ROUTER),
            (Mainnet, Bsc) => Some(BSC_UNISWAP_V3_ROUTER),
            (Mainnet, Celo) => Some(CELO_UNISWAP_V3_ROUTER),
            // Goerli
            (Testnet, Ethereum) => Some(UNISWAP_V3_ROUTER),
            _ => None,
        }
    }
}
