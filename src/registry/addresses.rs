//! Contract address constants for all supported (network, chain) pairs
//!
//! This module centralizes the static address data the registry lookups are
//! built from: USDC token contracts, Circle bridging contracts with their
//! wormhole integration deployments, Uniswap V3 routers, and public RPC
//! endpoints.

use alloy_primitives::{address, Address};

// USDC token contracts (Mainnet)

/// <https://etherscan.io/address/0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48>
pub const ETHEREUM_USDC: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

/// <https://snowtrace.io/address/0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E>
pub const AVALANCHE_USDC: Address = address!("B97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E");

/// <https://arbiscan.io/address/0xaf88d065e77c8cC2239327C5EDb3A432268e5831>
pub const ARBITRUM_USDC: Address = address!("af88d065e77c8cC2239327C5EDb3A432268e5831");

/// <https://optimistic.etherscan.io/address/0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85>
pub const OPTIMISM_USDC: Address = address!("0b2C639c533813f4Aa9D7837CAf62653d097Ff85");

/// <https://polygonscan.com/address/0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359>
pub const POLYGON_USDC: Address = address!("3c499c542cEF5E3811e1192ce70d8cC03d5c3359");

/// <https://basescan.org/address/0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913>
pub const BASE_USDC: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");

/// <https://celoscan.io/address/0xcebA9300f2b948710d2653dD7B07f33A8B32118C>
pub const CELO_USDC: Address = address!("cebA9300f2b948710d2653dD7B07f33A8B32118C");

// USDC token contracts (Testnet)

/// <https://goerli.etherscan.io/address/0x07865c6E87B9F70255377e024ace6630C1Eaa37F>
pub const ETHEREUM_GOERLI_USDC: Address = address!("07865c6E87B9F70255377e024ace6630C1Eaa37F");

/// <https://testnet.snowtrace.io/address/0x5425890298aed601595a70AB815c96711a31Bc65>
pub const AVALANCHE_FUJI_USDC: Address = address!("5425890298aed601595a70AB815c96711a31Bc65");

/// <https://goerli.arbiscan.io/address/0xfd064A18f3BF249cf1f87FC203E90D8f650f2d63>
pub const ARBITRUM_GOERLI_USDC: Address = address!("fd064A18f3BF249cf1f87FC203E90D8f650f2d63");

/// <https://goerli-optimism.etherscan.io/address/0xe05606174bac4A6364B31bd0eCA4bf4dD368f8C6>
pub const OPTIMISM_GOERLI_USDC: Address = address!("e05606174bac4A6364B31bd0eCA4bf4dD368f8C6");

/// <https://mumbai.polygonscan.com/address/0x9999f7Fea5938fD3b1E26A12c3f2fb024e194f97>
pub const POLYGON_MUMBAI_USDC: Address = address!("9999f7Fea5938fD3b1E26A12c3f2fb024e194f97");

/// <https://goerli.basescan.org/address/0xF175520C52418dfE19C8098071a252da48Cd1C19>
pub const BASE_GOERLI_USDC: Address = address!("F175520C52418dfE19C8098071a252da48Cd1C19");

// Circle TokenMessenger contracts

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const ETHEREUM_TOKEN_MESSENGER: Address = address!("Bd3fa81B58Ba92a82136038B25aDec7066af3155");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const AVALANCHE_TOKEN_MESSENGER: Address = address!("6B25532e1060CE10cc3B0A99e5683b91BFDe6982");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const ARBITRUM_TOKEN_MESSENGER: Address = address!("19330d10D9Cc8751218eaf51E8885D058642E08A");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const OPTIMISM_TOKEN_MESSENGER: Address = address!("2B4069517957735bE00ceE0fadAE88a26365528f");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const POLYGON_TOKEN_MESSENGER: Address = address!("9daF8c91AEFAE50b9c0E69629D3F6Ca40cA3B3FE");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const BASE_TOKEN_MESSENGER: Address = address!("1682Ae6375C4E4A97e4B583BC394c861A46D8962");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const ETHEREUM_GOERLI_TOKEN_MESSENGER: Address =
    address!("D0C3da58f55358142b8d3e06C1C30c5C6114EFE8");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const AVALANCHE_FUJI_TOKEN_MESSENGER: Address =
    address!("eb08f243E5d3FCFF26A9E38Ae5520A669f4019d0");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const ARBITRUM_GOERLI_TOKEN_MESSENGER: Address =
    address!("12Dcfd3Fe2E9EAc2859fD1Ed86d2ab8C5a2f9352");

/// <https://developers.circle.com/stablecoins/evm-smart-contracts>
pub const BASE_GOERLI_TOKEN_MESSENGER: Address =
    address!("9f3B8679c73C2Fef8b59B4f3444d4e156fb70AA5");

// Circle MessageTransmitter contracts

/// <https://etherscan.io/address/0x0a992d191DEeC32aFe36203Ad87D7d289a738F81>
pub const ETHEREUM_MESSAGE_TRANSMITTER: Address =
    address!("0a992d191DEeC32aFe36203Ad87D7d289a738F81");

/// <https://snowtrace.io/address/0x8186359aF5F57FbB40c6b14A588d2A59C0C29880>
pub const AVALANCHE_MESSAGE_TRANSMITTER: Address =
    address!("8186359aF5F57FbB40c6b14A588d2A59C0C29880");

/// <https://arbiscan.io/address/0xC30362313FBBA5cf9163F0bb16a0e01f01a896ca>
pub const ARBITRUM_MESSAGE_TRANSMITTER: Address =
    address!("C30362313FBBA5cf9163F0bb16a0e01f01a896ca");

/// <https://optimistic.etherscan.io/address/0x4D41f22c5a0e5c74090899E5a8Fb597a8842b3e8>
pub const OPTIMISM_MESSAGE_TRANSMITTER: Address =
    address!("4D41f22c5a0e5c74090899E5a8Fb597a8842b3e8");

/// <https://polygonscan.com/address/0xF3be9355363857F3e001be68856A2f96b4C39Ba9>
pub const POLYGON_MESSAGE_TRANSMITTER: Address =
    address!("F3be9355363857F3e001be68856A2f96b4C39Ba9");

/// <https://basescan.org/address/0xAD09780d193884d503182aD4588450C416D6F9D4>
pub const BASE_MESSAGE_TRANSMITTER: Address = address!("AD09780d193884d503182aD4588450C416D6F9D4");

/// <https://goerli.etherscan.io/address/0x26413e8157CD32011E726065a5462e97dD4d03D9>
pub const ETHEREUM_GOERLI_MESSAGE_TRANSMITTER: Address =
    address!("26413e8157CD32011E726065a5462e97dD4d03D9");

/// <https://testnet.snowtrace.io/address/0xa9fB1b3009DCb79E2fe346c16a604B8Fa8aE0a79>
pub const AVALANCHE_FUJI_MESSAGE_TRANSMITTER: Address =
    address!("a9fB1b3009DCb79E2fe346c16a604B8Fa8aE0a79");

/// <https://goerli.arbiscan.io/address/0x109bC137Cb64eAb7c0B1ddDd1Edf341467dC2D35>
pub const ARBITRUM_GOERLI_MESSAGE_TRANSMITTER: Address =
    address!("109bC137Cb64eAb7c0B1ddDd1Edf341467dC2D35");

/// <https://goerli.basescan.org/address/0x7865fAfC2db2093669d92c0F33AeEF291086BEFD>
pub const BASE_GOERLI_MESSAGE_TRANSMITTER: Address =
    address!("7865fAfC2db2093669d92c0F33AeEF291086BEFD");

// Wormhole circle-integration contracts

/// <https://etherscan.io/address/0xAaDA05BD399372f0b0463744C09113c137636f6a>
pub const ETHEREUM_CIRCLE_INTEGRATION: Address =
    address!("AaDA05BD399372f0b0463744C09113c137636f6a");

/// <https://snowtrace.io/address/0x09Fb06A271faFf70A651047395AaEb6265265F13>
pub const AVALANCHE_CIRCLE_INTEGRATION: Address =
    address!("09Fb06A271faFf70A651047395AaEb6265265F13");

/// <https://arbiscan.io/address/0x2703483B1a5a7c577e8680de9Df8Be03c6f30e3c>
pub const ARBITRUM_CIRCLE_INTEGRATION: Address =
    address!("2703483B1a5a7c577e8680de9Df8Be03c6f30e3c");

/// <https://optimistic.etherscan.io/address/0x2703483B1a5a7c577e8680de9Df8Be03c6f30e3c>
pub const OPTIMISM_CIRCLE_INTEGRATION: Address =
    address!("2703483B1a5a7c577e8680de9Df8Be03c6f30e3c");

/// <https://polygonscan.com/address/0x0FF28217dCc90372345954563486528aa865cDd6>
pub const POLYGON_CIRCLE_INTEGRATION: Address =
    address!("0FF28217dCc90372345954563486528aa865cDd6");

/// <https://basescan.org/address/0x03faBB06Fa052557143dC28eFCFc63FC12843f1D>
pub const BASE_CIRCLE_INTEGRATION: Address = address!("03faBB06Fa052557143dC28eFCFc63FC12843f1D");

/// <https://goerli.etherscan.io/address/0x0a69146716B3a21622287Efa1607424c663069a4>
pub const ETHEREUM_GOERLI_CIRCLE_INTEGRATION: Address =
    address!("0a69146716B3a21622287Efa1607424c663069a4");

/// <https://testnet.snowtrace.io/address/0x58f4C17449c90665891C42E14D34aae7a26A472e>
pub const AVALANCHE_FUJI_CIRCLE_INTEGRATION: Address =
    address!("58f4C17449c90665891C42E14D34aae7a26A472e");

/// <https://goerli.arbiscan.io/address/0x2e8f5e00a9c5D450A72700546B89E2b70DfB00f2>
pub const ARBITRUM_GOERLI_CIRCLE_INTEGRATION: Address =
    address!("2e8f5e00a9c5D450A72700546B89E2b70DfB00f2");

// Uniswap V3 SwapRouter02 deployments
//
// From <https://docs.uniswap.org/contracts/v3/reference/deployments>
// and <https://gov.uniswap.org/t/deploy-uniswap-v3-on-avalanche/20587/18>

/// SwapRouter02 on Ethereum, Arbitrum, Optimism, Polygon and Goerli.
pub const UNISWAP_V3_ROUTER: Address = address!("68b3465833fb72A70ecDF485E0e4C7bD8665Fc45");

/// SwapRouter02 on Avalanche.
pub const AVALANCHE_UNISWAP_V3_ROUTER: Address =
    address!("bb00FF08d01D300023C629E8fFfFcb65A5a578cE");

/// SwapRouter02 on Base.
pub const BASE_UNISWAP_V3_ROUTER: Address = address!("2626664c2603336E57B271c5C0b26F421741e481");

/// SwapRouter02 on BNB Smart Chain.
pub const BSC_UNISWAP_V3_ROUTER: Address = address!("B971eF87ede563556b2ED4b1C0b0019111Dd85d2");

/// SwapRouter02 on Celo.
pub const CELO_UNISWAP_V3_ROUTER: Address = address!("5615CDAb10dc425a742d643d949a7F474C01abc4");

/// Permit2, deployed at the same address on every chain and network.
///
/// <https://docs.uniswap.org/contracts/permit2/overview>
pub const PERMIT2_ADDRESS: Address = address!("000000000022D473030F116dDEE9F6B43aC78BA3");

// Public RPC endpoints

pub const ETHEREUM_RPC: &str = "https://rpc.ankr.com/eth";
pub const AVALANCHE_RPC: &str = "https://rpc.ankr.com/avalanche";
pub const ARBITRUM_RPC: &str = "https://rpc.ankr.com/arbitrum";
pub const OPTIMISM_RPC: &str = "https://rpc.ankr.com/optimism";
pub const POLYGON_RPC: &str = "https://rpc.ankr.com/polygon";
pub const BASE_RPC: &str = "https://mainnet.base.org";
pub const BSC_RPC: &str = "https://rpc.ankr.com/bsc";
pub const CELO_RPC: &str = "https://forno.celo.org";

pub const ETHEREUM_GOERLI_RPC: &str = "https://rpc.ankr.com/eth_goerli";
pub const AVALANCHE_FUJI_RPC: &str = "https://api.avax-test.network/ext/bc/C/rpc";
pub const ARBITRUM_GOERLI_RPC: &str = "https://goerli-rollup.arbitrum.io/rpc";
pub const OPTIMISM_GOERLI_RPC: &str = "https://goerli.optimism.io";
pub const POLYGON_MUMBAI_RPC: &str = "https://rpc.ankr.com/polygon_mumbai";
pub const BASE_GOERLI_RPC: &str = "https://goerli.base.org";
pub const BSC_TESTNET_RPC: &str = "https://data-seed-prebsc-1-s1.binance.org:8545";
pub const CELO_ALFAJORES_RPC: &str = "https://alfajores-forno.celo-testnet.org";

pub const ETHEREUM_DEVNET_RPC: &str = "http://eth-devnet:8545";
pub const BSC_DEVNET_RPC: &str = "http://eth-devnet2:8545";
