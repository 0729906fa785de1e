//! # testenv-rs
//!
//! Resolves per-chain contract addresses and an RPC endpoint for a
//! (network, chain) pair and emits them as `KEY=value` environment
//! configuration for a downstream cross-chain test suite.
//!
//! The library validates the selection against closed [`Network`] and
//! [`Chain`] sets, derives the foreign counterpart chain for the cross-chain
//! scenario, looks the pair up in the compiled-in address registries, and
//! either assembles a complete [`ResolvedConfig`] or fails on the first
//! missing entry with an error naming the registry and pair.
//!
//! ## Quick Start
//!
//! ```rust
//! use testenv_rs::{parse_selection, resolve, Chain, StaticRegistry};
//!
//! # fn example() -> testenv_rs::Result<()> {
//! let args = vec!["Mainnet".to_string(), "Ethereum".to_string()];
//! let selection = parse_selection(&args)?;
//! let config = resolve(selection, &StaticRegistry)?;
//!
//! // Ethereum pairs with Avalanche for the cross-chain scenario
//! assert_eq!(config.foreign_chain_id, Chain::Avalanche.chain_id());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Public API
//!
//! - [`Network`] and [`Chain`] - the closed sets a selection is validated against
//! - [`Selection`], [`parse_selection`] and [`resolve`] - the resolution pipeline
//! - [`AddressRegistry`] and [`StaticRegistry`] - the registry seam and its compiled-in implementation
//! - [`TestEnvError`], [`RegistryKind`] and [`Result`] - the failure taxonomy
//! - [`env_file`] - rendering and writing the `testing.env` output

mod chain;
pub mod env_file;
mod error;
mod network;
mod registry;
mod resolver;

pub use chain::Chain;
pub use error::{RegistryKind, Result, TestEnvError};
pub use network::Network;
pub use registry::{AddressRegistry, CircleContracts, StaticRegistry, PERMIT2_ADDRESS};
pub use resolver::{parse_selection, resolve, ResolvedConfig, Selection};
