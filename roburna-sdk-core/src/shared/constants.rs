//! Constants for the SDK core
//!
//! This module contains all constants used throughout the SDK core.

// Chain identifiers
pub const ETHEREUM_CHAIN_ID: u64 = 1;
pub const BSC_CHAIN_ID: u64 = 56;
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;
pub const ROBURNA_CHAIN_ID: u64 = 158;
pub const ROBURNA_TESTNET_CHAIN_ID: u64 = 159;
pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

pub const SUPPORTED_CHAIN_IDS: &[u64] = &[
    ETHEREUM_CHAIN_ID,
    BSC_CHAIN_ID,
    BSC_TESTNET_CHAIN_ID,
    ROBURNA_CHAIN_ID,
    ROBURNA_TESTNET_CHAIN_ID,
    SEPOLIA_CHAIN_ID,
];

// Native currency display text
pub const NATIVE_DECIMALS: u8 = 18;
pub const ETHER_SYMBOL: &str = "ETH";
pub const ETHER_NAME: &str = "Ether";
pub const BNB_SYMBOL: &str = "BNB";
pub const BNB_NAME: &str = "BNB";
pub const RBA_SYMBOL: &str = "RBA";
pub const RBA_NAME: &str = "RBA";

// Configuration
pub const DEFAULT_CHAIN_ENV: &str = "ROBURNA_SDK_DEFAULT_CHAIN";

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
