use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    BSC_CHAIN_ID, BSC_TESTNET_CHAIN_ID, ETHEREUM_CHAIN_ID, ROBURNA_CHAIN_ID,
    ROBURNA_TESTNET_CHAIN_ID, SEPOLIA_CHAIN_ID,
};

// Network types - Ethereum, BSC, BSC Testnet, Roburna, Roburna Testnet, Sepolia
//
// Sepolia is part of the chain enumeration (deployment tooling targets it)
// but carries no entry in the native-currency registry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ChainId {
    Ethereum,
    Bsc,
    BscTestnet,
    Roburna,
    RoburnaTestnet,
    Sepolia,
}

impl ChainId {
    pub fn chain_id(&self) -> u64 {
        match self {
            ChainId::Ethereum => ETHEREUM_CHAIN_ID,
            ChainId::Bsc => BSC_CHAIN_ID,
            ChainId::BscTestnet => BSC_TESTNET_CHAIN_ID,
            ChainId::Roburna => ROBURNA_CHAIN_ID,
            ChainId::RoburnaTestnet => ROBURNA_TESTNET_CHAIN_ID,
            ChainId::Sepolia => SEPOLIA_CHAIN_ID,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ChainId::Ethereum => "Ethereum",
            ChainId::Bsc => "BNB Smart Chain",
            ChainId::BscTestnet => "BNB Smart Chain Testnet",
            ChainId::Roburna => "Roburna",
            ChainId::RoburnaTestnet => "Roburna Testnet",
            ChainId::Sepolia => "Sepolia",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(
            self,
            ChainId::BscTestnet | ChainId::RoburnaTestnet | ChainId::Sepolia
        )
    }

    /// Resolves a raw numeric chain id to a known network.
    pub fn from_chain_id(id: u64) -> Option<ChainId> {
        match id {
            ETHEREUM_CHAIN_ID => Some(ChainId::Ethereum),
            BSC_CHAIN_ID => Some(ChainId::Bsc),
            BSC_TESTNET_CHAIN_ID => Some(ChainId::BscTestnet),
            ROBURNA_CHAIN_ID => Some(ChainId::Roburna),
            ROBURNA_TESTNET_CHAIN_ID => Some(ChainId::RoburnaTestnet),
            SEPOLIA_CHAIN_ID => Some(ChainId::Sepolia),
            _ => None,
        }
    }
}

// Result type for better error handling
pub type SdkResult<T> = Result<T, crate::shared::error::SdkError>;
