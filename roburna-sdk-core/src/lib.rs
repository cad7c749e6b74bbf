//! Roburna SDK Core
//!
//! Core currency types and the native-currency registry for the Roburna
//! swap SDK. Models fungible currencies (native coins and tokens) and
//! resolves the native currency registered for a chain.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on core functionality:
//!
//! - **Domain**: Currency entities and resolution rules
//! - **Shared**: Common types, constants, utilities, and errors
//!
//! ## Usage
//!
//! ```rust
//! use roburna_sdk_core::{ChainId, Currency, ETHER};
//!
//! let native = Currency::native_currency(Some(ChainId::Roburna))?;
//! assert_eq!(native.symbol(), Some("RBA"));
//!
//! // The placeholder resolves its display text per chain
//! assert_eq!(ETHER.display_symbol(Some(ChainId::Bsc))?, Some("BNB"));
//! # Ok::<(), roburna_sdk_core::SdkError>(())
//! ```

use dotenv::dotenv;
use std::env;

// Re-export main modules for easy access
pub mod domain;
pub mod shared;

// Re-export domain entities
pub use domain::entities::currency::{Currency, CurrencyKind, BNB, ETHER, RBA};

// Re-export shared types
pub use shared::error::SdkError;
pub use shared::types::{ChainId, SdkResult};

use shared::constants::DEFAULT_CHAIN_ENV;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize the SDK core with configuration from .env or safe defaults
///
/// Reads the default chain selection from `ROBURNA_SDK_DEFAULT_CHAIN`
/// (a numeric chain id) and falls back to the Roburna mainnet.
pub fn init() -> SdkResult<ChainId> {
    dotenv().ok(); // Load .env if present
    let _ = env_logger::try_init();

    let default_chain = match env::var(DEFAULT_CHAIN_ENV) {
        Ok(raw) => {
            let id = raw.parse::<u64>()?;
            ChainId::from_chain_id(id)
                .ok_or_else(|| SdkError::lookup(format!("unknown chain id {}", id)))?
        }
        Err(_) => ChainId::Roburna,
    };

    log::debug!(
        "SDK core initialized, default chain {} ({})",
        default_chain.name(),
        default_chain.chain_id()
    );
    Ok(default_chain)
}
