//! Currency entity for the SDK core
//!
//! Models a fungible currency (native coin or token) and resolves the
//! native currency registered for a chain.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{
    BNB_NAME, BNB_SYMBOL, ETHER_NAME, ETHER_SYMBOL, NATIVE_DECIMALS, RBA_NAME, RBA_SYMBOL,
};
use crate::shared::error::SdkError;
use crate::shared::types::{ChainId, SdkResult};
use crate::shared::utils::validate_uint8;

/// Construction class of a [`Currency`]
///
/// Native instances are limited to the built-in singletons; tokens are the
/// open construction path. Display-text redirection is gated on
/// `NativePlaceholder` alone, never on symbol or name contents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyKind {
    /// Chain-agnostic native stand-in; display text resolves per chain.
    NativePlaceholder,
    /// Native coin of one or more chains.
    Native,
    /// ERC20-style token.
    Token,
}

/// Immutable description of a fungible currency: decimals plus optional
/// symbol and name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
    kind: CurrencyKind,
}

lazy_static! {
    /// The chain-agnostic native currency. Its display text resolves to the
    /// registered native currency when queried with a chain id.
    pub static ref ETHER: Currency = Currency::native(
        NATIVE_DECIMALS,
        ETHER_SYMBOL,
        ETHER_NAME,
        CurrencyKind::NativePlaceholder,
    );

    /// Native currency of the BNB Smart Chain networks.
    pub static ref BNB: Currency =
        Currency::native(NATIVE_DECIMALS, BNB_SYMBOL, BNB_NAME, CurrencyKind::Native);

    /// Native currency of the Roburna networks.
    pub static ref RBA: Currency =
        Currency::native(NATIVE_DECIMALS, RBA_SYMBOL, RBA_NAME, CurrencyKind::Native);

    // One singleton may back several chains; mainnet and testnet share an entry.
    static ref NATIVE: HashMap<ChainId, &'static Currency> = {
        let mut table = HashMap::new();
        table.insert(ChainId::Ethereum, &*ETHER);
        table.insert(ChainId::Bsc, &*BNB);
        table.insert(ChainId::BscTestnet, &*BNB);
        table.insert(ChainId::Roburna, &*RBA);
        table.insert(ChainId::RoburnaTestnet, &*RBA);
        table
    };
}

impl Currency {
    // Reserved for the built-in singletons above.
    fn native(decimals: u8, symbol: &str, name: &str, kind: CurrencyKind) -> Self {
        Self {
            decimals,
            symbol: Some(symbol.to_string()),
            name: Some(name.to_string()),
            kind,
        }
    }

    /// Construct a token currency
    ///
    /// Fails with a validation error if `decimals` is not representable as
    /// an unsigned 8-bit integer.
    pub fn token(decimals: i64, symbol: Option<String>, name: Option<String>) -> SdkResult<Self> {
        let decimals = validate_uint8(decimals)?;
        Ok(Self {
            decimals,
            symbol,
            name,
            kind: CurrencyKind::Token,
        })
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn kind(&self) -> CurrencyKind {
        self.kind
    }

    pub fn is_native(&self) -> bool {
        !self.is_token()
    }

    pub fn is_token(&self) -> bool {
        self.kind == CurrencyKind::Token
    }

    /// Retrieves the native currency registered for a chain.
    ///
    /// Returns the shared singleton instance, never a copy. Fails with a
    /// lookup error when no chain id is supplied or when the chain has no
    /// registry entry.
    pub fn native_currency(chain_id: Option<ChainId>) -> SdkResult<&'static Currency> {
        let chain_id = chain_id.ok_or_else(|| SdkError::lookup("no chain id supplied"))?;
        NATIVE.get(&chain_id).copied().ok_or_else(|| {
            SdkError::lookup(format!(
                "no native currency registered for chain id {}",
                chain_id.chain_id()
            ))
        })
    }

    /// Symbol of the native currency registered for a chain.
    ///
    /// Propagates the failure modes of [`Currency::native_currency`]; the
    /// symbol may be absent even on success.
    pub fn native_currency_symbol(chain_id: Option<ChainId>) -> SdkResult<Option<&'static str>> {
        let native_currency = Self::native_currency(chain_id)?;
        Ok(native_currency.symbol())
    }

    /// Name of the native currency registered for a chain.
    pub fn native_currency_name(chain_id: Option<ChainId>) -> SdkResult<Option<&'static str>> {
        let native_currency = Self::native_currency(chain_id)?;
        Ok(native_currency.name())
    }

    /// Display symbol, optionally contextualized by a chain.
    ///
    /// Without a chain id this is the currency's own symbol. With one, a
    /// `NativePlaceholder` value resolves through the native registry so the
    /// per-chain symbol is shown; every other currency keeps its own symbol.
    pub fn display_symbol(&self, chain_id: Option<ChainId>) -> SdkResult<Option<&str>> {
        match chain_id {
            Some(chain_id) if self.kind == CurrencyKind::NativePlaceholder => {
                Self::native_currency_symbol(Some(chain_id))
            }
            _ => Ok(self.symbol()),
        }
    }

    /// Display name, optionally contextualized by a chain.
    ///
    /// Same resolution rule as [`Currency::display_symbol`], through the
    /// native-name lookup.
    pub fn display_name(&self, chain_id: Option<ChainId>) -> SdkResult<Option<&str>> {
        match chain_id {
            Some(chain_id) if self.kind == CurrencyKind::NativePlaceholder => {
                Self::native_currency_name(Some(chain_id))
            }
            _ => Ok(self.name()),
        }
    }
}
