use alloy::primitives::Address;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static WELL_KNOWN: Lazy<TokenRegistry> = Lazy::new(TokenRegistry::new);

/// The process-wide registry of well-known mainnet tokens.
///
/// Built once on first use and never mutated afterward.
pub fn well_known() -> &'static TokenRegistry {
    &WELL_KNOWN
}

/// Mapping between well-known token symbols and their mainnet contract
/// addresses, used as the fallback when a contract's `symbol()` read fails.
pub struct TokenRegistry {
    symbol_to_address: HashMap<String, Address>,
    address_to_symbol: HashMap<Address, String>,
}

impl TokenRegistry {
    /// Create a new token registry with common mainnet tokens.
    pub fn new() -> Self {
        let mut symbol_to_address = HashMap::new();
        let mut address_to_symbol = HashMap::new();

        let tokens = [
            ("WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            ("USDC", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"),
            ("USDT", "0xdAC17F958D2ee523a2206206994597C13D831ec7"),
            ("DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F"),
            ("LINK", "0x514910771AF9Ca656af840dff83E8264EcF986CA"),
            ("UNI", "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984"),
            ("AAVE", "0x7Fc66500c84A76Ad7e9c93437E434122A1f9AcDd"),
            ("EOS", "0x86Fa049857E0209aa7D9e616F7eb3b3B78ECfdb0"),
        ];

        for (symbol, address_str) in tokens {
            if let Ok(address) = address_str.parse::<Address>() {
                symbol_to_address.insert(symbol.to_string(), address);
                address_to_symbol.insert(address, symbol.to_string());
            }
        }

        TokenRegistry {
            symbol_to_address,
            address_to_symbol,
        }
    }

    /// Get address from symbol
    pub fn symbol_to_address(&self, symbol: &str) -> Option<Address> {
        self.symbol_to_address.get(&symbol.to_uppercase()).copied()
    }

    /// Get symbol from address
    pub fn address_to_symbol(&self, address: Address) -> Option<String> {
        self.address_to_symbol.get(&address).cloned()
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
