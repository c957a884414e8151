/*!
 * ethwallet Utils
 *
 * Utilitários de endereço e de unidades de ether
 */

use ethereum_types::{Address, U256};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Casas decimais do ether
pub const ETHER_DECIMALS: u8 = 18;

/// Converte uma string hexadecimal para Address, sem diferenciar maiúsculas
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex = hex.trim();
    let hex_str = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    if hex_str.len() != 40 {
        return None;
    }
    Address::from_str(hex_str).ok()
}

/// Como [`hex_to_address`], mas com erro de validação descritivo
pub fn parse_address(hex: &str) -> Result<Address> {
    if hex.trim().is_empty() {
        return Err(Error::ValidationError("endereço vazio".to_string()));
    }
    hex_to_address(hex).ok_or_else(|| Error::ValidationError(format!("endereço inválido: {}", hex)))
}

/// Formata um Address para exibição (minúsculas)
pub fn format_address(address: &Address) -> String {
    format!("0x{:x}", address)
}

/// Formata um Address com checksum EIP-55
pub fn checksum_address(address: &Address) -> String {
    ethers::utils::to_checksum(address, None)
}

/// Formata um valor com decimais para exibição
pub fn format_token_amount(amount: &U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let divisor = U256::from(10).pow(U256::from(decimals));
    let integer_part = *amount / divisor;
    let fractional_part = *amount % divisor;

    // Parte fracionária com zeros à esquerda
    let fractional_str = fractional_part.to_string();
    let padding = decimals as usize - fractional_str.len();
    let mut padded_fractional = "0".repeat(padding);
    padded_fractional.push_str(&fractional_str);

    let trimmed = padded_fractional.trim_end_matches('0');
    if trimmed.is_empty() {
        integer_part.to_string()
    } else {
        format!("{}.{}", integer_part, trimmed)
    }
}

/// Formata wei como ether, sempre com ao menos uma casa decimal ("0.0", "1.5")
pub fn format_ether(wei: U256) -> String {
    let formatted = format_token_amount(&wei, ETHER_DECIMALS);
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

/// Converte um valor decimal em ether para wei
pub fn parse_ether(amount: &str) -> Result<U256> {
    let amount = amount.trim();
    if amount.is_empty() || amount.starts_with('-') {
        return Err(Error::ValidationError(format!("valor inválido: {:?}", amount)));
    }
    ethers::utils::parse_ether(amount)
        .map_err(|e| Error::ValidationError(format!("valor inválido {:?}: {}", amount, e)))
}
