use ethers::signers::{LocalWallet, Signer};
use ethwallet_core::{error::Result, utils::checksum_address, Address, Error};
use std::fmt;

/// Par de chaves secp256k1 com o endereço derivado
#[derive(Clone)]
pub struct WalletData {
    pub address: Address,
    /// Chave privada em hexadecimal com prefixo `0x`
    pub private_key: String,
    /// Chave pública não comprimida (`0x04…`)
    pub public_key: String,
    pub signer: LocalWallet,
}

impl WalletData {
    fn from_signer(signer: LocalWallet) -> Self {
        let key = signer.signer();
        let private_key = format!("0x{}", hex::encode(key.to_bytes()));
        let public_key = format!(
            "0x{}",
            hex::encode(key.verifying_key().to_encoded_point(false).as_bytes())
        );
        Self {
            address: signer.address(),
            private_key,
            public_key,
            signer,
        }
    }

    /// Endereço com checksum EIP-55
    pub fn checksum_address(&self) -> String {
        checksum_address(&self.address)
    }
}

// A chave privada nunca aparece em logs
impl fmt::Debug for WalletData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletData")
            .field("address", &self.checksum_address())
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// Cria uma nova carteira aleatória
pub fn create_wallet() -> WalletData {
    WalletData::from_signer(LocalWallet::new(&mut rand::thread_rng()))
}

/// Importa uma carteira a partir da chave privada hexadecimal (`0x` opcional)
pub fn wallet_from_private_key(private_key: &str) -> Result<WalletData> {
    let key = private_key.trim();
    let key = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")).unwrap_or(key);
    let bytes = hex::decode(key).map_err(|e| Error::WalletError(format!("chave privada não hexadecimal: {}", e)))?;
    if bytes.len() != 32 {
        return Err(Error::WalletError(format!(
            "chave privada deve ter 32 bytes, recebeu {}",
            bytes.len()
        )));
    }
    let signer = LocalWallet::from_bytes(&bytes).map_err(|e| Error::WalletError(format!("chave privada inválida: {}", e)))?;
    Ok(WalletData::from_signer(signer))
}

#[cfg(test)]
mod tests {
    use super::*;

    // chave de teste bem conhecida (conta 0 do anvil/hardhat)
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn import_known_key() {
        let wallet = wallet_from_private_key(DEV_KEY).unwrap();
        assert_eq!(wallet.checksum_address(), DEV_ADDRESS);
        assert_eq!(wallet.private_key, DEV_KEY);
        assert!(wallet.public_key.starts_with("0x04"));
        assert_eq!(wallet.public_key.len(), 2 + 130);

        let unprefixed = wallet_from_private_key(&DEV_KEY[2..]).unwrap();
        assert_eq!(unprefixed.address, wallet.address);
    }

    #[test]
    fn created_wallets_are_distinct_and_reimportable() {
        let a = create_wallet();
        let b = create_wallet();
        assert_ne!(a.address, b.address);
        assert_eq!(a.private_key.len(), 66);

        let again = wallet_from_private_key(&a.private_key).unwrap();
        assert_eq!(again.address, a.address);
        assert_eq!(again.public_key, a.public_key);
    }

    #[test]
    fn rejects_bad_keys() {
        assert!(matches!(wallet_from_private_key("0x1234"), Err(Error::WalletError(_))));
        assert!(matches!(wallet_from_private_key("xyz"), Err(Error::WalletError(_))));
        assert!(matches!(wallet_from_private_key(&format!("0x{}", "00".repeat(32))), Err(Error::WalletError(_))));
    }

    #[test]
    fn debug_hides_private_key() {
        let wallet = wallet_from_private_key(DEV_KEY).unwrap();
        let shown = format!("{:?}", wallet);
        assert!(!shown.contains(&DEV_KEY[2..]));
        assert!(shown.contains(DEV_ADDRESS));
    }
}
