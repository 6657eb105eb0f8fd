use mob::{ChainConfig, Client, MobError, RustSigner};
use std::sync::Arc;

#[derive(Debug)]
pub enum WalletError {
    Mnemonic(String),
    Client(String),
}

impl std::fmt::Display for WalletError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletError::Mnemonic(e) => write!(f, "Mnemonic error: {e}"),
            WalletError::Client(e) => write!(f, "Client error: {e}"),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<MobError> for WalletError {
    fn from(e: MobError) -> Self {
        WalletError::Client(e.to_string())
    }
}

/// Local signing wallet plus, once connected, the chain client used to
/// submit game transactions.
pub struct Wallet {
    signer: Arc<RustSigner>,
    client: Option<Client>,
    address: String,
}

impl Wallet {
    pub fn from_mnemonic(mnemonic: &str, prefix: &str) -> Result<Self, WalletError> {
        let signer = RustSigner::from_mnemonic(mnemonic.to_string(), prefix.to_string(), None)?;
        let address = signer.address();

        Ok(Self {
            signer: Arc::new(signer),
            client: None,
            address,
        })
    }

    /// Generate a fresh 24-word wallet; the caller must show the mnemonic
    /// to the user, it is not stored anywhere.
    pub fn generate(prefix: &str) -> Result<(Self, String), WalletError> {
        use bip39::Mnemonic;

        let mnemonic = Mnemonic::generate(24)
            .map_err(|e| WalletError::Mnemonic(format!("Failed to generate: {e:?}")))?;

        let phrase = mnemonic.to_string();
        let wallet = Self::from_mnemonic(&phrase, prefix)?;

        Ok((wallet, phrase))
    }

    pub fn connect(
        &mut self,
        chain_id: &str,
        rpc_url: &str,
        prefix: &str,
    ) -> Result<(), WalletError> {
        let config = ChainConfig::new(
            chain_id.to_string(),
            rpc_url.to_string(),
            prefix.to_string(),
        );

        let client = Client::new_with_signer(config, Arc::clone(&self.signer))?;

        self.client = Some(client);
        Ok(())
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_from_mnemonic() {
        let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art";
        assert!(Wallet::from_mnemonic(mnemonic, "xion").is_ok());
    }

    #[test]
    fn test_wallet_generate_yields_mnemonic_and_address() {
        let (wallet, mnemonic) = Wallet::generate("xion").unwrap();
        assert!(!mnemonic.is_empty());
        assert!(!wallet.address().is_empty());
    }

    #[test]
    fn test_invalid_mnemonic_rejected() {
        assert!(Wallet::from_mnemonic("invalid mnemonic", "xion").is_err());
    }
}
