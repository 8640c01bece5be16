//! Mint page form state

use alloy_primitives::U256;

use crate::config::{MAX_MINT, NATIVE_SYMBOL, TARGET_NETWORK};
use crate::stores::wallet_store::WalletSession;
use crate::utils::nft_noun;
use crate::utils::units::format_ether;

/// Result of the latest mint attempt
///
/// Replaces separate loading/error/success/hash flags so only one can hold at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MintOutcome {
    /// No attempt yet, or cleared for a new one
    #[default]
    Idle,

    /// Transaction handed to the wallet, waiting for a hash
    Pending,

    /// Wallet accepted the transaction
    Success(String),

    Failure(String),
}

impl MintOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, MintOutcome::Pending)
    }

    pub fn tx_hash(&self) -> Option<&str> {
        match self {
            MintOutcome::Success(hash) => Some(hash),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MintOutcome::Failure(msg) => Some(msg),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MintForm {
    pub quantity: u32,
    pub outcome: MintOutcome,
}

impl Default for MintForm {
    fn default() -> Self {
        Self {
            quantity: 1,
            outcome: MintOutcome::Idle,
        }
    }
}

impl MintForm {
    /// Apply the quantity input; values outside 1..=MAX_MINT are ignored
    pub fn set_quantity_input(&mut self, input: &str) -> bool {
        match input.trim().parse::<u32>() {
            Ok(quantity) if (1..=MAX_MINT).contains(&quantity) => {
                self.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn total_wei(&self, unit_price: U256) -> U256 {
        unit_price.saturating_mul(U256::from(self.quantity))
    }

    pub fn button_label(&self, session: &WalletSession, unit_price: U256) -> String {
        if self.outcome.is_pending() {
            "Minting...".to_string()
        } else if session.connected {
            format!(
                "Mint {} {} for {} {}",
                self.quantity,
                nft_noun(self.quantity),
                format_ether(self.total_wei(unit_price)),
                NATIVE_SYMBOL
            )
        } else {
            "Connect Wallet to Mint".to_string()
        }
    }

    /// The submit control stays disabled while a request is in flight
    pub fn is_submit_disabled(&self) -> bool {
        self.outcome.is_pending()
    }

    pub fn explorer_link(&self) -> Option<String> {
        self.outcome.tx_hash().map(|hash| TARGET_NETWORK.tx_url(hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::units::parse_ether;

    fn connected() -> WalletSession {
        WalletSession {
            connected: true,
            address: Some("0x1111111111111111111111111111111111111111".to_string()),
            chain_id: Some(8453),
        }
    }

    #[test]
    fn test_quantity_bounds() {
        let mut form = MintForm::default();
        assert!(form.set_quantity_input("10"));
        assert_eq!(form.quantity, 10);
        assert!(!form.set_quantity_input("11"));
        assert!(!form.set_quantity_input("0"));
        assert!(!form.set_quantity_input("-3"));
        assert!(!form.set_quantity_input("two"));
        assert!(!form.set_quantity_input(""));
        assert_eq!(form.quantity, 10);
        assert!(form.set_quantity_input(" 3 "));
        assert_eq!(form.quantity, 3);
    }

    #[test]
    fn test_button_labels() {
        let price = parse_ether("0.01").unwrap();
        let mut form = MintForm::default();
        assert_eq!(
            form.button_label(&WalletSession::default(), price),
            "Connect Wallet to Mint"
        );
        assert_eq!(form.button_label(&connected(), price), "Mint 1 NFT for 0.01 ETH");

        form.set_quantity_input("3");
        assert_eq!(form.button_label(&connected(), price), "Mint 3 NFTs for 0.03 ETH");

        form.outcome = MintOutcome::Pending;
        assert_eq!(form.button_label(&connected(), price), "Minting...");
        assert!(form.is_submit_disabled());
    }

    #[test]
    fn test_explorer_link_only_on_success() {
        let mut form = MintForm::default();
        assert!(form.explorer_link().is_none());

        form.outcome = MintOutcome::Failure("nope".to_string());
        assert!(form.explorer_link().is_none());
        assert_eq!(form.outcome.error(), Some("nope"));

        form.outcome = MintOutcome::Success("0xfeed".to_string());
        assert_eq!(form.explorer_link().as_deref(), Some("https://basescan.org/tx/0xfeed"));
        assert!(!form.is_submit_disabled());
    }
}
