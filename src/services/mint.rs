//! Mint flow: validate the wallet, price the order, submit one value transfer.

use alloy_primitives::{Address, U256};
use std::fmt;

use crate::config::{self, MAX_MINT, MINT_PRICE, RECIPIENT_ADDRESS, TARGET_NETWORK};
use crate::services::ethereum::{ProviderError, TransactionProvider, TransactionRequest};
use crate::stores::mint_store::MintOutcome;
use crate::stores::wallet_store::WalletConnector;
use crate::utils::units::{parse_ether, to_hex_quantity, UnitError};

/// Error type for a mint attempt
#[derive(Debug, Clone, PartialEq)]
pub enum MintError {
    WrongChain { expected: u64 },
    ProviderMissing,
    /// Provider text, unmodified
    Rejected(String),
    InvalidQuantity(u32),
    Amount(UnitError),
}

impl fmt::Display for MintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MintError::WrongChain { expected } => {
                let name = config::network_by_chain_id(*expected)
                    .map(|n| n.name)
                    .unwrap_or("the correct");
                write!(f, "Please switch to {} Network to mint NFTs", name)
            }
            MintError::ProviderMissing => {
                write!(f, "MetaMask or another Web3 provider is not installed")
            }
            MintError::Rejected(message) => write!(f, "{}", message),
            MintError::InvalidQuantity(q) => {
                write!(f, "Quantity must be between 1 and {}, got {}", MAX_MINT, q)
            }
            MintError::Amount(e) => write!(f, "Invalid mint amount: {}", e),
        }
    }
}

impl std::error::Error for MintError {}

impl From<UnitError> for MintError {
    fn from(e: UnitError) -> Self {
        MintError::Amount(e)
    }
}

impl From<ProviderError> for MintError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::NotInstalled => MintError::ProviderMissing,
            ProviderError::Rejected { message, .. } => MintError::Rejected(message),
        }
    }
}

/// One order: how many, at what price, paid to whom, on which chain
#[derive(Debug, Clone, PartialEq)]
pub struct MintRequest {
    quantity: u32,
    unit_price: U256,
    recipient: Address,
    expected_chain_id: u64,
}

impl MintRequest {
    pub fn new(
        quantity: u32,
        unit_price: U256,
        recipient: Address,
        expected_chain_id: u64,
    ) -> Result<Self, MintError> {
        if !(1..=MAX_MINT).contains(&quantity) {
            return Err(MintError::InvalidQuantity(quantity));
        }
        Ok(Self {
            quantity,
            unit_price,
            recipient,
            expected_chain_id,
        })
    }

    /// Order against the site's configured price, recipient and network
    pub fn from_config(quantity: u32) -> Result<Self, MintError> {
        Self::new(
            quantity,
            parse_ether(MINT_PRICE)?,
            RECIPIENT_ADDRESS,
            TARGET_NETWORK.chain_id,
        )
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn expected_chain_id(&self) -> u64 {
        self.expected_chain_id
    }

    /// quantity x unit price, in wei
    pub fn total(&self) -> Result<U256, MintError> {
        self.unit_price
            .checked_mul(U256::from(self.quantity))
            .ok_or(MintError::Amount(UnitError::Overflow))
    }

    /// Transfer paying for this order from `from`
    pub fn transaction(&self, from: &str) -> Result<TransactionRequest, MintError> {
        Ok(TransactionRequest {
            from: from.to_string(),
            to: self.recipient.to_checksum(None),
            value: to_hex_quantity(self.total()?),
        })
    }
}

/// Runs mint attempts against a wallet and an optional injected provider
pub struct MintController<'a, W: WalletConnector + ?Sized, P: TransactionProvider + ?Sized> {
    wallet: &'a W,
    provider: Option<&'a P>,
}

impl<'a, W: WalletConnector + ?Sized, P: TransactionProvider + ?Sized> MintController<'a, W, P> {
    pub fn new(wallet: &'a W, provider: Option<&'a P>) -> Self {
        Self { wallet, provider }
    }

    /// Run one attempt, reporting every state change through `report`.
    ///
    /// The previous outcome is always cleared first. A disconnected wallet only
    /// opens the connect UI; a wrong chain fails without touching the provider.
    /// Otherwise exactly one transaction request is made.
    pub async fn mint(&self, request: &MintRequest, mut report: impl FnMut(MintOutcome)) -> MintOutcome {
        report(MintOutcome::Idle);

        let session = self.wallet.session();
        let from = match session.address.as_deref() {
            Some(address) if session.connected => address.to_string(),
            _ => {
                log::info!("Wallet not connected, opening connect UI");
                self.wallet.open_connect();
                return MintOutcome::Idle;
            }
        };

        if !session.is_on_chain(request.expected_chain_id()) {
            let err = MintError::WrongChain {
                expected: request.expected_chain_id(),
            };
            log::warn!("Mint blocked, wallet on chain {:?}", session.chain_id);
            return finish(Err(err), &mut report);
        }

        let tx = match request.transaction(&from) {
            Ok(tx) => tx,
            Err(e) => return finish(Err(e), &mut report),
        };

        report(MintOutcome::Pending);

        let Some(provider) = self.provider else {
            return finish(Err(MintError::ProviderMissing), &mut report);
        };

        log::info!("Minting {} NFT(s), value {}", request.quantity(), tx.value);
        let result = provider.send_transaction(&tx).await.map_err(MintError::from);
        finish(result, &mut report)
    }
}

fn finish(result: Result<String, MintError>, report: &mut impl FnMut(MintOutcome)) -> MintOutcome {
    let outcome = match result {
        Ok(hash) => {
            log::info!("Transaction sent: {}", hash);
            MintOutcome::Success(hash)
        }
        Err(e) => {
            log::error!("Transaction error: {}", e);
            MintOutcome::Failure(e.to_string())
        }
    };
    report(outcome.clone());
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::wallet_store::WalletSession;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    const SENDER: &str = "0x1111111111111111111111111111111111111111";

    struct MockWallet {
        session: WalletSession,
        connect_calls: Cell<usize>,
    }

    impl MockWallet {
        fn new(connected: bool, chain_id: u64) -> Self {
            Self {
                session: WalletSession {
                    connected,
                    address: connected.then(|| SENDER.to_string()),
                    chain_id: Some(chain_id),
                },
                connect_calls: Cell::new(0),
            }
        }
    }

    impl WalletConnector for MockWallet {
        fn session(&self) -> WalletSession {
            self.session.clone()
        }

        fn open_connect(&self) {
            self.connect_calls.set(self.connect_calls.get() + 1);
        }
    }

    struct MockProvider {
        response: Result<String, ProviderError>,
        requests: RefCell<Vec<TransactionRequest>>,
    }

    impl MockProvider {
        fn new(response: Result<String, ProviderError>) -> Self {
            Self {
                response,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TransactionProvider for MockProvider {
        async fn send_transaction(&self, tx: &TransactionRequest) -> Result<String, ProviderError> {
            self.requests.borrow_mut().push(tx.clone());
            self.response.clone()
        }
    }

    fn run(
        wallet: &MockWallet,
        provider: Option<&MockProvider>,
        quantity: u32,
    ) -> (MintOutcome, Vec<MintOutcome>) {
        let request = MintRequest::from_config(quantity).unwrap();
        let controller = MintController::new(wallet, provider);
        let mut reports = Vec::new();
        let outcome = block_on(controller.mint(&request, |o| reports.push(o)));
        (outcome, reports)
    }

    #[test]
    fn test_disconnected_prompts_connect_only() {
        let wallet = MockWallet::new(false, 8453);
        let provider = MockProvider::new(Ok("0xhash".to_string()));

        let (outcome, reports) = run(&wallet, Some(&provider), 1);

        assert_eq!(outcome, MintOutcome::Idle);
        assert_eq!(reports, vec![MintOutcome::Idle]);
        assert_eq!(wallet.connect_calls.get(), 1);
        assert!(provider.requests.borrow().is_empty());
    }

    #[test]
    fn test_wrong_chain_fails_without_request() {
        let wallet = MockWallet::new(true, 1);
        let provider = MockProvider::new(Ok("0xhash".to_string()));

        let (outcome, _) = run(&wallet, Some(&provider), 1);

        assert_eq!(
            outcome,
            MintOutcome::Failure("Please switch to Base Network to mint NFTs".to_string())
        );
        assert!(provider.requests.borrow().is_empty());
        assert_eq!(wallet.connect_calls.get(), 0);
    }

    #[test]
    fn test_success_keeps_hash_and_sends_one_transfer() {
        let hash = "0x8a0f3b1d6e4c2a9b7f5e3d1c0b9a8f7e6d5c4b3a2f1e0d9c8b7a6f5e4d3c2b1a";
        let wallet = MockWallet::new(true, 8453);
        let provider = MockProvider::new(Ok(hash.to_string()));

        let (outcome, reports) = run(&wallet, Some(&provider), 3);

        assert_eq!(outcome, MintOutcome::Success(hash.to_string()));
        assert_eq!(
            reports,
            vec![
                MintOutcome::Idle,
                MintOutcome::Pending,
                MintOutcome::Success(hash.to_string())
            ]
        );

        let requests = provider.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].from, SENDER);
        assert_eq!(
            requests[0].to.to_lowercase(),
            "0xad0772b609fb4a37bda75b283f4f6f9653939d1d"
        );
        // 0.03 ETH
        assert_eq!(requests[0].value, "0x6a94d74f430000");
    }

    #[test]
    fn test_rejection_message_kept_verbatim() {
        let wallet = MockWallet::new(true, 8453);
        let provider = MockProvider::new(Err(ProviderError::Rejected {
            code: Some(4001),
            message: "MetaMask Tx Signature: User denied transaction signature.".to_string(),
        }));

        let (outcome, reports) = run(&wallet, Some(&provider), 1);

        assert_eq!(
            outcome,
            MintOutcome::Failure(
                "MetaMask Tx Signature: User denied transaction signature.".to_string()
            )
        );
        assert_eq!(reports.last(), Some(&outcome));
        assert_eq!(provider.requests.borrow().len(), 1);
    }

    #[test]
    fn test_missing_provider_is_reported() {
        let wallet = MockWallet::new(true, 8453);

        let (outcome, reports) = run(&wallet, None, 1);

        assert_eq!(
            outcome,
            MintOutcome::Failure("MetaMask or another Web3 provider is not installed".to_string())
        );
        assert_eq!(reports[1], MintOutcome::Pending);
    }

    #[test]
    fn test_next_attempt_clears_previous_outcome() {
        let wallet = MockWallet::new(true, 8453);
        let failing = MockProvider::new(Err(ProviderError::rejected("insufficient funds")));
        let (first, _) = run(&wallet, Some(&failing), 1);
        assert_eq!(first, MintOutcome::Failure("insufficient funds".to_string()));

        let succeeding = MockProvider::new(Ok("0xabc".to_string()));
        let mut state = first;
        let request = MintRequest::from_config(1).unwrap();
        let controller = MintController::new(&wallet, Some(&succeeding));
        let mut seen = Vec::new();
        block_on(controller.mint(&request, |o| {
            seen.push(o.clone());
            state = o;
        }));

        assert_eq!(seen[0], MintOutcome::Idle);
        assert_eq!(state, MintOutcome::Success("0xabc".to_string()));
    }

    #[test]
    fn test_totals_for_every_quantity() {
        for quantity in 1..=MAX_MINT {
            let request = MintRequest::from_config(quantity).unwrap();
            let total = request.total().unwrap();
            assert_eq!(total, U256::from(quantity as u128 * 10_000_000_000_000_000u128));

            let tx = request.transaction(SENDER).unwrap();
            let decoded = u128::from_str_radix(&tx.value[2..], 16).unwrap() as f64 / 1e18;
            assert!((decoded - 0.01 * quantity as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn test_quantity_out_of_range_rejected() {
        assert_eq!(MintRequest::from_config(0), Err(MintError::InvalidQuantity(0)));
        assert_eq!(MintRequest::from_config(11), Err(MintError::InvalidQuantity(11)));
    }
}
