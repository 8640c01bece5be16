//! Compile-time site configuration: target network, mint parameters, app metadata.

use alloy_primitives::{address, Address};

/// An EVM network the site knows how to talk about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Network {
    pub name: &'static str,
    pub chain_id: u64,
    pub explorer_url: &'static str,
}

impl Network {
    /// Explorer page for a transaction hash
    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }

    /// Explorer page for an address
    pub fn address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer_url, address)
    }
}

pub const BASE: Network = Network {
    name: "Base",
    chain_id: 8453,
    explorer_url: "https://basescan.org",
};

pub const BASE_GOERLI: Network = Network {
    name: "Base Goerli",
    chain_id: 84531,
    explorer_url: "https://goerli.basescan.org",
};

/// All networks with explorer metadata
pub const KNOWN_NETWORKS: [Network; 2] = [BASE, BASE_GOERLI];

/// Network the mint page accepts transactions on
pub const TARGET_NETWORK: Network = BASE;

/// Wallet receiving mint payments
pub const RECIPIENT_ADDRESS: Address = address!("0xaD0772B609fb4A37bDA75B283F4f6F9653939d1d");

/// Price of a single NFT in ETH
pub const MINT_PRICE: &str = "0.01";

pub const MAX_MINT: u32 = 10;

pub const NATIVE_SYMBOL: &str = "ETH";

pub const APP_NAME: &str = "King of Apes";

pub const LOGO_URL: &str = "/images/LOGO.png";
pub const MUSIC_URL: &str = "/jungle-drum.mp3";

/// Look up a known network by chain id
pub fn network_by_chain_id(chain_id: u64) -> Option<&'static Network> {
    KNOWN_NETWORKS.iter().find(|n| n.chain_id == chain_id)
}
