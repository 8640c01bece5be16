/// Truncates an address/hash to show the `0x` prefix, first 4 and last 4 hex chars
/// Returns "0xaD07...9d1d" format for long strings
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 13 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Pluralize "NFT" for a quantity
pub fn nft_noun(quantity: u32) -> &'static str {
    if quantity == 1 {
        "NFT"
    } else {
        "NFTs"
    }
}

/// Parse a JSON-RPC chain id, which wallets report as hex (`0x2105`) or occasionally decimal
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}
