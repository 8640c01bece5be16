pub mod ethereum;
pub mod mint;
