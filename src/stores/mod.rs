// Global state management
// Stores provide shared state across the application

pub mod mint_store;
pub mod theme_store;
pub mod wallet_store;
