// Utility functions
// Helper functions for common operations

pub mod format;
pub mod nav_style;
pub mod units;

pub use format::{nft_noun, parse_chain_id, truncate_address};
pub use nav_style::{nav_link_style, Viewport};
