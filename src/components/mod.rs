// UI Components
// This module contains all reusable UI components

pub mod connect_button;
pub mod music_player;
pub mod navbar;
pub mod theme_toggle;

pub use connect_button::ConnectButton;
pub use music_player::MusicPlayer;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
