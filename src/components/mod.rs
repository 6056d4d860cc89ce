pub mod error_banner;
pub mod loader;
pub mod message_row;
pub mod risk_chip;
pub mod status_badge;
pub mod tab_bar;
