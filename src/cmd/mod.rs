pub mod pace;
pub mod placeholder;
pub mod session;
pub mod tiers;
