// Coinbank - Core Library
// Exposes the coin bank entity for use in the demo binary and tests

pub mod entities;

// Re-export commonly used types
pub use entities::{Coinbank, DIME_VALUE, NICKEL_VALUE, PENNY_VALUE, QUARTER_VALUE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
