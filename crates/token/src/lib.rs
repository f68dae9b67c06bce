//! Token domain layer: amount parsing, error taxonomy, and the service that
//! orchestrates pre-flight checks and contract calls.

pub mod amount;
pub mod error;
pub mod service;

pub use amount::{parse_amount, DECIMALS};
pub use error::TokenError;
pub use service::{TokenInfo, TokenService};
