//! Token secrets and the normalized grant produced by each exchange.

pub mod grant;
pub mod secret;
