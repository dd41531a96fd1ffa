//! Client credentials and the token models returned by the exchange flows.

pub mod credentials;
pub mod token;

pub use credentials::*;
pub use token::{grant::*, secret::*};
