//! Wire format of the token endpoint: form-encoded requests and JSON token responses.

pub mod request;
pub mod response;

pub use oauth2;
pub use request::*;
pub use response::*;
