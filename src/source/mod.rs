pub mod error;
pub mod http;
pub mod traits;

#[cfg(test)]
pub mod fake;

pub use error::*;
pub use http::*;
pub use traits::*;
