pub mod chapter;
pub mod common;
pub mod snapshot;

pub use chapter::*;
pub use common::*;
pub use snapshot::*;
