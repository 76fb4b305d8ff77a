pub mod handlers;
pub mod pages;
pub mod routes;

pub use handlers::*;
pub use routes::*;
