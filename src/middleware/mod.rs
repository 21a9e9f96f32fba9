// Middleware for CORS, panic recovery, HTTPS redirects

pub mod catch_panic;
pub mod cors;
pub mod https_redirect;

pub use catch_panic::*;
pub use cors::*;
pub use https_redirect::*;
