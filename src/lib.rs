pub mod error;
pub mod handlers;
pub mod host;
pub mod protocol;

pub use error::{Error, Result};
pub use host::run;
