pub mod cs;

pub use cs::{error, graph};
pub use error::{Error, Result};
