pub mod error;
pub mod proof;
pub mod sway;

pub use error::Error;
