mod error;
mod profile;
mod sample;

pub use error::*;
pub use profile::*;
pub use sample::*;
