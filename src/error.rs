use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ProfileErr {
    ValidationErr(String),
}

impl fmt::Display for ProfileErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileErr::ValidationErr(reason) => write!(f, "invalid profile: {}", reason),
        }
    }
}

impl Error for ProfileErr {}

pub type Result<T> = std::result::Result<T, ProfileErr>;
