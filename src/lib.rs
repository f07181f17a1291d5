pub mod error;
pub mod power;

pub use error::{Error, ErrorKind};
pub use power::{checked_exponent, power, steps, Step, Steps};
