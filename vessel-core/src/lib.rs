#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod domain;
mod error;

pub use domain::*;
pub use error::*;
