#![cfg_attr(not(test), no_std)]

pub mod units;
pub use units::*;

pub mod error;
pub use error::*;

pub mod acquisition;
pub use acquisition::*;

pub mod decoder;
pub use decoder::*;

pub mod validator;
pub use validator::*;

pub mod cache;
pub use cache::*;

pub mod derive;

pub mod attitude;
pub use attitude::*;

pub mod pipeline;
pub use pipeline::*;

#[cfg(test)]
mod tests;
