pub mod assertions;
pub mod client;
pub mod constants;

pub use assertions::*;
pub use client::*;
pub use constants::*;
