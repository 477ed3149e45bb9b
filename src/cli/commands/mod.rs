pub mod analyze;
pub mod demo;
pub mod transfer;

pub use analyze::*;
pub use demo::*;
pub use transfer::*;
