//! Pure data structures for the order stack: [`Order`], its creation payload and its status.

pub mod order;
pub mod status;

pub use order::*;
pub use status::*;
