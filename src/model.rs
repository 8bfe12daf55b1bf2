//! Wire-format data carriers exchanged with the API.

pub mod beer;
pub mod page;

pub use beer::*;
pub use page::*;
