pub mod book;
pub mod errors;
pub mod pagination;

pub use book::*;
pub use errors::*;
pub use pagination::*;
