mod catalog_service;
mod errors;

pub use catalog_service::{ServiceDependencies, get_book_page};
pub use errors::{CatalogApplicationError, Result};
