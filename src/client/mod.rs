pub mod render;
pub mod state;
pub mod transport;
pub mod view;

pub use render::{Controls, render};
pub use state::{FetchCommand, PAGE_SIZE_OPTIONS, RequestToken, ViewEvent, ViewState, reduce};
pub use transport::{CatalogApi, ClientError, HttpCatalogApi};
pub use view::CatalogView;
