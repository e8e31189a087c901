mod data_source_remote;
mod repository_default;
mod transport_newsapi;

pub use data_source_remote::*;
pub use repository_default::*;
pub use transport_newsapi::*;
