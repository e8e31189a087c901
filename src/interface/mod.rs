mod data_source;
mod repository;

pub use data_source::*;
pub use repository::*;
