mod entities;
mod error;
mod request;
mod response;
mod result_state;

pub use entities::*;
pub use error::*;
pub use request::*;
pub use response::*;
pub use result_state::*;
