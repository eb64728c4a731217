pub mod error;
pub mod request;
pub mod scope;

pub use error::*;
pub use request::*;
pub use scope::*;
