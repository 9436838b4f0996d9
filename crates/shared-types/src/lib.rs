pub mod common;
pub mod error;
pub mod models;
pub mod team;

pub use common::*;
pub use error::*;
pub use models::*;
pub use team::*;
