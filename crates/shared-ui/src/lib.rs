pub mod components;
pub mod timing;

pub use components::*;
