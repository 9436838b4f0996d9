mod component;

pub use component::*;
