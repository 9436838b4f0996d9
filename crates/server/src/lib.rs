#[cfg(feature = "server")]
pub mod db;

pub mod api;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod cursor;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod repo;

#[cfg(feature = "server")]
pub mod search;
