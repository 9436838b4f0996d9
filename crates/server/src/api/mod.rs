mod team;
pub use team::*;

mod user;
pub use user::*;
