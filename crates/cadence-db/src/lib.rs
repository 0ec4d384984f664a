pub mod entry;
pub mod schema;
pub mod user;
pub mod util;

pub use sea_orm;
