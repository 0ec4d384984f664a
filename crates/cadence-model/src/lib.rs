pub mod badge;
pub mod entry;
pub mod user;
