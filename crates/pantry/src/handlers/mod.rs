pub mod error;
pub mod flash;
pub mod form;
pub mod health;
pub mod items;
pub mod pages;
pub mod search;

pub use error::AppError;
