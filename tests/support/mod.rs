pub mod book;
pub mod market;
