pub mod archive;
pub mod catalog;
pub mod generate;
pub mod open;
pub mod session;
