pub mod types;
pub mod board;
