pub mod interpreter;
pub mod statistics;
