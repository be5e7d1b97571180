pub mod generator;
pub mod reader;
pub mod writer;
