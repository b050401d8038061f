pub mod cli;
pub mod components;
pub mod generate;
pub mod graph;
pub mod parse;
