mod parser;
mod token;

pub use parser::parse;
