pub mod evaluator;
pub mod parser;

pub use evaluator::derive_view;
pub use parser::parse_filter;
