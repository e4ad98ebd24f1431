pub mod context;
pub mod evaluator;
