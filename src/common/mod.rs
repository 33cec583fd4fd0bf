pub mod errors;
pub mod simple_types;
