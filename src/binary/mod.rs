pub mod errors;
pub mod scalars;
pub mod triplets;
