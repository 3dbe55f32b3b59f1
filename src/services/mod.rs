pub mod registry;
pub mod seed;
