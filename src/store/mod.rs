pub mod dataset;
pub mod index;
