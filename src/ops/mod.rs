pub mod bucket;
pub mod group;
pub mod join;
pub mod sort;
