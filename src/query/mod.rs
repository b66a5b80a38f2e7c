pub mod constructors;
pub mod drivers;
pub mod response;
pub mod seasons;
pub mod stats;
