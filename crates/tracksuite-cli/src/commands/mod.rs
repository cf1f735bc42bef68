pub mod fitness;
pub mod quiz;
