pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod export;
pub mod goal;
pub mod list;
pub mod log;
