pub mod core;
pub mod report;
pub mod rooms;
pub mod stats;
pub mod status;
pub mod students;
