pub mod api;
pub mod cli;
pub mod coach;
pub mod core;
