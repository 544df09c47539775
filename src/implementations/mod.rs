pub mod agent;
pub mod aggregation;
pub mod config;
pub mod frames;
pub mod parsing;
pub mod providers;
