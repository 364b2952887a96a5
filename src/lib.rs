pub mod config;
pub mod data;
pub mod monitoring;
pub mod pipeline;
pub mod ranking;
pub mod schedule;
