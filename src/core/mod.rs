pub mod alerts;
pub mod backup;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod dataset;
pub mod generator;
pub mod heatmap;
pub mod log;
pub mod logs;
pub mod profile;
pub mod qr;
pub mod risk;
