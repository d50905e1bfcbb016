pub mod assess;
pub mod catalog;
pub mod config;
pub mod land;
pub mod output;
pub mod scoring;
pub mod tui;
