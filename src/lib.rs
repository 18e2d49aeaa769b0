pub mod analyzers;
pub mod chart;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod marks;
pub mod menu;
pub mod output;
pub mod roster;
pub mod sheet;
pub mod table;
