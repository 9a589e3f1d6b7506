pub mod config;
pub mod mvi;
pub mod todo;
pub mod trace;
pub mod ui;
