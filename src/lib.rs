pub mod app;
pub mod cli;
pub mod config;
pub mod ctrl;
pub mod data;
pub mod editor;
pub mod print;
pub mod tui;
pub mod util;
pub mod view;
