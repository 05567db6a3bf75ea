//! Terminal browser and one-shot commands for the Star Wars film catalog.
#![allow(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;
pub mod view;
