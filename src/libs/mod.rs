//! Core library modules for the blokk application.
//!
//! Serves as the main entry point for all blokk library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Block Management**: Time block model, parsing and validation
//! - **Weekly Analysis**: Pure aggregation of block collections into statistics
//! - **User Interface**: Console rendering, data export, formatting

pub mod block;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod storage;
pub mod view;
pub mod week;
