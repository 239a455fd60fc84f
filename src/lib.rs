//! Formula One season browser: season data loading and caching, sortable
//! result tables, detail overlays and favorites, rendered with Yew.

pub mod cache;
pub mod components;
pub mod config;
pub mod details;
pub mod error;
pub mod favorites;
pub mod gateway;
pub mod hooks;
pub mod loader;
pub mod models;
pub mod storage;
pub mod table;
pub mod utils;

pub use error::{AppError, Result};
pub use models::{Season, SeasonData};
