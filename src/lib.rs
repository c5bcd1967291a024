pub mod app;
pub mod clock;
pub mod config;
pub mod date_window;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::AppConfig;
pub use db::{EntryStore, Store};
pub use state::AppState;
