pub mod app;
pub mod cli;
pub mod config;
pub mod dialog;
pub mod domain;
pub mod error;
pub mod services;
pub mod surface;

pub use app::App;
pub use cli::Cli;
pub use config::Config;
pub use dialog::{Dialog, Event, Flow};
pub use error::{Error, Result};
