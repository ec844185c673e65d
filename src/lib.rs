// src/lib.rs
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod storage;
pub mod templates;
pub mod utils;

pub use config::{Config, TagSettings};
pub use error::{Result, TagError};
pub use models::{ListStyle, RenderOptions, Tag, TagName, WeightedTag};
pub use templates::TagRenderer;
pub use utils::color::{background_color, foreground_color, ColorHex};
pub use utils::links::LinkContext;

use storage::catalog::TagCatalog;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: TagCatalog,
}
