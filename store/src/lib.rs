pub mod models;
pub mod session_cache;

pub use models::{SessionRecord, ThemeName};
pub use session_cache::CacheError;
