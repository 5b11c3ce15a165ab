//! Backend endpoint configuration.
//!
//! The compiled default can be overridden per browser by writing a URL under
//! the `daybook_api_url` localStorage key, which is how a single installation
//! gets pointed at a staging backend without a rebuild.

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

/// localStorage key for the per-browser base URL override.
pub const API_BASE_KEY: &str = "daybook_api_url";

/// The API base URL, override first, never with a trailing slash.
pub fn get_api_base() -> String {
    let url = stored_override().unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base(&url)
}

/// Store a per-browser base URL override.
pub fn set_api_base(url: &str) {
    store_override(url);
}

fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(target_arch = "wasm32")]
fn stored_override() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(API_BASE_KEY).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn store_override(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn override_cell() -> &'static std::sync::Mutex<Option<String>> {
    static CELL: std::sync::OnceLock<std::sync::Mutex<Option<String>>> = std::sync::OnceLock::new();
    CELL.get_or_init(|| std::sync::Mutex::new(None))
}

#[cfg(not(target_arch = "wasm32"))]
fn stored_override() -> Option<String> {
    override_cell().lock().unwrap().clone()
}

#[cfg(not(target_arch = "wasm32"))]
fn store_override(url: &str) {
    *override_cell().lock().unwrap() = Some(url.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_strips_trailing_slashes() {
        assert_eq!(normalize_base("http://x/api/"), "http://x/api");
        assert_eq!(normalize_base("http://x/api//"), "http://x/api");
        assert_eq!(normalize_base("http://x/api"), "http://x/api");
    }

    // One test owns the override cell: it is process-global on this target.
    #[test]
    fn test_api_base_override_round_trip() {
        assert_eq!(get_api_base(), DEFAULT_API_BASE);

        set_api_base("http://staging.internal:9000/api/v2/");
        assert_eq!(get_api_base(), "http://staging.internal:9000/api/v2");
    }
}
