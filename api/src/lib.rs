//! # API crate — HTTP client for the Daybook backend
//!
//! Every call the browser makes to the backend goes through this crate. The
//! backend owns accounts and per-user profile documents; the client speaks
//! plain JSON to it and lets an HTTP-only cookie carry the session.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | Base URL resolution, including the per-browser `daybook_api_url` override |
//! | [`auth`] | Session endpoints: who is signed in, sign-in, registration, sign-out |
//! | [`users`] | Profile document updates, currently the preferred color scheme |
//!
//! Request functions are compiled twice: the wasm build speaks HTTP via
//! `gloo-net`, every other target gets a stub so shared code typechecks on
//! the host.

pub mod auth;
pub mod client;
mod error;
pub mod users;

pub use client::{get_api_base, set_api_base, DEFAULT_API_BASE};
pub use error::ApiError;
pub use store::{SessionRecord, ThemeName};
