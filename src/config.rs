//! Build-Time Configuration
//!
//! The client has no runtime configuration; everything here is fixed
//! when the bundle is compiled.

/// Backend origin, overridable with `LIBRARY_SERVER_URL` at build time
pub const SERVER_URL: &str = match option_env!("LIBRARY_SERVER_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "access_token";

/// How long login/signup errors stay visible
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;
