use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Deployment-provided overrides. Either of the optional globals
/// `window.__CAMPUS_ENV` or `window.__CAMPUS_CONFIG` may carry a subset of
/// these fields; anything missing falls back to the compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub portal_name: Option<String>,
    pub session_key: Option<String>,
}

const DEFAULT_PORTAL_NAME: &str = "Campus Affairs";
const DEFAULT_SESSION_KEY: &str = "campus_affairs.session";

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let win = web_sys::window()?;
    let any = js_sys::Reflect::get(&win, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?;
    serde_json::from_str(&String::from(json)).ok()
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    // env.js takes precedence over the static config object.
    read_global("__CAMPUS_ENV")
        .or_else(|| read_global("__CAMPUS_CONFIG"))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

fn config() -> &'static RuntimeConfig {
    CONFIG.get_or_init(snapshot_from_globals)
}

pub fn portal_name() -> String {
    config()
        .portal_name
        .clone()
        .unwrap_or_else(|| DEFAULT_PORTAL_NAME.to_string())
}

/// localStorage key under which the session provider stores the principal.
pub fn session_key() -> String {
    config()
        .session_key
        .clone()
        .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string())
}
