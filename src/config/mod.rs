use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

pub(crate) const DEFAULT_FORBIDDEN_LABEL: &str = "Forbidden to like!";

/// Runtime settings injected by the page template through `window.ENV`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    /// Backend origin. Empty means same-origin.
    pub api_url: String,
    /// Surface transport failures to the user instead of only logging them.
    pub notify_on_network_error: bool,
    /// Label a like button takes after the backend rejects a like.
    pub forbidden_label: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::resolve(read_window_env)
    }

    /// Build a config from a key lookup.
    ///
    /// Each setting accepts its UPPER_SNAKE key first, then its alias.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let first = |keys: &[&str]| keys.iter().find_map(|k| lookup(*k));

        let api_url = first(&["API_URL", "api_url"]).unwrap_or_default();

        let notify_on_network_error = first(&["NOTIFY_ON_NETWORK_ERROR", "notifyOnNetworkError"])
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        let forbidden_label = first(&["FORBIDDEN_LABEL", "forbiddenLabel"])
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FORBIDDEN_LABEL.to_string());

        Self {
            api_url,
            notify_on_network_error,
            forbidden_label,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::resolve(|_| None)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn read_window_env(key: &str) -> Option<String> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    let value: JsValue = js_sys::Reflect::get(&env, &key.into()).ok()?;
    if let Some(s) = value.as_string() {
        return Some(s);
    }
    value.as_bool().map(|b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_when_env_missing() {
        let cfg = EnvConfig::default();
        assert_eq!(cfg.api_url, "");
        assert!(!cfg.notify_on_network_error);
        assert_eq!(cfg.forbidden_label, "Forbidden to like!");
    }

    #[test]
    fn test_upper_snake_keys_win_over_aliases() {
        let cfg = EnvConfig::resolve(lookup_from(&[
            ("API_URL", "http://books.local"),
            ("api_url", "http://ignored"),
        ]));
        assert_eq!(cfg.api_url, "http://books.local");
    }

    #[test]
    fn test_alias_keys_are_accepted() {
        let cfg = EnvConfig::resolve(lookup_from(&[
            ("api_url", "http://alias"),
            ("notifyOnNetworkError", "true"),
            ("forbiddenLabel", "Already liked"),
        ]));
        assert_eq!(cfg.api_url, "http://alias");
        assert!(cfg.notify_on_network_error);
        assert_eq!(cfg.forbidden_label, "Already liked");
    }

    #[test]
    fn test_notify_flag_parsing() {
        let on = EnvConfig::resolve(lookup_from(&[("NOTIFY_ON_NETWORK_ERROR", "1")]));
        assert!(on.notify_on_network_error);

        let junk = EnvConfig::resolve(lookup_from(&[("NOTIFY_ON_NETWORK_ERROR", "maybe")]));
        assert!(!junk.notify_on_network_error);
    }

    #[test]
    fn test_blank_forbidden_label_falls_back() {
        let cfg = EnvConfig::resolve(lookup_from(&[("FORBIDDEN_LABEL", "  ")]));
        assert_eq!(cfg.forbidden_label, DEFAULT_FORBIDDEN_LABEL);
    }
}
