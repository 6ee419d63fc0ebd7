//! Application configuration loaded from environment variables.

use std::fmt;

use anyhow::Context;

/// Default `Cache-Control: max-age` for rendered profile pages, in seconds.
pub const DEFAULT_CACHE_MAX_AGE: u32 = 300;

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Profile store endpoint (Supabase project URL, no trailing slash).
    pub store_url: String,

    /// Profile store credential (service role key).
    pub store_key: String,

    /// Freshness hint for shared caches, in seconds.
    pub cache_max_age: u32,

    /// Site name shown in the page footer.
    pub site_name: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bind_addr", &self.bind_addr)
            .field("store_url", &self.store_url)
            .field("store_key", &"<redacted>")
            .field("cache_max_age", &self.cache_max_age)
            .field("site_name", &self.site_name)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`: Profile store endpoint
    /// - `SUPABASE_SERVICE_ROLE_KEY`: Profile store credential
    ///
    /// Optional:
    /// - `PROFILE_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `PROFILE_CACHE_MAX_AGE`: Cache-Control max-age in seconds (default: 300)
    /// - `PROFILE_SITE_NAME`: Footer site name (default: "BNI Chapter Hub")
    pub fn from_env() -> anyhow::Result<Self> {
        let store_url = required_var("SUPABASE_URL")?
            .trim_end_matches('/')
            .to_string();

        let store_key = required_var("SUPABASE_SERVICE_ROLE_KEY")?;

        let bind_addr =
            std::env::var("PROFILE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let cache_max_age = match std::env::var("PROFILE_CACHE_MAX_AGE") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("PROFILE_CACHE_MAX_AGE is not a number: {raw:?}"))?,
            Err(_) => DEFAULT_CACHE_MAX_AGE,
        };

        let site_name =
            std::env::var("PROFILE_SITE_NAME").unwrap_or_else(|_| "BNI Chapter Hub".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            store_url = %store_url,
            cache_max_age,
            site_name = %site_name,
            "profile configuration loaded"
        );

        Ok(Self {
            bind_addr,
            store_url,
            store_key,
            cache_max_age,
            site_name,
        })
    }
}

/// Read a variable that must be present and non-empty.
fn required_var(key: &str) -> anyhow::Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(_) => anyhow::bail!("{key} is set but empty"),
        Err(_) => anyhow::bail!("{key} must be set"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "SUPABASE_URL",
        "SUPABASE_SERVICE_ROLE_KEY",
        "PROFILE_BIND_ADDR",
        "PROFILE_CACHE_MAX_AGE",
        "PROFILE_SITE_NAME",
    ];

    const REQUIRED: &[(&str, &str)] = &[
        ("SUPABASE_URL", "https://abc.supabase.co"),
        ("SUPABASE_SERVICE_ROLE_KEY", "service-key"),
    ];

    /// Helper to run config tests with isolated env vars.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(REQUIRED, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.store_url, "https://abc.supabase.co");
            assert_eq!(config.store_key, "service-key");
            assert_eq!(config.cache_max_age, DEFAULT_CACHE_MAX_AGE);
            assert_eq!(config.site_name, "BNI Chapter Hub");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("SUPABASE_URL", "https://xyz.supabase.co/"),
                ("SUPABASE_SERVICE_ROLE_KEY", "other-key"),
                ("PROFILE_BIND_ADDR", "127.0.0.1:9090"),
                ("PROFILE_CACHE_MAX_AGE", "120"),
                ("PROFILE_SITE_NAME", "Chapter Hub"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "127.0.0.1:9090");
                assert_eq!(config.store_url, "https://xyz.supabase.co");
                assert_eq!(config.cache_max_age, 120);
                assert_eq!(config.site_name, "Chapter Hub");
            },
        );
    }

    #[test]
    fn config_missing_store_url_is_fatal() {
        with_env_vars(&[("SUPABASE_SERVICE_ROLE_KEY", "k")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("SUPABASE_URL"));
        });
    }

    #[test]
    fn config_missing_store_key_is_fatal() {
        with_env_vars(&[("SUPABASE_URL", "https://abc.supabase.co")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("SUPABASE_SERVICE_ROLE_KEY"));
        });
    }

    #[test]
    fn config_empty_store_key_is_fatal() {
        with_env_vars(
            &[
                ("SUPABASE_URL", "https://abc.supabase.co"),
                ("SUPABASE_SERVICE_ROLE_KEY", "  "),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn config_invalid_max_age_rejected() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PROFILE_CACHE_MAX_AGE", "five minutes"));
        with_env_vars(&vars, || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PROFILE_CACHE_MAX_AGE"));
        });
    }

    #[test]
    fn config_debug_redacts_key() {
        with_env_vars(REQUIRED, || {
            let config = Config::from_env().unwrap();
            let debug = format!("{config:?}");
            assert!(!debug.contains("service-key"));
            assert!(debug.contains("<redacted>"));
        });
    }
}
