//! Client configuration.
//!
//! Configuration is an explicit struct the caller constructs once and passes
//! down; the library keeps no global state. `from_env` supports the `HA_`
//! environment variable convention for deployments that configure the client
//! from the process environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default location of HAProxy's admin socket.
pub const DEFAULT_SOCKET_PATH: &str = "/run/haproxy/admin.sock";

/// Default timeout covering the whole socket lifetime of one command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

/// Settings for reaching the HAProxy admin socket.
#[derive(Clone, Debug)]
pub struct SocketConfig {
    /// Filesystem path of the Unix admin socket.
    pub path: PathBuf,
    /// Timeout applied to each command's socket exchange.
    pub timeout: Duration,
    /// Trace each outgoing command at debug level.
    pub verbose: bool,
}

impl Default for SocketConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SOCKET_PATH),
            timeout: DEFAULT_TIMEOUT,
            verbose: false,
        }
    }
}

impl SocketConfig {
    /// Configuration for a socket at `path`, with default timeout and no
    /// verbose tracing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Load configuration from the environment.
    ///
    /// * `HA_SOCK_FILE` — socket path.
    /// * `HA_SOCK_TIMEOUT` — timeout in seconds, as a float.
    /// * `HA_DEBUG` — truthy values are `true`, `yes`, `y`, `on`, `1`
    ///   (case-insensitive).
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("HA_SOCK_FILE") {
            config.path = PathBuf::from(path);
        }
        if let Some(secs) = env::var("HA_SOCK_TIMEOUT")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
        {
            if secs.is_finite() && secs > 0.0 {
                config.timeout = Duration::from_secs_f64(secs);
            }
        }
        if let Ok(flag) = env::var("HA_DEBUG") {
            config.verbose = truthy(&flag);
        }

        config
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "on" | "1"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_haproxy_conventions() {
        let config = SocketConfig::default();
        assert_eq!(config.path, PathBuf::from("/run/haproxy/admin.sock"));
        assert_eq!(config.timeout, Duration::from_millis(200));
        assert!(!config.verbose);
    }

    #[test]
    fn builder_style_overrides() {
        let config = SocketConfig::new("/tmp/haproxy.sock")
            .timeout(Duration::from_secs(1))
            .verbose(true);
        assert_eq!(config.path, PathBuf::from("/tmp/haproxy.sock"));
        assert_eq!(config.timeout, Duration::from_secs(1));
        assert!(config.verbose);
    }

    // Kept as a single test because the process environment is shared
    // between test threads.
    #[test]
    fn from_env_reads_overrides() {
        env::set_var("HA_SOCK_FILE", "/tmp/env.sock");
        env::set_var("HA_SOCK_TIMEOUT", "1.5");
        env::set_var("HA_DEBUG", "yes");
        let overridden = SocketConfig::from_env();

        env::set_var("HA_SOCK_TIMEOUT", "not-a-number");
        env::set_var("HA_DEBUG", "off");
        let fallback = SocketConfig::from_env();

        env::remove_var("HA_SOCK_FILE");
        env::remove_var("HA_SOCK_TIMEOUT");
        env::remove_var("HA_DEBUG");

        assert_eq!(overridden.path, PathBuf::from("/tmp/env.sock"));
        assert_eq!(overridden.timeout, Duration::from_millis(1500));
        assert!(overridden.verbose);

        assert_eq!(fallback.timeout, DEFAULT_TIMEOUT);
        assert!(!fallback.verbose);
    }

    #[test]
    fn truthy_accepts_known_values_only() {
        for value in ["true", "YES", "y", "On", "1"] {
            assert!(truthy(value), "{} should be truthy", value);
        }
        for value in ["false", "0", "off", "2", ""] {
            assert!(!truthy(value), "{} should not be truthy", value);
        }
    }
}
