//! Runtime configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings needed to wire a [`crate::DuelService`] and its advisor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding persisted duels.
    pub data_dir: PathBuf,
    /// Rule table to load instead of the bundled one.
    pub rules_path: Option<PathBuf>,
    /// Upper bound on how long the advisory provider may take.
    pub advisory_timeout: Duration,
    /// Whether advice is requested at all.
    pub enable_advisory: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            rules_path: None,
            advisory_timeout: Duration::from_millis(Self::DEFAULT_ADVISORY_TIMEOUT_MS),
            enable_advisory: true,
        }
    }
}

impl RuntimeConfig {
    pub const DEFAULT_ADVISORY_TIMEOUT_MS: u64 = 2_000;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_DATA_DIR` - Directory for saved duels (default: platform-specific)
    /// - `DUEL_RULES` - Path to a TOML rule table (default: bundled rules)
    /// - `DUEL_ADVISORY_TIMEOUT_MS` - Advisory deadline in milliseconds (default: 2000)
    /// - `DUEL_ADVISORY` - Set to `false` to turn advice off (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("DUEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.rules_path = env::var("DUEL_RULES").ok().map(PathBuf::from);

        if let Some(ms) = read_env::<u64>("DUEL_ADVISORY_TIMEOUT_MS") {
            config.advisory_timeout = Duration::from_millis(ms.max(1));
        }

        if let Some(enable) = read_env::<bool>("DUEL_ADVISORY") {
            config.enable_advisory = enable;
        }

        config
    }
}

/// Platform data directory, or `./duel_data` when none can be determined.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "duel")
        .map(|dirs| dirs.data_dir().join("duels"))
        .unwrap_or_else(|| PathBuf::from("./duel_data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
