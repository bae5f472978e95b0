// Runtime configuration, read from the environment (and `.env` when present)

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_DATA_DIR: &str = "data/nexus.sled";
pub const DEFAULT_CATALOG_SEED: u64 = 17;
pub const DEFAULT_STARTING_BALANCE: Decimal = dec!(1000);

#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Address the local API listens on
    pub bind_addr: SocketAddr,
    /// sled database directory
    pub data_dir: PathBuf,
    /// Seed for catalog generation; keeps generated template ids stable
    pub catalog_seed: u64,
    /// Balance of a fresh wallet, internal units
    pub starting_balance: Decimal,
    /// Write the ledger to disk after every mutation
    pub persist: bool,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 1234)),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_seed: DEFAULT_CATALOG_SEED,
            starting_balance: DEFAULT_STARTING_BALANCE,
            persist: true,
        }
    }
}

impl MarketConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();

        Self {
            bind_addr: env_or("NEXUS_BIND_ADDR", defaults.bind_addr),
            data_dir: std::env::var("NEXUS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            catalog_seed: env_or("NEXUS_CATALOG_SEED", defaults.catalog_seed),
            starting_balance: env_or("NEXUS_STARTING_BALANCE", defaults.starting_balance),
            persist: env_or("NEXUS_PERSIST", Flag(defaults.persist)).0,
        }
    }

    /// In-memory configuration for tests and demos
    pub fn ephemeral() -> Self {
        Self {
            persist: false,
            ..Self::default()
        }
    }
}

/// On/off env value. Anything unrecognised fails to parse, so `env_or`
/// warns and keeps the default instead of silently reading it as off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Flag(bool);

impl FromStr for Flag {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Flag(true)),
            "false" | "0" | "no" | "off" => Ok(Flag(false)),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, value = %raw, fallback = %default, "invalid config value, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarketConfig::default();
        assert_eq!(config.bind_addr.port(), 1234);
        assert_eq!(config.starting_balance, dec!(1000));
        assert!(config.persist);
        assert!(!MarketConfig::ephemeral().persist);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!("TRUE".parse::<Flag>(), Ok(Flag(true)));
        assert_eq!("1".parse::<Flag>(), Ok(Flag(true)));
        assert_eq!("false".parse::<Flag>(), Ok(Flag(false)));
        assert_eq!(" Off ".parse::<Flag>(), Ok(Flag(false)));
        assert!("treu".parse::<Flag>().is_err());
    }

    #[test]
    fn test_misspelled_flag_keeps_default() {
        std::env::set_var("NEXUS_TEST_FLAG_TYPO", "treu");
        assert!(env_or("NEXUS_TEST_FLAG_TYPO", Flag(true)).0);
        std::env::set_var("NEXUS_TEST_FLAG_OFF", "no");
        assert!(!env_or("NEXUS_TEST_FLAG_OFF", Flag(true)).0);
    }

    #[test]
    fn test_env_or_falls_back_on_garbage() {
        std::env::set_var("NEXUS_TEST_SEED_GARBAGE", "not-a-number");
        assert_eq!(env_or("NEXUS_TEST_SEED_GARBAGE", 42u64), 42);
        std::env::set_var("NEXUS_TEST_SEED_OK", "7");
        assert_eq!(env_or("NEXUS_TEST_SEED_OK", 42u64), 7);
    }
}
