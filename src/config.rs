//! Environment profiles: database target and debug flags per deployment.

use std::fmt;
use std::str::FromStr;

/// Deployment environment, selected once at startup via `TODO_ENV`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Env {
    Dev,
    Test,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Env::Dev),
            "test" => Ok(Env::Test),
            "prod" => Ok(Env::Prod),
            other => Err(format!("unknown environment '{other}', expected dev|test|prod")),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Env::Dev => "dev",
            Env::Test => "test",
            Env::Prod => "prod",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug)]
pub struct DbSettings {
    pub db: String,
    pub host: String,
    pub port: u16,
}

impl DbSettings {
    /// Connection string for the driver. `MONGODB_URI` overrides host/port.
    pub fn uri(&self) -> String {
        std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| format!("mongodb://{}:{}", self.host, self.port))
    }
}

/// Explicit configuration value passed into application construction;
/// never read from mutable global state after startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub env: Env,
    pub debug: bool,
    pub db: DbSettings,
}

impl AppConfig {
    pub fn for_env(env: Env) -> Self {
        match env {
            Env::Dev => AppConfig {
                env,
                debug: true,
                db: DbSettings {
                    db: "todo".into(),
                    host: "localhost".into(),
                    port: 27017,
                },
            },
            Env::Test => AppConfig {
                env,
                debug: true,
                db: DbSettings {
                    db: "todotest".into(),
                    host: "localhost".into(),
                    port: 27017,
                },
            },
            Env::Prod => AppConfig {
                env,
                debug: false,
                db: DbSettings {
                    db: "todo".into(),
                    host: "localhost".into(),
                    port: 27017,
                },
            },
        }
    }

    /// Resolve from `TODO_ENV`, defaulting to the dev profile.
    pub fn from_env() -> Result<Self, String> {
        let name = std::env::var("TODO_ENV").unwrap_or_else(|_| "dev".into());
        Ok(Self::for_env(name.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parses_known_names() {
        assert_eq!("dev".parse::<Env>().unwrap(), Env::Dev);
        assert_eq!("test".parse::<Env>().unwrap(), Env::Test);
        assert_eq!("prod".parse::<Env>().unwrap(), Env::Prod);
        assert!("staging".parse::<Env>().is_err());
    }

    #[test]
    fn test_profile_uses_its_own_database() {
        let config = AppConfig::for_env(Env::Test);
        assert!(config.debug);
        assert_eq!(config.db.db, "todotest");
    }

    #[test]
    fn prod_profile_disables_debug() {
        let config = AppConfig::for_env(Env::Prod);
        assert!(!config.debug);
        assert_eq!(config.db.db, "todo");
    }
}
