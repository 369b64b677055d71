use std::fmt;

use crate::server::error::config::ConfigError;

static DEFAULT_PORT: u16 = 8080;
static DEFAULT_CORS_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,http://127.0.0.1:5173";

/// Which database the server connected to, chosen by which URL variable was set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEnv {
    Prod,
    Local,
}

impl fmt::Display for DatabaseEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Prod => write!(f, "PROD"),
            Self::Local => write!(f, "LOCAL"),
        }
    }
}

pub struct Config {
    pub database_url: String,
    pub database_env: DatabaseEnv,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable source
    ///
    /// `PROD_DATABASE_URL` takes precedence over `DATABASE_URL`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let (database_url, database_env) = if let Some(url) = lookup("PROD_DATABASE_URL") {
            (url, DatabaseEnv::Prod)
        } else if let Some(url) = lookup("DATABASE_URL") {
            (url, DatabaseEnv::Local)
        } else {
            return Err(ConfigError::MissingEnvVar(
                "DATABASE_URL or PROD_DATABASE_URL".to_string(),
            ));
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PORT".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url,
            database_env,
            port,
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
