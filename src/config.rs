use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub db_max_connections: u32,
    pub cache_enabled: bool,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("USERS_API_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid USERS_API_HOST: {e}"))?;

        let port: u16 = env_or("USERS_API_PORT", "8081")
            .parse()
            .map_err(|e| format!("Invalid USERS_API_PORT: {e}"))?;

        let db_max_connections: u32 = env_or("USERS_API_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid USERS_API_DB_MAX_CONNECTIONS: {e}"))?;

        let cache_enabled = parse_bool("USERS_API_CACHE_ENABLED", &env_or("USERS_API_CACHE_ENABLED", "true"))?;

        let log_level = env_or("USERS_API_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            db_max_connections,
            cache_enabled,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("Invalid {key}: expected a boolean, got '{other}'")),
    }
}
