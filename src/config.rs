use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absent means run on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub app_name: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a number")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".into())
                .parse()
                .context("PORT must be a number")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Mood Journal".into()),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            db_max_connections: 5,
            host: "127.0.0.1".into(),
            port: 8000,
            frontend_url: "http://localhost:3000".into(),
            app_name: "Mood Journal".into(),
        }
    }
}
