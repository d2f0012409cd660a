use std::net::IpAddr;

use anyhow::Context;
use bcrypt::DEFAULT_COST;

/// Runtime configuration loaded from environment variables (and `.env`).
///
/// | Env Var        | Default            |
/// |----------------|--------------------|
/// | `DATABASE_URL` | `sqlite::memory:`  |
/// | `HOST`         | `127.0.0.1`        |
/// | `PORT`         | `8080`             |
/// | `BCRYPT_COST`  | bcrypt default     |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

        let host = std::env::var("HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string())
            .parse::<IpAddr>()
            .context("HOST must be a valid IP address")?;

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid u16")?;

        let bcrypt_cost = match std::env::var("BCRYPT_COST") {
            Ok(v) => v.parse::<u32>().context("BCRYPT_COST must be a number")?,
            Err(_) => DEFAULT_COST,
        };

        Ok(Self {
            database_url,
            host,
            port,
            bcrypt_cost,
        })
    }
}
