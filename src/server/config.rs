use std::{net::SocketAddr, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:8089";
const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_SMTP_PORT: u16 = 1025;
const DEFAULT_MAIL_FROM: &str = "reservations@localhost";
const DEFAULT_STATIC_DIR: &str = "./static";

pub struct Config {
    pub database_url: String,
    pub app_address: SocketAddr,

    /// Marks session cookies `Secure`.
    pub in_production: bool,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub mail_from: String,
    pub owner_email: String,

    pub static_dir: String,

    /// Credentials of the staff user created when the user table is empty.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let mail_from = optional("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string());

        let app_address = match parsed("APP_ADDRESS")? {
            Some(address) => address,
            None => default_address()?,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_address,
            in_production: parsed("IN_PRODUCTION")?.unwrap_or(false),
            smtp_host: optional("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: parsed("SMTP_PORT")?.unwrap_or(DEFAULT_SMTP_PORT),
            owner_email: optional("OWNER_EMAIL").unwrap_or_else(|| mail_from.clone()),
            mail_from,
            static_dir: optional("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Some(value) = optional(name) else {
        return Ok(None);
    };

    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}

fn default_address() -> Result<SocketAddr, ConfigError> {
    DEFAULT_APP_ADDRESS
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_ADDRESS".to_string(),
            value: DEFAULT_APP_ADDRESS.to_string(),
        })
}
