use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
    pub server_selection_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub admin_username: String,
    pub admin_password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            _ => Environment::Development,
        };

        // Environment defaults first, then specific env var overrides
        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("CATALOG_API_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        if let Ok(v) = env::var("CATALOG_DB_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("CATALOG_DB_NAME") {
            self.database.database = v;
        }
        if let Ok(v) = env::var("CATALOG_DB_COLLECTION") {
            self.database.collection = v;
        }
        if let Ok(v) = env::var("CATALOG_DB_TIMEOUT_SECS") {
            self.database.server_selection_timeout_secs =
                v.parse().unwrap_or(self.database.server_selection_timeout_secs);
        }

        if let Ok(v) = env::var("CATALOG_JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("CATALOG_JWT_EXPIRY_HOURS") {
            self.security.jwt_expiry_hours = v.parse().unwrap_or(self.security.jwt_expiry_hours);
        }
        if let Ok(v) = env::var("CATALOG_ADMIN_USERNAME") {
            self.security.admin_username = v;
        }
        if let Ok(v) = env::var("CATALOG_ADMIN_PASSWORD") {
            self.security.admin_password = v;
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 5000 },
            database: DatabaseConfig {
                url: "mongodb://localhost:27017".to_string(),
                database: "catalog".to_string(),
                collection: "products".to_string(),
                server_selection_timeout_secs: 30,
            },
            security: SecurityConfig {
                jwt_secret: "dev-secret-change-me".to_string(),
                jwt_expiry_hours: 24,
                admin_username: "admin".to_string(),
                admin_password: "admin".to_string(),
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 5000 },
            database: DatabaseConfig {
                url: "mongodb://localhost:27017".to_string(),
                database: "catalog".to_string(),
                collection: "products".to_string(),
                server_selection_timeout_secs: 5,
            },
            // Secrets and credentials must come from the environment in
            // production; token generation refuses an empty secret.
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_hours: 24,
                admin_username: String::new(),
                admin_password: String::new(),
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
