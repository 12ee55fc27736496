use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub member_cache_ttl_seconds: u64,
    pub authorization_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("ORPHEO_DATABASE")
                .unwrap_or_else(|_| "orpheo".to_string()),
            member_cache_ttl_seconds: std::env::var("MEMBER_CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            authorization_enabled: std::env::var("ORPHEO_AUTHORIZATION_ENABLED")
                .map(|value| !matches!(value.trim().to_lowercase().as_str(), "false" | "0" | "no"))
                .unwrap_or(true),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }

    pub fn member_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.member_cache_ttl_seconds)
    }
}
