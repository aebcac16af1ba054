/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `API_PORT`.
    pub api_port: u16,
    /// HMAC secret for signing session JWTs.
    pub jwt_secret: String,
    /// Session token lifetime in seconds (default 3600). Env var: `SESSION_TTL_SECS`.
    pub session_ttl_secs: u64,
    /// Set the Secure flag on the session cookie (default false; turn on in
    /// production). Env var: `COOKIE_SECURE`.
    pub cookie_secure: bool,
    /// Comma-separated CORS origins. Empty means no CORS layer. Env var:
    /// `ALLOWED_ORIGINS`.
    pub allowed_origins: Vec<String>,
    /// Directory with the built frontend. When set, unmatched non-API paths
    /// serve files from it with an SPA fallback. Env var: `STATIC_DIR`.
    pub static_dir: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            session_ttl_secs: std::env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            cookie_secure: std::env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|v| {
                    v.split(',')
                        .map(|s| s.trim().to_owned())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            static_dir: std::env::var("STATIC_DIR").ok(),
        }
    }
}
