use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Database {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
    pub max_connections: u32,
}

impl Database {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

impl Default for Database {
    fn default() -> Self {
        Self {
            user: "root".into(),
            password: "root".into(),
            host: "localhost".into(),
            port: 5432,
            database: "event_db".into(),
            max_connections: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
}

impl Server {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            static_dir: "static".into(),
        }
    }
}

/// The single administrator account of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub username: String,
    pub password: String,
}

impl Default for Admin {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "admin".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Inactivity period after which a session expires.
    pub expiry_secs: i64,
    pub secure: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            expiry_secs: 60 * 60 * 24 * 7,
            secure: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub database: Database,
    pub server: Server,
    pub admin: Admin,
    pub session: Session,
}

impl Settings {
    /// Load settings for one app: built-in defaults, then `config/<app>.toml`,
    /// then `EVENTS_<SECTION>__<KEY>` environment variables.
    pub fn new(app: &str, default_port: u16) -> Result<Self, ConfigError> {
        let mut defaults = Settings::default();
        defaults.server.port = default_port;

        let config = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(
                File::with_name(&format!("config/{app}"))
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("EVENTS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
