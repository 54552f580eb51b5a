use std::path::PathBuf;

use secrecy::Secret;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub session: SessionSettings,
    pub admin: AdminSettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Clone)]
pub struct StorageSettings {
    /// Directory holding admin.json and clients.json.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Scratch directory for staged uploads.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,
}

#[derive(Deserialize, Clone)]
pub struct SessionSettings {
    /// Sessions expire after this many hours of inactivity.
    #[serde(default = "default_expiry_hours")]
    pub expiry_hours: i64,
}

/// Bootstrap credentials written to admin.json on first start.
/// After that the file is the source of truth; edit it by hand to rotate.
#[derive(Deserialize, Clone)]
pub struct AdminSettings {
    #[serde(default = "default_admin_username")]
    pub username: String,
    pub password: Secret<String>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_staging_dir() -> PathBuf {
    PathBuf::from("temp")
}

fn default_expiry_hours() -> i64 {
    24
}

fn default_admin_username() -> String {
    "admin".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in social-console directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("social-console") {
        base_path.join("config")
    } else {
        base_path.join("social-console").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
