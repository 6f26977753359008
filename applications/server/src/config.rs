/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_media")]
    pub media: MediaSettings,

    #[serde(default = "default_upload")]
    pub upload: UploadSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

/// Settings for the external media store that holds uploaded audio files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaSettings {
    /// Base URL of the media store API
    #[serde(default = "default_media_api_base")]
    pub api_base: String,

    /// Publishable key, paired with the URL endpoint for delivery-side use
    #[serde(default)]
    pub public_key: String,

    /// API key used to authenticate uploads and deletes
    #[serde(default)]
    pub private_key: String,

    /// Folder uploaded files are grouped under
    #[serde(default = "default_media_folder")]
    pub folder: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadSettings {
    /// Maximum accepted audio file size in megabytes
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: usize,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = std::path::PathBuf::from("config.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables: MOODY_<SECTION>__<FIELD>,
        // e.g. MOODY_MEDIA__PRIVATE_KEY or MOODY_STORAGE__DATABASE_URL.
        // A double underscore separates path segments so multi-word field
        // names stay intact.
        settings = settings.add_source(
            config::Environment::with_prefix("MOODY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.media.private_key.is_empty() {
            return Err(ServerError::Config(
                "Media store key is required (set MOODY_MEDIA__PRIVATE_KEY)".to_string(),
            ));
        }

        if self.media.api_base.is_empty() {
            return Err(ServerError::Config(
                "Media store API base is required (set MOODY_MEDIA__API_BASE)".to_string(),
            ));
        }

        if self.upload.max_file_size_mb == 0 {
            return Err(ServerError::Config(
                "Maximum upload size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/moody.db".to_string()
}

fn default_media() -> MediaSettings {
    MediaSettings {
        api_base: default_media_api_base(),
        public_key: String::new(),
        private_key: String::new(),
        folder: default_media_folder(),
    }
}

fn default_media_api_base() -> String {
    "https://upload.imagekit.io/api/v1".to_string()
}

fn default_media_folder() -> String {
    "Moody-player".to_string()
}

fn default_upload() -> UploadSettings {
    UploadSettings {
        max_file_size_mb: default_max_file_size_mb(),
    }
}

fn default_max_file_size_mb() -> usize {
    25
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            media: default_media(),
            upload: default_upload(),
        }
    }
}
