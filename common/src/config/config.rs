use ::config::{Config, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
    pub upload: Option<UploadConfig>,
}

impl AppConfig {
    /// 读取配置文件，并允许 `APP_` 前缀的环境变量覆盖（如 `APP_SERVER__PORT=8080`）
    pub fn new(file: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(::config::File::with_name(file).required(false))
            .add_source(::config::Environment::with_prefix("APP").prefix_separator("_").separator("__"))
            .build()?;
        config.try_deserialize::<AppConfig>()
    }

    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
    pub fn get_upload(&self) -> UploadConfig {
        self.upload.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 5000 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UploadConfig {
    //静态资源根目录，对外映射为 /static
    pub static_dir: String,
    //上传目录，相对 static_dir
    pub upload_dir: String,
    //单个文件大小上限（字节）
    pub max_upload_bytes: usize,
    //文件名追加 UUID，避免同名覆盖
    pub unique_names: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            static_dir: "static".to_string(),
            upload_dir: "uploads".to_string(),
            max_upload_bytes: 16 * 1024 * 1024,
            unique_names: false,
        }
    }
}

impl UploadConfig {
    /// 上传文件在磁盘上的目录
    pub fn upload_root(&self) -> PathBuf {
        PathBuf::from(&self.static_dir).join(&self.upload_dir)
    }
}
