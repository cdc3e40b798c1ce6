use crate::bet_options::{default_bet_options, BetOption};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub interpreter: InterpreterConfig,
    /// 投注目录，缺省为内置目录
    #[serde(default = "default_bet_options")]
    pub bet_options: Vec<BetOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// ASR 服务地址
    pub url: String,
    pub asr_config_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// 低置信度结果是否仍然输出
    #[serde(default = "default_show_low_confidence")]
    pub show_low_confidence: bool,
}

fn default_show_low_confidence() -> bool {
    true
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            show_low_confidence: default_show_low_confidence(),
        }
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("voice-bet");
    config_dir.join("config.toml")
}

/// 加载默认位置的配置
pub fn load_config() -> Result<AppConfig, String> {
    load_config_from(&config_path())
}

/// 加载配置，文件不存在则创建默认配置
pub fn load_config_from(path: &Path) -> Result<AppConfig, String> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| format!("读取配置失败: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("解析配置失败: {e}"))
    } else {
        log::info!("配置文件 {} 不存在，写入默认配置", path.display());
        let config = default_config();
        save_config_to(path, &config)?;
        Ok(config)
    }
}

/// 保存配置到文件
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("创建配置目录失败: {e}"))?;
    }
    let content = to_toml(config)?;
    fs::write(path, content).map_err(|e| format!("写入配置失败: {e}"))?;
    Ok(())
}

/// 序列化为 TOML 文本
pub fn to_toml(config: &AppConfig) -> Result<String, String> {
    toml::to_string_pretty(config).map_err(|e| format!("序列化配置失败: {e}"))
}

/// 默认配置
pub fn default_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            url: "http://127.0.0.1:3000".to_string(),
            asr_config_id: "your-asr-config-id".to_string(),
        },
        interpreter: InterpreterConfig::default(),
        bet_options: default_bet_options(),
    }
}
