use crate::asr::AsrClient;
use crate::config::{self, AppConfig};
use crate::voice_commands::{Confidence, VoiceBetInterpreter, VoiceCommandResult};
use std::fs;
use std::path::{Path, PathBuf};

/// 应用共享状态
pub struct AppState {
    pub config_path: PathBuf,
    pub config: AppConfig,
    pub interpreter: VoiceBetInterpreter,
}

impl AppState {
    pub fn new(config_path: PathBuf, config: AppConfig) -> Self {
        let interpreter = VoiceBetInterpreter::new(config.bet_options.clone());
        Self {
            config_path,
            config,
            interpreter,
        }
    }
}

/// 结果输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

fn render(result: &VoiceCommandResult, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Summary => Ok(result.summary()),
        OutputFormat::Json => {
            serde_json::to_string(result).map_err(|e| format!("序列化结果失败: {e}"))
        }
    }
}

/// 解析一条转写文本，返回要展示的内容；被配置过滤掉的低置信度结果返回 None
pub fn interpret_transcript(
    state: &AppState,
    text: &str,
    format: OutputFormat,
) -> Result<Option<String>, String> {
    let result = state
        .interpreter
        .interpret(text)
        .ok_or_else(|| "投注目录为空，无法匹配下注选项".to_string())?;

    log::info!(
        "语音下注: {} → ${} #{} {} ({})",
        text.trim(),
        result.amount,
        result.matched_option.id,
        result.matched_option.label,
        result.confidence
    );

    if result.confidence == Confidence::Low && !state.config.interpreter.show_low_confidence {
        log::warn!("低置信度结果已忽略: {}", text.trim());
        return Ok(None);
    }

    render(&result, format).map(Some)
}

/// 读取 WAV 文件，调用 ASR 识别后解析下注指令
pub fn recognize_and_interpret(
    state: &AppState,
    wav_path: &Path,
    format: OutputFormat,
) -> Result<Option<String>, String> {
    let wav_bytes = fs::read(wav_path)
        .map_err(|e| format!("读取音频文件 {} 失败: {e}", wav_path.display()))?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("创建异步运行时失败: {e}"))?;

    let client = AsrClient::new(&state.config.server);
    log::info!("识别下注录音: {} → {}", wav_path.display(), client.endpoint());
    let text = rt.block_on(client.transcribe(wav_bytes))?;

    if text.trim().is_empty() {
        log::info!("ASR 未识别到语音内容");
        return Ok(None);
    }

    interpret_transcript(state, &text, format)
}

/// 列出当前投注目录
pub fn list_options(state: &AppState) -> String {
    state
        .interpreter
        .bet_options()
        .iter()
        .map(|o| format!("#{} {} {} ({})", o.id, o.label, o.odds, o.payout_description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 获取当前配置
pub fn show_config(state: &AppState) -> Result<String, String> {
    let content = config::to_toml(&state.config)?;
    Ok(format!("# {}\n{}", state.config_path.display(), content))
}
