use crate::config::ServerConfig;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

const RECOGNIZE_PATH: &str = "/api/tasks/asr-recognize/sync";

/// ASR 响应信封：成功时带 data.text，失败时带 error
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Transcript>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Transcript {
    text: String,
}

/// 下注语音转写客户端
pub struct AsrClient {
    http: reqwest::Client,
    endpoint: String,
    asr_config_id: String,
}

impl AsrClient {
    pub fn new(server: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}{RECOGNIZE_PATH}", server.url.trim_end_matches('/')),
            asr_config_id: server.asr_config_id.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 上传一段下注录音（WAV），返回转写文本
    pub async fn transcribe(&self, wav_bytes: Vec<u8>) -> Result<String, String> {
        let size = wav_bytes.len();
        let audio = Part::bytes(wav_bytes)
            .file_name("bet-command.wav")
            .mime_str("audio/wav")
            .map_err(|e| format!("构建录音上传表单失败: {e}"))?;
        let form = Form::new()
            .part("file", audio)
            .text("asrConfigId", self.asr_config_id.clone());

        log::debug!("上传下注录音 {size} 字节 → {}", self.endpoint);
        let resp = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("连接 ASR 服务失败: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(format!("ASR 服务返回 {status}"));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| format!("读取 ASR 响应失败: {e}"))?;
        let text = transcript_from_body(&body)?;
        log::info!("下注录音转写: {text}");
        Ok(text)
    }
}

/// 从响应体取出转写文本
fn transcript_from_body(body: &str) -> Result<String, String> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| format!("ASR 响应不是合法 JSON: {e}"))?;
    match envelope {
        Envelope { error: Some(err), .. } => Err(format!("ASR 识别失败: {err}")),
        Envelope { data: Some(t), .. } => Ok(t.text),
        Envelope { data: None, .. } => Err("ASR 响应缺少转写结果".to_string()),
    }
}
