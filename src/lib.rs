mod amount;
mod asr;
mod bet_options;
mod commands;
mod config;
mod voice_commands;

pub use amount::extract_amount;
pub use bet_options::{default_bet_options, BetOption};
pub use voice_commands::{
    interpret_voice_command, match_option, normalize_transcript, score_option, Confidence,
    OptionMatch, VoiceBetInterpreter, VoiceCommandResult,
};

use clap::{Parser, Subcommand};
use commands::{AppState, OutputFormat};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "voice-bet")]
#[command(about = "语音下注指令解析")]
#[command(version)]
pub struct Cli {
    /// 配置文件路径，默认位于系统配置目录
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// 解析文本指令；未给出文本时逐行读取标准输入
    Interpret {
        text: Vec<String>,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 识别 WAV 录音并解析
    Recognize {
        wav: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// 列出投注目录
    Options,
    /// 显示当前配置
    Config,
}

fn output_format(json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        OutputFormat::Summary
    }
}

fn print_result(out: Option<String>) {
    if let Some(line) = out {
        println!("{line}");
    }
}

pub fn run(cli: Cli) -> Result<(), String> {
    env_logger::init();

    let (config_path, app_config) = match cli.config {
        Some(path) => {
            let app_config = config::load_config_from(&path)?;
            (path, app_config)
        }
        None => (config::config_path(), config::load_config()?),
    };
    log::info!(
        "已加载配置 {}，投注选项 {} 个",
        config_path.display(),
        app_config.bet_options.len()
    );
    let state = AppState::new(config_path, app_config);

    match cli.command {
        Command::Interpret { text, json } => {
            let format = output_format(json);
            if !text.is_empty() {
                let transcript = text.join(" ");
                print_result(commands::interpret_transcript(&state, &transcript, format)?);
                return Ok(());
            }
            for line in io::stdin().lock().lines() {
                let line = line.map_err(|e| format!("读取标准输入失败: {e}"))?;
                if line.trim().is_empty() {
                    continue;
                }
                match commands::interpret_transcript(&state, &line, format) {
                    Ok(out) => print_result(out),
                    Err(e) => log::error!("解析失败: {e}"),
                }
            }
        }
        Command::Recognize { wav, json } => {
            print_result(commands::recognize_and_interpret(
                &state,
                &wav,
                output_format(json),
            )?);
        }
        Command::Options => println!("{}", commands::list_options(&state)),
        Command::Config => println!("{}", commands::show_config(&state)?),
    }

    Ok(())
}
