use clap::Parser;
use voice_bet_lib::Cli;

fn main() {
    if let Err(e) = voice_bet_lib::run(Cli::parse()) {
        eprintln!("错误: {e}");
        std::process::exit(1);
    }
}
