use anyhow::Context;
use clap::Parser;
use how_the_feels::{cli, config, server};
use cli::{Cli, Commands};
use config::Config;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load().context("設定の読み込みに失敗しました")?;

    match cli.command {
        Commands::Serve(args) => {
            args.apply(&mut config);
            server::run(config).await.context("サーバーが異常終了しました")?;
        }

        Commands::Config { show } => {
            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  APIベースURL: {}", config.api_base_url);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  待ち受け: {}", config.bind_address());
                match &config.static_dir {
                    Some(dir) => println!("  配信ディレクトリ: {}", dir.display()),
                    None => println!("  配信ディレクトリ: なし"),
                }
                println!("  APIキー: {}", config.api_key_status());
            } else {
                println!("設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
