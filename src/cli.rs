use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "how-the-feels")]
#[command(about = "テキスト感情解析プロキシサーバー", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// プロキシサーバーを起動
    Serve(ServeArgs),

    /// 有効な設定を表示
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct ServeArgs {
    /// バインドするホスト
    #[arg(long)]
    pub host: Option<String>,

    /// 待ち受けポート
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Webクライアントの配信ディレクトリ
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// 分類API呼び出しのタイムアウト（秒）
    #[arg(long)]
    pub timeout_seconds: Option<u64>,
}

impl ServeArgs {
    /// 指定されたオプションで設定を上書き
    pub fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = Some(dir);
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
    }
}
