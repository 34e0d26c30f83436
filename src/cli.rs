use alert_timeline_common::{Locale, SortOrder};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "alert-timeline")]
#[command(about = "カメラアラートのタイムライン・アーカイブ閲覧と報告送信", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIのベースURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// 表示言語 (en/uz)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アラート一覧を表示
    Alerts {
        /// 並び順 (most_recent/oldest)
        #[arg(short, long, default_value = "most_recent")]
        filter: SortOrder,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// カメラ一覧を表示
    Cams,

    /// カメラごとのアーカイブを表示
    Archive {
        /// カメラID（省略時は最初のアラートのカメラ）
        #[arg(short, long)]
        cam: Option<String>,

        /// 並び順 (most_recent/oldest)
        #[arg(short, long, default_value = "most_recent")]
        filter: SortOrder,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// アーカイブのレコードについて報告を送信
    Report {
        /// アーカイブ内の番号（`archive` の表示番号）
        #[arg(short, long)]
        index: usize,

        /// カメラID（省略時は最初のアラートのカメラ）
        #[arg(short, long)]
        cam: Option<String>,

        /// 並び順 (most_recent/oldest)
        #[arg(short, long, default_value = "most_recent")]
        filter: SortOrder,

        /// 作業者名
        #[arg(long)]
        worker: Option<String>,

        /// 作業者ID
        #[arg(long)]
        worker_id: Option<String>,

        /// 部署
        #[arg(long)]
        department: Option<String>,

        /// 監督者
        #[arg(long)]
        supervisor: Option<String>,

        /// 日時（省略時はレコードの日時）
        #[arg(long, conflicts_with = "now")]
        timestamp: Option<String>,

        /// 現在時刻を日時にする
        #[arg(long)]
        now: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIのベースURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
