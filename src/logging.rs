//! Logging Module
//!
//! `tracing`によるログ出力を初期化するモジュール。
//!
//! `RUST_LOG`環境変数でフィルタリングできます:
//! - `RUST_LOG=debug` - すべてのデバッグログ
//! - `RUST_LOG=tabulator::preferences=debug` - モジュール単位のフィルタリング

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// コンソール出力のサブスクライバーを登録する
///
/// `RUST_LOG`が未設定の場合は`warn`レベルを使用します。
/// 既にグローバルなサブスクライバーが登録されている場合は何もしません。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer().with_target(true).with_line_number(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Tracing subscriber already initialized");
    }
}
