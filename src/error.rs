//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。
//!
//! ヘッダーラベルのフォーマット処理自体は失敗しません。エラーが発生するのは
//! 設定の永続化、設定値の検証、ドキュメントモデルへの範囲外アクセスのみです。

use thiserror::Error;

/// tabulatorクレート全体で使用するエラー型
///
/// # エラーの種類
///
/// - `Io`: 設定ファイルの読み書き中に発生したエラー
/// - `Json`: 設定ファイルのシリアライズ・デシリアライズに失敗したエラー
/// - `Config`: 設定値の検証に失敗したエラー（範囲外のセル数など）
/// - `OutOfRange`: ドキュメントの行・列の範囲外を指定したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use tabulator::{JsonSettings, TabulatorError};
///
/// fn open_settings(path: &str) -> Result<JsonSettings, TabulatorError> {
///     let settings = JsonSettings::open(path)?;
///     Ok(settings)
/// }
/// ```
#[derive(Error, Debug)]
pub enum TabulatorError {
    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 設定ファイルのJSONが不正な場合のエラー
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `PreferencesBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。
    ///
    /// # 例
    ///
    /// ```rust
    /// use tabulator::{PreferencesBuilder, TabulatorError};
    ///
    /// let result = PreferencesBuilder::new()
    ///     .with_default_cell_count_column(0)
    ///     .build();
    ///
    /// assert!(matches!(result, Err(TabulatorError::Config(_))));
    /// ```
    #[error("Configuration error: {0}")]
    Config(String),

    /// ヘッダー項目のインデックスが軸の長さを超えたエラー
    #[error("Header index {index} is out of range for the {axis} header (length {len})")]
    OutOfRange {
        /// 対象の軸（"horizontal" または "vertical"）
        axis: &'static str,
        /// 指定されたインデックス
        index: u32,
        /// 軸の長さ
        len: u32,
    },
}
