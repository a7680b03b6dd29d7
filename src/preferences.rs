//! Preferences Module
//!
//! ユーザー設定を保持し、設定ストアとの間で読み書きするモジュール。
//! 各ドキュメントは`Preferences`の独立したインスタンス（またはその参照）を受け取り、
//! インスタンス間で状態を共有しません。

use std::ops::RangeInclusive;

use crate::api::HeaderLabel;
use crate::error::TabulatorError;
use crate::settings::{group_key, SettingsStore};

const GROUP: &str = "Preferences";

const DEFAULT_MAXIMUM_RECENT_DOCUMENTS: u32 = 10;
const DEFAULT_CELL_COUNT_COLUMN: u32 = 25;
const DEFAULT_CELL_COUNT_ROW: u32 = 50;
const DEFAULT_HEADER_LABEL_HORIZONTAL: HeaderLabel = HeaderLabel::Letter;
const DEFAULT_HEADER_LABEL_VERTICAL: HeaderLabel = HeaderLabel::Decimal;

/// 最近使ったドキュメントの最大件数の範囲
pub const MAXIMUM_RECENT_DOCUMENTS_RANGE: RangeInclusive<u32> = 0..=25;

/// 新規ドキュメントの行数・列数の範囲
pub const CELL_COUNT_RANGE: RangeInclusive<u32> = 1..=1000;

/// ユーザー設定
///
/// # デフォルト設定
///
/// - ウィンドウのジオメトリと状態を復元する
/// - 最近使ったドキュメント: 最大10件、起動時に復元する
/// - 列ヘッダー: アルファベット、行ヘッダー: 10進数
/// - 新規ドキュメント: 25列 × 50行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    restore_application_geometry: bool,
    restore_application_state: bool,
    maximum_recent_documents: u32,
    restore_recent_documents: bool,
    default_header_label_horizontal: HeaderLabel,
    default_header_label_vertical: HeaderLabel,
    default_cell_count_column: u32,
    default_cell_count_row: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            restore_application_geometry: true,
            restore_application_state: true,
            maximum_recent_documents: DEFAULT_MAXIMUM_RECENT_DOCUMENTS,
            restore_recent_documents: true,
            default_header_label_horizontal: DEFAULT_HEADER_LABEL_HORIZONTAL,
            default_header_label_vertical: DEFAULT_HEADER_LABEL_VERTICAL,
            default_cell_count_column: DEFAULT_CELL_COUNT_COLUMN,
            default_cell_count_row: DEFAULT_CELL_COUNT_ROW,
        }
    }
}

/// 範囲内ならその値、範囲外ならデフォルト値
fn within_or(value: i64, range: &RangeInclusive<u32>, default: u32, name: &str) -> u32 {
    match u32::try_from(value) {
        Ok(v) if range.contains(&v) => v,
        _ => {
            tracing::debug!(
                "{} = {} is outside {:?}, resetting to {}",
                name,
                value,
                range,
                default
            );
            default
        }
    }
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// 設定ストアから読み込む
    ///
    /// 読み込み前にすべての値をデフォルト値に戻します。存在しないキーや
    /// 解釈できない値はデフォルト値のままとなります。
    pub fn load(&mut self, store: &impl SettingsStore) {
        *self = Self::default();

        let read_bool = |key: &str| store.value(&group_key(GROUP, key)).map(|v| v.to_bool());
        let read_int = |key: &str| store.value(&group_key(GROUP, key)).and_then(|v| v.to_int());

        // General: Geometry & State
        if let Some(value) = read_bool("RestoreApplicationGeometry") {
            self.set_restore_application_geometry(value);
        }
        if let Some(value) = read_bool("RestoreApplicationState") {
            self.set_restore_application_state(value);
        }

        // Documents: Recently Opened Documents
        if let Some(value) = read_int("MaximumRecentDocuments") {
            self.set_maximum_recent_documents_raw(value);
        }
        if let Some(value) = read_bool("RestoreRecentDocuments") {
            self.set_restore_recent_documents(value);
        }

        // Document Presets: Header Labels
        if let Some(kind) =
            read_int("DefaultHeaderLabelHorizontal").and_then(HeaderLabel::from_code)
        {
            self.set_default_header_label_horizontal(kind);
        }
        if let Some(kind) =
            read_int("DefaultHeaderLabelVertical").and_then(HeaderLabel::from_code)
        {
            self.set_default_header_label_vertical(kind);
        }

        // Document Presets: Cell Counts
        if let Some(value) = read_int("DefaultCellCountColumn") {
            self.set_default_cell_count_column_raw(value);
        }
        if let Some(value) = read_int("DefaultCellCountRow") {
            self.set_default_cell_count_row_raw(value);
        }

        tracing::debug!(preferences = ?self, "Loaded preferences");
    }

    /// 設定ストアに保存する
    ///
    /// グループ配下の既存のキーはすべて削除してから書き込みます。
    pub fn save(&self, store: &mut impl SettingsStore) {
        store.remove_group(GROUP);

        let mut write = |key: &str, value: crate::settings::SettingValue| {
            store.set_value(&group_key(GROUP, key), value);
        };

        write("RestoreApplicationGeometry", self.restore_application_geometry.into());
        write("RestoreApplicationState", self.restore_application_state.into());

        write("MaximumRecentDocuments", self.maximum_recent_documents.into());
        write("RestoreRecentDocuments", self.restore_recent_documents.into());

        write(
            "DefaultHeaderLabelHorizontal",
            self.default_header_label_horizontal.code().into(),
        );
        write(
            "DefaultHeaderLabelVertical",
            self.default_header_label_vertical.code().into(),
        );

        write("DefaultCellCountColumn", self.default_cell_count_column.into());
        write("DefaultCellCountRow", self.default_cell_count_row.into());

        tracing::debug!("Saved preferences");
    }

    pub fn restore_application_geometry(&self) -> bool {
        self.restore_application_geometry
    }

    pub fn set_restore_application_geometry(&mut self, value: bool) {
        self.restore_application_geometry = value;
    }

    pub fn restore_application_state(&self) -> bool {
        self.restore_application_state
    }

    pub fn set_restore_application_state(&mut self, value: bool) {
        self.restore_application_state = value;
    }

    pub fn maximum_recent_documents(&self) -> u32 {
        self.maximum_recent_documents
    }

    /// 最大件数を設定する（0〜25の範囲外の場合はデフォルト値10）
    pub fn set_maximum_recent_documents(&mut self, value: u32) {
        self.set_maximum_recent_documents_raw(i64::from(value));
    }

    fn set_maximum_recent_documents_raw(&mut self, value: i64) {
        self.maximum_recent_documents = within_or(
            value,
            &MAXIMUM_RECENT_DOCUMENTS_RANGE,
            DEFAULT_MAXIMUM_RECENT_DOCUMENTS,
            "MaximumRecentDocuments",
        );
    }

    pub fn restore_recent_documents(&self) -> bool {
        self.restore_recent_documents
    }

    pub fn set_restore_recent_documents(&mut self, value: bool) {
        self.restore_recent_documents = value;
    }

    pub fn default_header_label_horizontal(&self) -> HeaderLabel {
        self.default_header_label_horizontal
    }

    pub fn set_default_header_label_horizontal(&mut self, value: HeaderLabel) {
        self.default_header_label_horizontal = value;
    }

    pub fn default_header_label_vertical(&self) -> HeaderLabel {
        self.default_header_label_vertical
    }

    pub fn set_default_header_label_vertical(&mut self, value: HeaderLabel) {
        self.default_header_label_vertical = value;
    }

    pub fn default_cell_count_column(&self) -> u32 {
        self.default_cell_count_column
    }

    /// 列数を設定する（1〜1000の範囲外の場合はデフォルト値25）
    pub fn set_default_cell_count_column(&mut self, value: u32) {
        self.set_default_cell_count_column_raw(i64::from(value));
    }

    fn set_default_cell_count_column_raw(&mut self, value: i64) {
        self.default_cell_count_column = within_or(
            value,
            &CELL_COUNT_RANGE,
            DEFAULT_CELL_COUNT_COLUMN,
            "DefaultCellCountColumn",
        );
    }

    pub fn default_cell_count_row(&self) -> u32 {
        self.default_cell_count_row
    }

    /// 行数を設定する（1〜1000の範囲外の場合はデフォルト値50）
    pub fn set_default_cell_count_row(&mut self, value: u32) {
        self.set_default_cell_count_row_raw(i64::from(value));
    }

    fn set_default_cell_count_row_raw(&mut self, value: i64) {
        self.default_cell_count_row = within_or(
            value,
            &CELL_COUNT_RANGE,
            DEFAULT_CELL_COUNT_ROW,
            "DefaultCellCountRow",
        );
    }
}

/// `Preferences`を段階的に構築するビルダー
///
/// セッターと異なり、範囲外の値はデフォルト値に戻さず`build()`時にエラーとします。
///
/// # 使用例
///
/// ```rust
/// use tabulator::{HeaderLabel, PreferencesBuilder};
///
/// # fn main() -> Result<(), tabulator::TabulatorError> {
/// let preferences = PreferencesBuilder::new()
///     .with_default_header_label_horizontal(HeaderLabel::Decimal)
///     .with_default_cell_count_column(10)
///     .build()?;
///
/// assert_eq!(preferences.default_cell_count_column(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PreferencesBuilder {
    preferences: Preferences,
}

impl PreferencesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restore_application_geometry(mut self, value: bool) -> Self {
        self.preferences.restore_application_geometry = value;
        self
    }

    pub fn restore_application_state(mut self, value: bool) -> Self {
        self.preferences.restore_application_state = value;
        self
    }

    pub fn with_maximum_recent_documents(mut self, value: u32) -> Self {
        self.preferences.maximum_recent_documents = value;
        self
    }

    pub fn restore_recent_documents(mut self, value: bool) -> Self {
        self.preferences.restore_recent_documents = value;
        self
    }

    pub fn with_default_header_label_horizontal(mut self, value: HeaderLabel) -> Self {
        self.preferences.default_header_label_horizontal = value;
        self
    }

    pub fn with_default_header_label_vertical(mut self, value: HeaderLabel) -> Self {
        self.preferences.default_header_label_vertical = value;
        self
    }

    pub fn with_default_cell_count_column(mut self, value: u32) -> Self {
        self.preferences.default_cell_count_column = value;
        self
    }

    pub fn with_default_cell_count_row(mut self, value: u32) -> Self {
        self.preferences.default_cell_count_row = value;
        self
    }

    /// 設定を検証し、`Preferences`を生成する
    ///
    /// # 発生し得るエラー
    ///
    /// * `TabulatorError::Config(String)`: 最大件数、列数、行数のいずれかが範囲外の場合
    pub fn build(self) -> Result<Preferences, TabulatorError> {
        let p = self.preferences;

        if !MAXIMUM_RECENT_DOCUMENTS_RANGE.contains(&p.maximum_recent_documents) {
            return Err(TabulatorError::Config(format!(
                "Invalid maximum recent documents: {} (allowed: {:?})",
                p.maximum_recent_documents, MAXIMUM_RECENT_DOCUMENTS_RANGE
            )));
        }

        if !CELL_COUNT_RANGE.contains(&p.default_cell_count_column) {
            return Err(TabulatorError::Config(format!(
                "Invalid column count: {} (allowed: {:?})",
                p.default_cell_count_column, CELL_COUNT_RANGE
            )));
        }

        if !CELL_COUNT_RANGE.contains(&p.default_cell_count_row) {
            return Err(TabulatorError::Config(format!(
                "Invalid row count: {} (allowed: {:?})",
                p.default_cell_count_row, CELL_COUNT_RANGE
            )));
        }

        Ok(p)
    }
}
