//! Document Module
//!
//! ドキュメントのテーブルモデルを提供するモジュール。
//! 行数・列数と、各軸のヘッダーラベル（種類、パラメータ、表示テキスト）を保持します。
//! 描画はGUI側の責務であり、このモジュールは表示テキストの生成と保持のみを行います。

use std::path::{Path, PathBuf};

use crate::api::{HeaderAxis, HeaderLabel};
use crate::error::TabulatorError;
use crate::formatter::{format_header_label, header_labels};
use crate::preferences::{Preferences, CELL_COUNT_RANGE};

/// 1つの軸のヘッダー
#[derive(Debug, Clone, PartialEq, Eq)]
struct AxisHeader {
    /// 軸全体に最後に適用された種類
    kind: HeaderLabel,

    /// 軸全体に最後に適用されたパラメータ
    parameter: String,

    /// 各ヘッダーセルの表示テキスト
    labels: Vec<String>,
}

impl AxisHeader {
    fn new(count: u32, kind: HeaderLabel, parameter: &str) -> Self {
        Self {
            kind,
            parameter: parameter.to_string(),
            labels: header_labels(count, kind, parameter),
        }
    }

    fn relabel(&mut self, kind: HeaderLabel, parameter: &str) {
        let count = self.labels.len() as u32;
        *self = Self::new(count, kind, parameter);
    }

    fn resize(&mut self, count: u32) {
        let current = self.labels.len() as u32;
        if count < current {
            self.labels.truncate(count as usize);
        } else {
            let (kind, parameter) = (self.kind, self.parameter.as_str());
            self.labels
                .extend((current..count).map(|index| format_header_label(index, kind, parameter)));
        }
    }
}

/// ドキュメントのテーブルモデル
///
/// # 使用例
///
/// ```rust
/// use tabulator::{DocumentTable, HeaderAxis, HeaderLabel, Preferences};
///
/// let mut table = DocumentTable::new(&Preferences::new());
/// assert_eq!(table.header_item(HeaderAxis::Horizontal, 0), Some("A"));
/// assert_eq!(table.header_item(HeaderAxis::Vertical, 0), Some("1"));
///
/// table.set_header_items(HeaderAxis::Horizontal, HeaderLabel::Hexadecimal, "0x");
/// assert_eq!(table.header_item(HeaderAxis::Horizontal, 16), Some("0x10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTable {
    horizontal: AxisHeader,
    vertical: AxisHeader,
}

impl DocumentTable {
    /// ユーザー設定のデフォルト値で新規ドキュメントを生成
    ///
    /// 列数・行数はデフォルトのセル数、ヘッダーはデフォルトのラベル種類と
    /// その種類の既定パラメータで生成されます。
    pub fn new(preferences: &Preferences) -> Self {
        let h_kind = preferences.default_header_label_horizontal();
        let v_kind = preferences.default_header_label_vertical();

        let table = Self {
            horizontal: AxisHeader::new(
                preferences.default_cell_count_column(),
                h_kind,
                h_kind.default_parameter(),
            ),
            vertical: AxisHeader::new(
                preferences.default_cell_count_row(),
                v_kind,
                v_kind.default_parameter(),
            ),
        };

        tracing::debug!(
            columns = table.column_count(),
            rows = table.row_count(),
            "Created document"
        );
        table
    }

    pub fn column_count(&self) -> u32 {
        self.horizontal.labels.len() as u32
    }

    pub fn row_count(&self) -> u32 {
        self.vertical.labels.len() as u32
    }

    fn axis(&self, axis: HeaderAxis) -> &AxisHeader {
        match axis {
            HeaderAxis::Horizontal => &self.horizontal,
            HeaderAxis::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, axis: HeaderAxis) -> &mut AxisHeader {
        match axis {
            HeaderAxis::Horizontal => &mut self.horizontal,
            HeaderAxis::Vertical => &mut self.vertical,
        }
    }

    /// ヘッダー項目の表示テキスト
    pub fn header_item(&self, axis: HeaderAxis, index: u32) -> Option<&str> {
        self.axis(axis)
            .labels
            .get(index as usize)
            .map(String::as_str)
    }

    /// 軸のすべてのヘッダー項目
    pub fn header_items(&self, axis: HeaderAxis) -> &[String] {
        &self.axis(axis).labels
    }

    /// 軸に最後に適用されたラベルの種類とパラメータ
    pub fn header_label(&self, axis: HeaderAxis) -> (HeaderLabel, &str) {
        let header = self.axis(axis);
        (header.kind, header.parameter.as_str())
    }

    /// 軸のすべてのヘッダー項目を更新する
    pub fn set_header_items(&mut self, axis: HeaderAxis, kind: HeaderLabel, parameter: &str) {
        tracing::debug!(axis = axis.name(), ?kind, parameter, "Relabel all header items");
        self.axis_mut(axis).relabel(kind, parameter);
    }

    /// 特定のヘッダー項目を更新する
    ///
    /// # 発生し得るエラー
    ///
    /// * `TabulatorError::OutOfRange`: `index`が軸の長さ以上の場合
    pub fn update_header_item(
        &mut self,
        axis: HeaderAxis,
        index: u32,
        kind: HeaderLabel,
        parameter: &str,
    ) -> Result<(), TabulatorError> {
        let header = self.axis_mut(axis);
        let len = header.labels.len() as u32;
        let label = header
            .labels
            .get_mut(index as usize)
            .ok_or(TabulatorError::OutOfRange {
                axis: axis.name(),
                index,
                len,
            })?;

        *label = format_header_label(index, kind, parameter);
        Ok(())
    }

    /// 列数・行数を変更する
    ///
    /// 値は1〜1000に丸められます。追加されたヘッダー項目には、その軸に
    /// 最後に適用された種類とパラメータが使われます。
    pub fn resize(&mut self, columns: u32, rows: u32) {
        let clamp = |n: u32| n.clamp(*CELL_COUNT_RANGE.start(), *CELL_COUNT_RANGE.end());
        self.horizontal.resize(clamp(columns));
        self.vertical.resize(clamp(rows));
    }
}

/// 開いているドキュメント
///
/// ファイル名と、同じファイル名のドキュメントを区別するための番号を保持します。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    canonical_name: Option<PathBuf>,
    canonical_index: u32,
    table: DocumentTable,
}

impl Document {
    /// 無題の新規ドキュメントを生成
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            canonical_name: None,
            canonical_index: 0,
            table: DocumentTable::new(preferences),
        }
    }

    pub fn canonical_name(&self) -> Option<&Path> {
        self.canonical_name.as_deref()
    }

    pub fn set_canonical_name(&mut self, name: impl Into<PathBuf>) {
        self.canonical_name = Some(name.into());
    }

    pub fn canonical_index(&self) -> u32 {
        self.canonical_index
    }

    pub fn set_canonical_index(&mut self, index: u32) {
        self.canonical_index = index;
    }

    pub fn table(&self) -> &DocumentTable {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut DocumentTable {
        &mut self.table
    }

    /// ウィンドウタイトル
    ///
    /// ファイル名（無題の場合は`Untitled`）に、番号が2以上の場合は` (n)`を付加します。
    pub fn title(&self) -> String {
        let file_name = self
            .canonical_name
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());

        if self.canonical_index > 1 {
            format!("{} ({})", file_name, self.canonical_index)
        } else {
            file_name
        }
    }
}
