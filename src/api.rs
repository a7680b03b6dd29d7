//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::{Deserialize, Serialize};

/// ヘッダーラベルの種類
///
/// 行ヘッダー・列ヘッダーに表示するラベルの番号体系を指定します。
/// ラベルの補助パラメータ（プレフィックス、開始番号、大文字小文字、テンプレート）は
/// 種類ごとに意味が異なり、文字列として別途渡されます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderLabel {
    /// ユーザー定義テンプレート（`#`がインデックスに置換される）
    ///
    /// 例: テンプレート `"Col #"`、インデックス3 → `Col 4`
    Custom,

    /// 2進数（パラメータはプレフィックス、例: `"0b"`）
    Binary,

    /// 8進数（パラメータはプレフィックス、例: `"0o"`）
    Octal,

    /// 10進数（パラメータは開始番号 `"0"` または `"1"`）
    Decimal,

    /// 16進数（パラメータはプレフィックス、例: `"0x"`）
    ///
    /// 数字は大文字で出力されます（例: `0xFF`）。
    Hexadecimal,

    /// 表計算ソフトの列名形式のアルファベット（パラメータは `"upper"` または `"lower"`）
    ///
    /// 例: A, B, …, Z, AA, AB, …
    Letter,
}

impl HeaderLabel {
    /// すべての種類（設定ダイアログの表示順）
    pub const ALL: [HeaderLabel; 6] = [
        HeaderLabel::Binary,
        HeaderLabel::Octal,
        HeaderLabel::Decimal,
        HeaderLabel::Hexadecimal,
        HeaderLabel::Letter,
        HeaderLabel::Custom,
    ];

    /// 設定ストアに保存する際のコード
    ///
    /// 値は互換性のための識別子であり、基数として計算には使用しません。
    pub const fn code(self) -> i64 {
        match self {
            HeaderLabel::Custom => 0,
            HeaderLabel::Binary => 2,
            HeaderLabel::Octal => 8,
            HeaderLabel::Decimal => 10,
            HeaderLabel::Hexadecimal => 16,
            HeaderLabel::Letter => 26,
        }
    }

    /// 設定ストアのコードから種類を復元する
    ///
    /// 未知のコードの場合は`None`を返します。
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(HeaderLabel::Custom),
            2 => Some(HeaderLabel::Binary),
            8 => Some(HeaderLabel::Octal),
            10 => Some(HeaderLabel::Decimal),
            16 => Some(HeaderLabel::Hexadecimal),
            26 => Some(HeaderLabel::Letter),
            _ => None,
        }
    }

    /// ヘッダーダイアログで初期選択されるパラメータ
    pub const fn default_parameter(self) -> &'static str {
        match self {
            HeaderLabel::Custom => "#",
            HeaderLabel::Binary => "0b",
            HeaderLabel::Octal => "0o",
            HeaderLabel::Decimal => "1",
            HeaderLabel::Hexadecimal => "0x",
            HeaderLabel::Letter => LetterCase::Upper.as_parameter(),
        }
    }
}

/// アルファベットラベルの大文字・小文字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterCase {
    /// 大文字（A, B, …）
    #[default]
    Upper,

    /// 小文字（a, b, …）
    Lower,
}

impl LetterCase {
    /// パラメータ文字列から解釈する
    ///
    /// `"upper"`のみが大文字となり、それ以外はすべて小文字として扱います。
    pub fn from_parameter(parameter: &str) -> Self {
        if parameter == "upper" {
            LetterCase::Upper
        } else {
            LetterCase::Lower
        }
    }

    /// パラメータ文字列へ変換する
    pub const fn as_parameter(self) -> &'static str {
        match self {
            LetterCase::Upper => "upper",
            LetterCase::Lower => "lower",
        }
    }
}

/// ヘッダーの軸
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderAxis {
    /// 列ヘッダー（水平方向）
    Horizontal,

    /// 行ヘッダー（垂直方向）
    Vertical,
}

impl HeaderAxis {
    /// エラーメッセージやログに使う名前
    pub const fn name(self) -> &'static str {
        match self {
            HeaderAxis::Horizontal => "horizontal",
            HeaderAxis::Vertical => "vertical",
        }
    }
}
