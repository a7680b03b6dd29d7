//! Formatter Module
//!
//! 行・列インデックス（0始まり）をヘッダーラベル文字列に変換するモジュール。
//! すべての関数は純粋関数であり、状態を持たず、副作用もありません。

use crate::api::{HeaderLabel, LetterCase};

/// Decimalラベルの開始番号のデフォルト値
const DEFAULT_DECIMAL_OFFSET: u64 = 1;

/// ヘッダーラベルをフォーマット
///
/// # 引数
///
/// * `index` - 行または列のインデックス（0始まり）
/// * `kind` - ラベルの種類
/// * `parameter` - 種類ごとの補助パラメータ
///   * `Binary` / `Octal` / `Hexadecimal`: プレフィックス（空文字列可）
///   * `Decimal`: 開始番号（`"0"` または `"1"`）
///   * `Letter`: `"upper"` または `"lower"`
///   * `Custom`: `#`を含むテンプレート
///
/// # 使用例
///
/// ```rust
/// use tabulator::{format_header_label, HeaderLabel};
///
/// assert_eq!(format_header_label(5, HeaderLabel::Binary, "0b"), "0b101");
/// assert_eq!(format_header_label(255, HeaderLabel::Hexadecimal, "0x"), "0xFF");
/// assert_eq!(format_header_label(26, HeaderLabel::Letter, "upper"), "AA");
/// assert_eq!(format_header_label(3, HeaderLabel::Custom, "Col #"), "Col 4");
/// ```
pub fn format_header_label(index: u32, kind: HeaderLabel, parameter: &str) -> String {
    match kind {
        HeaderLabel::Binary => format!("{}{:b}", parameter, index),
        HeaderLabel::Octal => format!("{}{:o}", parameter, index),
        HeaderLabel::Decimal => format_decimal(index, parameter),
        HeaderLabel::Hexadecimal => format!("{}{:X}", parameter, index),
        HeaderLabel::Letter => format_letter(index, LetterCase::from_parameter(parameter)),
        HeaderLabel::Custom => format_custom(index, parameter),
    }
}

/// 設定ストアに保存されたコードからヘッダーラベルをフォーマット
///
/// 未知のコードの場合は空文字列を返します。
///
/// ```rust
/// use tabulator::format_header_label_code;
///
/// assert_eq!(format_header_label_code(0, 26, "upper"), "A");
/// assert_eq!(format_header_label_code(0, 3, "upper"), "");
/// ```
pub fn format_header_label_code(index: u32, code: i64, parameter: &str) -> String {
    match HeaderLabel::from_code(code) {
        Some(kind) => format_header_label(index, kind, parameter),
        None => String::new(),
    }
}

/// 軸全体のヘッダーラベルを生成
///
/// インデックス`0..count`のそれぞれについて`format_header_label`を1回ずつ呼び出します。
pub fn header_labels(count: u32, kind: HeaderLabel, parameter: &str) -> Vec<String> {
    (0..count)
        .map(|index| format_header_label(index, kind, parameter))
        .collect()
}

fn format_decimal(index: u32, parameter: &str) -> String {
    let offset = match parameter.trim().parse::<u64>() {
        Ok(offset) => offset,
        Err(_) => {
            tracing::warn!(
                parameter,
                "invalid decimal start offset, using {}",
                DEFAULT_DECIMAL_OFFSET
            );
            DEFAULT_DECIMAL_OFFSET
        }
    };

    (u64::from(index) + offset).to_string()
}

/// 全単射26進数（表計算ソフトの列名形式）に変換（0 -> "A", 25 -> "Z", 26 -> "AA"）
fn format_letter(index: u32, case: LetterCase) -> String {
    let base = match case {
        LetterCase::Upper => b'A',
        LetterCase::Lower => b'a',
    };

    let mut letters = Vec::new();
    let mut n = u64::from(index) + 1;
    while n > 0 {
        n -= 1;
        letters.push(base + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();

    // ASCII英字のみで構成される
    letters.into_iter().map(char::from).collect()
}

fn format_custom(index: u32, template: &str) -> String {
    template.replace('#', &(u64::from(index) + 1).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary() {
        assert_eq!(format_header_label(5, HeaderLabel::Binary, "0b"), "0b101");
        assert_eq!(format_header_label(0, HeaderLabel::Binary, "0b"), "0b0");
        assert_eq!(format_header_label(5, HeaderLabel::Binary, ""), "101");
    }

    #[test]
    fn test_octal() {
        assert_eq!(format_header_label(8, HeaderLabel::Octal, "0o"), "0o10");
        assert_eq!(format_header_label(7, HeaderLabel::Octal, ""), "7");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(format_header_label(0, HeaderLabel::Decimal, "1"), "1");
        assert_eq!(format_header_label(0, HeaderLabel::Decimal, "0"), "0");
        assert_eq!(format_header_label(41, HeaderLabel::Decimal, "1"), "42");
    }

    #[test]
    fn test_decimal_invalid_offset_uses_default() {
        assert_eq!(format_header_label(0, HeaderLabel::Decimal, "abc"), "1");
        assert_eq!(format_header_label(9, HeaderLabel::Decimal, ""), "10");
        assert_eq!(format_header_label(9, HeaderLabel::Decimal, " 0 "), "9");
    }

    #[test]
    fn test_decimal_no_overflow() {
        assert_eq!(
            format_header_label(u32::MAX, HeaderLabel::Decimal, "1"),
            "4294967296"
        );
    }

    #[test]
    fn test_hexadecimal() {
        assert_eq!(format_header_label(255, HeaderLabel::Hexadecimal, "0x"), "0xFF");
        assert_eq!(format_header_label(0, HeaderLabel::Hexadecimal, "0x"), "0x0");
        assert_eq!(format_header_label(16, HeaderLabel::Hexadecimal, "0x"), "0x10");
        assert_eq!(format_header_label(171, HeaderLabel::Hexadecimal, ""), "AB");
    }

    #[test]
    fn test_letter() {
        assert_eq!(format_header_label(0, HeaderLabel::Letter, "upper"), "A");
        assert_eq!(format_header_label(25, HeaderLabel::Letter, "upper"), "Z");
        assert_eq!(format_header_label(26, HeaderLabel::Letter, "upper"), "AA");
        assert_eq!(format_header_label(51, HeaderLabel::Letter, "upper"), "AZ");
        assert_eq!(format_header_label(52, HeaderLabel::Letter, "upper"), "BA");
        assert_eq!(format_header_label(701, HeaderLabel::Letter, "upper"), "ZZ");
        assert_eq!(format_header_label(702, HeaderLabel::Letter, "upper"), "AAA");
        assert_eq!(format_header_label(27, HeaderLabel::Letter, "lower"), "ab");
    }

    #[test]
    fn test_letter_max_index() {
        // u32::MAX + 1 = 4294967296 -> "MWLQKWV"
        assert_eq!(
            format_header_label(u32::MAX, HeaderLabel::Letter, "upper"),
            "MWLQKWV"
        );
    }

    #[test]
    fn test_custom() {
        assert_eq!(format_header_label(3, HeaderLabel::Custom, "Col #"), "Col 4");
        assert_eq!(format_header_label(2, HeaderLabel::Custom, "R#C#"), "R3C3");
        assert_eq!(format_header_label(2, HeaderLabel::Custom, "Total"), "Total");
        assert_eq!(format_header_label(2, HeaderLabel::Custom, ""), "");
    }

    #[test]
    fn test_format_by_code() {
        assert_eq!(format_header_label_code(5, 2, "0b"), "0b101");
        assert_eq!(format_header_label_code(0, 10, "1"), "1");
        assert_eq!(format_header_label_code(0, 99, "1"), "");
        assert_eq!(format_header_label_code(0, -1, ""), "");
    }

    #[test]
    fn test_header_labels_first_ten_letters() {
        let labels = header_labels(10, HeaderLabel::Letter, "upper");
        assert_eq!(
            labels,
            vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        );
    }

    #[test]
    fn test_header_labels_empty() {
        assert!(header_labels(0, HeaderLabel::Decimal, "1").is_empty());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_letter_is_non_empty_ascii(index in any::<u32>()) {
                let upper = format_header_label(index, HeaderLabel::Letter, "upper");
                let lower = format_header_label(index, HeaderLabel::Letter, "lower");

                prop_assert!(!upper.is_empty());
                prop_assert!(upper.bytes().all(|b| b.is_ascii_uppercase()));
                prop_assert!(lower.bytes().all(|b| b.is_ascii_lowercase()));
                prop_assert_eq!(upper.to_ascii_lowercase(), lower);
            }

            #[test]
            fn test_letter_is_injective_on_neighbours(index in 0u32..1_000_000) {
                let a = format_header_label(index, HeaderLabel::Letter, "upper");
                let b = format_header_label(index + 1, HeaderLabel::Letter, "upper");
                prop_assert_ne!(a, b);
            }

            #[test]
            fn test_decimal_offset_shifts_by_one(index in any::<u32>()) {
                let one: u64 = format_header_label(index, HeaderLabel::Decimal, "1")
                    .parse()
                    .unwrap();
                let zero: u64 = format_header_label(index, HeaderLabel::Decimal, "0")
                    .parse()
                    .unwrap();
                prop_assert_eq!(one, zero + 1);
            }

            #[test]
            fn test_binary_prefix_is_removable(index in any::<u32>()) {
                let bare = format_header_label(index, HeaderLabel::Binary, "");
                let prefixed = format_header_label(index, HeaderLabel::Binary, "0b");
                prop_assert_eq!(prefixed.strip_prefix("0b"), Some(bare.as_str()));
            }

            #[test]
            fn test_hexadecimal_parses_back(index in any::<u32>()) {
                let label = format_header_label(index, HeaderLabel::Hexadecimal, "");
                prop_assert_eq!(u32::from_str_radix(&label, 16).unwrap(), index);
            }

            #[test]
            fn test_custom_replaces_every_placeholder(
                index in any::<u32>(),
                template in "[a-z# ]{0,12}"
            ) {
                let label = format_header_label(index, HeaderLabel::Custom, &template);
                prop_assert!(!label.contains('#'));
            }

            #[test]
            fn test_format_is_deterministic(index in any::<u32>(), kind_idx in 0usize..6) {
                let kind = HeaderLabel::ALL[kind_idx];
                let parameter = kind.default_parameter();
                prop_assert_eq!(
                    format_header_label(index, kind, parameter),
                    format_header_label(index, kind, parameter)
                );
            }
        }
    }
}
