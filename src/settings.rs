//! Settings Store Module
//!
//! 設定値をキー・バリュー形式で永続化するストアを提供するモジュール。
//! キーは `"Group/Key"` 形式のパスで表現します。

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TabulatorError;

const APP_DIR: &str = "tabulator";
const SETTINGS_FILE: &str = "settings.json";

/// 設定値
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl SettingValue {
    /// 論理値として解釈する
    ///
    /// 文字列は大文字小文字を区別せず`"true"`と比較します。
    /// 整数は0以外を`true`、リストは空でなければ`true`とします。
    pub fn to_bool(&self) -> bool {
        match self {
            SettingValue::Bool(b) => *b,
            SettingValue::Int(i) => *i != 0,
            SettingValue::Text(s) => s.eq_ignore_ascii_case("true"),
            SettingValue::List(items) => !items.is_empty(),
        }
    }

    /// 整数として解釈する
    ///
    /// 数値に変換できない場合は`None`を返します。
    pub fn to_int(&self) -> Option<i64> {
        match self {
            SettingValue::Bool(b) => Some(i64::from(*b)),
            SettingValue::Int(i) => Some(*i),
            SettingValue::Text(s) => s.trim().parse().ok(),
            SettingValue::List(_) => None,
        }
    }

    /// 文字列リストとして解釈する
    ///
    /// 単一の文字列は要素数1のリストとして扱います。
    pub fn to_list(&self) -> Vec<String> {
        match self {
            SettingValue::List(items) => items.clone(),
            SettingValue::Text(s) => vec![s.clone()],
            _ => Vec::new(),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        SettingValue::Int(i64::from(value))
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        SettingValue::List(value)
    }
}

/// キー・バリュー形式の設定ストア
pub trait SettingsStore {
    /// キーに対応する値を取得
    fn value(&self, key: &str) -> Option<&SettingValue>;

    /// キーに値を設定
    fn set_value(&mut self, key: &str, value: SettingValue);

    /// グループ配下のすべてのキーを削除
    fn remove_group(&mut self, group: &str);
}

/// `"Group/Key"`形式のキーを組み立てる
pub(crate) fn group_key(group: &str, key: &str) -> String {
    format!("{}/{}", group, key)
}

fn remove_group_from(values: &mut BTreeMap<String, SettingValue>, group: &str) {
    let prefix = format!("{}/", group);
    values.retain(|key, _| !key.starts_with(&prefix));
}

/// メモリ上の設定ストア
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    values: BTreeMap<String, SettingValue>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// 格納されているキーの数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettings {
    fn value(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    fn remove_group(&mut self, group: &str) {
        remove_group_from(&mut self.values, group);
    }
}

/// JSONファイルに永続化される設定ストア
///
/// 変更は`sync()`を呼び出すまでファイルに書き込まれません。
///
/// # 使用例
///
/// ```rust,no_run
/// use tabulator::{JsonSettings, Preferences};
///
/// # fn main() -> Result<(), tabulator::TabulatorError> {
/// let mut settings = JsonSettings::open("settings.json")?;
/// let mut preferences = Preferences::new();
/// preferences.load(&settings);
/// preferences.set_default_cell_count_row(100);
/// preferences.save(&mut settings);
/// settings.sync()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JsonSettings {
    path: PathBuf,
    values: BTreeMap<String, SettingValue>,
}

impl JsonSettings {
    /// 設定ファイルを開く
    ///
    /// ファイルが存在しない場合は空のストアを返します。
    ///
    /// # 発生し得るエラー
    ///
    /// * `TabulatorError::Io`: ファイルの読み込みに失敗した場合
    /// * `TabulatorError::Json`: ファイルの内容が不正なJSONの場合
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TabulatorError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            tracing::debug!("Settings file not found at {}, starting empty", path.display());
            return Ok(Self {
                path,
                values: BTreeMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let values = serde_json::from_str(&content)?;
        tracing::info!("Loaded settings from {}", path.display());

        Ok(Self { path, values })
    }

    /// プラットフォーム標準の設定ファイルを開く
    pub fn open_default() -> Result<Self, TabulatorError> {
        let path = settings_path().ok_or_else(|| {
            TabulatorError::Config("No config directory available".to_string())
        })?;
        Self::open(path)
    }

    /// 設定ファイルのパス
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 現在の値をファイルに書き込む
    ///
    /// 親ディレクトリが存在しない場合は作成します。
    pub fn sync(&self) -> Result<(), TabulatorError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        tracing::info!("Saved settings to {}", self.path.display());

        Ok(())
    }
}

impl SettingsStore for JsonSettings {
    fn value(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }

    fn remove_group(&mut self, group: &str) {
        remove_group_from(&mut self.values, group);
    }
}

/// プラットフォーム標準の設定ディレクトリ
///
/// Unix/macOS:
///   - `XDG_CONFIG_HOME`が設定されている場合: `$XDG_CONFIG_HOME/tabulator`
///   - それ以外: `~/.config/tabulator`
///
/// Windows:
///   - `%APPDATA%\tabulator`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|dir| dir.join(APP_DIR))
    }
}

/// `~/.config/tabulator/settings.json`
pub fn settings_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_value_to_bool() {
        assert!(SettingValue::Bool(true).to_bool());
        assert!(SettingValue::Text("True".to_string()).to_bool());
        assert!(SettingValue::Text("true".to_string()).to_bool());
        assert!(!SettingValue::Text("yes".to_string()).to_bool());
        assert!(SettingValue::Int(1).to_bool());
        assert!(!SettingValue::Int(0).to_bool());
    }

    #[test]
    fn test_setting_value_to_int() {
        assert_eq!(SettingValue::Int(25).to_int(), Some(25));
        assert_eq!(SettingValue::Text(" 50 ".to_string()).to_int(), Some(50));
        assert_eq!(SettingValue::Text("fifty".to_string()).to_int(), None);
        assert_eq!(SettingValue::List(vec![]).to_int(), None);
    }

    #[test]
    fn test_setting_value_untagged_json() {
        let values: BTreeMap<String, SettingValue> = serde_json::from_str(
            r#"{"a": true, "b": 10, "c": "text", "d": ["x", "y"]}"#,
        )
        .unwrap();

        assert_eq!(values["a"], SettingValue::Bool(true));
        assert_eq!(values["b"], SettingValue::Int(10));
        assert_eq!(values["c"], SettingValue::Text("text".to_string()));
        assert_eq!(
            values["d"],
            SettingValue::List(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_memory_settings_remove_group() {
        let mut settings = MemorySettings::new();
        settings.set_value("Preferences/A", SettingValue::Int(1));
        settings.set_value("Preferences/B", SettingValue::Int(2));
        settings.set_value("PreferencesExtra/C", SettingValue::Int(3));
        settings.set_value("Other/D", SettingValue::Int(4));

        settings.remove_group("Preferences");

        assert_eq!(settings.len(), 2);
        assert!(settings.value("Preferences/A").is_none());
        assert!(settings.value("PreferencesExtra/C").is_some());
        assert!(settings.value("Other/D").is_some());
    }

    #[cfg(not(target_os = "windows"))]
    #[test]
    fn test_settings_path_follows_xdg_config_home() {
        let dir = tempfile::TempDir::new().unwrap();
        let previous = std::env::var_os("XDG_CONFIG_HOME");
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let dir_path = config_dir();
        let path = settings_path();
        let settings = JsonSettings::open_default();

        match previous {
            Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }

        let expected = dir.path().join("tabulator").join("settings.json");
        assert_eq!(dir_path, Some(dir.path().join("tabulator")));
        assert_eq!(path.as_deref(), Some(expected.as_path()));
        assert!(expected.ends_with("tabulator/settings.json"));

        let settings = settings.unwrap();
        assert_eq!(settings.path(), expected.as_path());
        assert!(settings.value("Preferences/DefaultCellCountRow").is_none());
        assert!(!expected.exists());
    }

    #[test]
    fn test_group_key() {
        assert_eq!(group_key("Preferences", "Key"), "Preferences/Key");
    }
}
