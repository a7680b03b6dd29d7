//! Recent Documents Module
//!
//! 最近開いたドキュメントをMRU（最近使用した順）で管理するモジュール。
//! 件数の上限は`Preferences::maximum_recent_documents()`に従います。

use std::path::{Path, PathBuf};

use crate::preferences::Preferences;
use crate::settings::{group_key, SettingValue, SettingsStore};

const GROUP: &str = "RecentDocuments";
const KEY: &str = "Documents";

/// 最近開いたドキュメントのリスト（先頭が最新）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentDocuments {
    entries: Vec<PathBuf>,
    capacity: usize,
}

impl RecentDocuments {
    /// 指定された上限で空のリストを生成
    pub fn new(capacity: u32) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity as usize,
        }
    }

    /// ユーザー設定の上限で空のリストを生成
    pub fn with_preferences(preferences: &Preferences) -> Self {
        Self::new(preferences.maximum_recent_documents())
    }

    /// ドキュメントを先頭に追加する
    ///
    /// 既にリストにある場合は先頭へ移動します。上限を超えた古い項目は削除されます。
    pub fn add(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        self.entries.retain(|entry| entry != &path);
        self.entries.insert(0, path);
        self.entries.truncate(self.capacity);
    }

    /// ドキュメントをリストから削除する
    ///
    /// 削除された場合は`true`を返します。
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != path);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 上限を変更し、超過分を削除する
    pub fn set_capacity(&mut self, capacity: u32) {
        self.capacity = capacity as usize;
        self.entries.truncate(self.capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.iter()
    }

    /// 設定ストアから読み込む
    ///
    /// `restore_recent_documents`が無効な場合は空のリストを返します。
    pub fn load(store: &impl SettingsStore, preferences: &Preferences) -> Self {
        let mut recent = Self::with_preferences(preferences);

        if !preferences.restore_recent_documents() {
            tracing::debug!("Restoring recent documents is disabled");
            return recent;
        }

        if let Some(value) = store.value(&group_key(GROUP, KEY)) {
            // 保存順は先頭が最新
            recent.entries = value
                .to_list()
                .into_iter()
                .filter(|entry| !entry.is_empty())
                .map(PathBuf::from)
                .collect();
            recent.entries.truncate(recent.capacity);
        }

        tracing::debug!(count = recent.len(), "Loaded recent documents");
        recent
    }

    /// 設定ストアに保存する
    pub fn save(&self, store: &mut impl SettingsStore) {
        store.remove_group(GROUP);

        let entries = self
            .entries
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        store.set_value(&group_key(GROUP, KEY), SettingValue::List(entries));
    }
}
