//! tabulator - Header labels, preferences and document model for a CSV table editor
//!
//! This crate provides the GUI-independent core of a multi-document
//! spreadsheet-style editor: header label generation for row and column
//! headers, user preferences persisted through a key-value settings store,
//! the recently opened documents list, and the document table model.
//!
//! # Quick Start
//!
//! ```rust
//! use tabulator::{format_header_label, HeaderLabel};
//!
//! assert_eq!(format_header_label(0, HeaderLabel::Letter, "upper"), "A");
//! assert_eq!(format_header_label(26, HeaderLabel::Letter, "upper"), "AA");
//! assert_eq!(format_header_label(0, HeaderLabel::Decimal, "1"), "1");
//! assert_eq!(format_header_label(255, HeaderLabel::Hexadecimal, "0x"), "0xFF");
//! ```
//!
//! # Preferences
//!
//! ```rust,no_run
//! use tabulator::{DocumentTable, JsonSettings, Preferences, RecentDocuments};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut settings = JsonSettings::open_default()?;
//!
//!     let mut preferences = Preferences::new();
//!     preferences.load(&settings);
//!
//!     let mut recent = RecentDocuments::load(&settings, &preferences);
//!     recent.add("/home/user/data/sales.csv");
//!
//!     let table = DocumentTable::new(&preferences);
//!     println!("{} x {}", table.column_count(), table.row_count());
//!
//!     preferences.save(&mut settings);
//!     recent.save(&mut settings);
//!     settings.sync()?;
//!
//!     Ok(())
//! }
//! ```

mod api;
mod document;
mod error;
mod formatter;
pub mod logging;
mod preferences;
mod recent;
mod settings;

// 公開API
pub use api::{HeaderAxis, HeaderLabel, LetterCase};
pub use document::{Document, DocumentTable};
pub use error::TabulatorError;
pub use formatter::{format_header_label, format_header_label_code, header_labels};
pub use preferences::{
    Preferences, PreferencesBuilder, CELL_COUNT_RANGE, MAXIMUM_RECENT_DOCUMENTS_RANGE,
};
pub use recent::RecentDocuments;
pub use settings::{
    config_dir, settings_path, JsonSettings, MemorySettings, SettingValue, SettingsStore,
};
