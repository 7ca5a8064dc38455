//! Schema and record-space keys for the on-device store.
//!
//! All persisted state lives in one key→document table; each value is a
//! serialized JSON list. Collections stay small, so the store trades query
//! granularity for a layout that is trivial to inspect and back up.

pub const CREATE_RECORDS: &str = r#"
CREATE TABLE IF NOT EXISTS records (
  key    TEXT PRIMARY KEY,
  value  TEXT NOT NULL
);
"#;

pub const MOOD_ENTRIES_KEY: &str = "mood_entries";
pub const DAY_STORIES_KEY: &str = "day_stories";

// Reserved for the surrounding app; the core never writes a schema here.
pub const SETTINGS_KEY: &str = "settings";
pub const CUSTOM_MOODS_KEY: &str = "custom_moods";

pub fn schema_statements() -> Vec<&'static str> {
    vec![CREATE_RECORDS]
}
