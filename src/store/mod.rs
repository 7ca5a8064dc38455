pub mod queries;

use crate::model::{DayStory, MoodEntry, NewEntry};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use rusqlite::{Connection, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::warn;
use uuid::Uuid;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Durable store for mood entries and day stories.
///
/// Each collection is one JSON list held under a fixed record key; saves
/// rewrite the whole list. Collections stay small (a few entries per day),
/// so load-all-filter-in-memory is the deliberate design here.
pub struct EntryStore {
    conn: Connection,
}

impl EntryStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create DB directory: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open SQLite DB: {}", path.display()))?;

        let store = Self { conn };
        store.init_schema()?;

        Ok(store)
    }

    pub fn init_schema(&self) -> Result<()> {
        queries::schema_statements()
            .iter()
            .try_for_each(|statement| {
                self.conn
                    .execute(statement, [])
                    .context("Failed to initialize schema")
                    .map(|_| ())
            })
    }

    /// Assigns id and timestamp, replaces any entry occupying the same
    /// (date, time-of-day) slot, and persists the full collection. Write
    /// failures propagate; the store does not retry.
    pub fn save_mood_entry(&self, new: NewEntry) -> Result<MoodEntry> {
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            date: new.date,
            time_of_day: new.time_of_day,
            mood: new.mood,
            emotion_tag: new.emotion_tag,
            note: new.note,
            activities: new.activities,
            energy_level: new.energy_level,
            timestamp: Utc::now().timestamp_millis(),
        };

        let mut entries = self.mood_entries();
        entries.retain(|existing| {
            !(existing.date == entry.date && existing.time_of_day == entry.time_of_day)
        });
        entries.push(entry.clone());

        self.write_record(queries::MOOD_ENTRIES_KEY, &entries)?;

        Ok(entry)
    }

    /// All entries in insertion order. A read or parse failure is swallowed
    /// and logged; the caller sees an empty collection.
    pub fn mood_entries(&self) -> Vec<MoodEntry> {
        self.read_record(queries::MOOD_ENTRIES_KEY)
    }

    pub fn today_moods(&self) -> Vec<MoodEntry> {
        self.entries_for_date(Local::now().date_naive())
    }

    pub fn entries_for_date(&self, date: NaiveDate) -> Vec<MoodEntry> {
        self.mood_entries()
            .into_iter()
            .filter(|entry| entry.date == date)
            .collect()
    }

    /// Entries created within the last 7×24h, by creation timestamp.
    pub fn week_entries(&self) -> Vec<MoodEntry> {
        self.entries_since(Utc::now().timestamp_millis() - 7 * DAY_MS)
    }

    /// Entries created within the last 30×24h.
    pub fn month_entries(&self) -> Vec<MoodEntry> {
        self.entries_since(Utc::now().timestamp_millis() - 30 * DAY_MS)
    }

    fn entries_since(&self, cutoff_ms: i64) -> Vec<MoodEntry> {
        self.mood_entries()
            .into_iter()
            .filter(|entry| entry.timestamp >= cutoff_ms)
            .collect()
    }

    /// Unique dates that have at least one entry, newest first.
    pub fn dates_with_entries(&self) -> Vec<NaiveDate> {
        let dates = self
            .mood_entries()
            .into_iter()
            .map(|entry| entry.date)
            .collect::<BTreeSet<_>>();

        dates.into_iter().rev().collect()
    }

    /// Replace-by-date write of a rendered story.
    pub fn save_story(&self, story: DayStory) -> Result<()> {
        let mut stories = self.stories();
        stories.retain(|existing| existing.date != story.date);
        stories.push(story);

        self.write_record(queries::DAY_STORIES_KEY, &stories)
    }

    pub fn stories(&self) -> Vec<DayStory> {
        self.read_record(queries::DAY_STORIES_KEY)
    }

    pub fn today_story(&self) -> Option<DayStory> {
        self.story_for_date(Local::now().date_naive())
    }

    pub fn story_for_date(&self, date: NaiveDate) -> Option<DayStory> {
        self.stories().into_iter().find(|story| story.date == date)
    }

    /// Irreversibly erases both collections. Reset/testing flows only.
    pub fn clear_all_data(&self) -> Result<()> {
        [queries::MOOD_ENTRIES_KEY, queries::DAY_STORIES_KEY]
            .iter()
            .try_for_each(|key| {
                self.conn
                    .execute("DELETE FROM records WHERE key = ?1", params![key])
                    .with_context(|| format!("Failed to clear record: {key}"))
                    .map(|_| ())
            })
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw: String = match self.conn.query_row(
            "SELECT value FROM records WHERE key = ?1",
            params![key],
            |row| row.get(0),
        ) {
            Ok(value) => value,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Vec::new(),
            Err(error) => {
                warn!(key, error = %error, "record read failed; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(error) => {
                warn!(key, error = %error, "malformed record; treating as empty");
                Vec::new()
            }
        }
    }

    fn write_record<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let value = serde_json::to_string(items)
            .with_context(|| format!("Failed to serialize record: {key}"))?;

        self.conn
            .execute(
                "INSERT INTO records (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value=excluded.value",
                params![key, value],
            )
            .with_context(|| format!("Failed to write record: {key}"))?;

        Ok(())
    }
}
