use anyhow::{anyhow, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The fixed mood enumeration. Variant order is load-bearing: dominant-mood
/// ties resolve to the first variant in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Calm,
    Tired,
    Anxious,
    Focused,
    Neutral,
    Excited,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 8] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Tired,
        Mood::Anxious,
        Mood::Focused,
        Mood::Neutral,
        Mood::Excited,
        Mood::Sad,
    ];

    /// Moods treated as positive by streak, trend, and activity-correlation
    /// logic.
    pub const POSITIVE: [Mood; 4] = [Mood::Happy, Mood::Calm, Mood::Excited, Mood::Focused];

    pub fn is_positive(self) -> bool {
        Self::POSITIVE.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Tired => "tired",
            Mood::Anxious => "anxious",
            Mood::Focused => "focused",
            Mood::Neutral => "neutral",
            Mood::Excited => "excited",
            Mood::Sad => "sad",
        }
    }

    /// Descriptive adjective used by the weekly-insight sentences.
    pub fn adjective(self) -> &'static str {
        match self {
            Mood::Happy => "joyful",
            Mood::Calm => "peaceful",
            Mood::Tired => "weary",
            Mood::Anxious => "tense",
            Mood::Focused => "concentrated",
            Mood::Neutral => "balanced",
            Mood::Excited => "energized",
            Mood::Sad => "tender",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Tired => "😴",
            Mood::Anxious => "😰",
            Mood::Focused => "🎯",
            Mood::Neutral => "😐",
            Mood::Excited => "🤩",
            Mood::Sad => "😢",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == raw.trim().to_lowercase())
            .ok_or_else(|| anyhow!("Unknown mood: {raw}. Expected one of: happy, calm, tired, anxious, focused, neutral, excited, sad"))
    }
}

/// A day is partitioned into exactly these three slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
        }
    }

    /// The slot a wall-clock hour falls into; used to pre-select the
    /// interactive prompt default.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => TimeOfDay::Morning,
            12..=17 => TimeOfDay::Afternoon,
            _ => TimeOfDay::Evening,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str() == raw.trim().to_lowercase())
            .ok_or_else(|| anyhow!("Unknown time of day: {raw}. Expected morning, afternoon, or evening"))
    }
}

/// The fixed activity catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Work,
    Social,
    Exercise,
    Creative,
    Rest,
    Nature,
    Learning,
    Family,
}

impl Activity {
    pub const ALL: [Activity; 8] = [
        Activity::Work,
        Activity::Social,
        Activity::Exercise,
        Activity::Creative,
        Activity::Rest,
        Activity::Nature,
        Activity::Learning,
        Activity::Family,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Activity::Work => "work",
            Activity::Social => "social",
            Activity::Exercise => "exercise",
            Activity::Creative => "creative",
            Activity::Rest => "rest",
            Activity::Nature => "nature",
            Activity::Learning => "learning",
            Activity::Family => "family",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Activity::Work => "Work",
            Activity::Social => "Time with others",
            Activity::Exercise => "Exercise",
            Activity::Creative => "Creative time",
            Activity::Rest => "Rest",
            Activity::Nature => "Being in nature",
            Activity::Learning => "Learning",
            Activity::Family => "Family time",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Activity {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == raw.trim().to_lowercase())
            .ok_or_else(|| anyhow!("Unknown activity: {raw}. Expected one of: work, social, exercise, creative, rest, nature, learning, family"))
    }
}

/// One logged observation. Persisted with camelCase keys to match the
/// on-device record layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time_of_day: TimeOfDay,
    pub mood: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<u8>,
    /// Creation instant in epoch milliseconds. Distinct from `date`: window
    /// filters use this, calendar grouping uses `date`.
    pub timestamp: i64,
}

/// Caller-supplied fields of an entry; `id` and `timestamp` are assigned by
/// the store at save time.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub time_of_day: TimeOfDay,
    pub mood: Mood,
    pub emotion_tag: Option<String>,
    pub note: Option<String>,
    pub activities: Vec<Activity>,
    pub energy_level: Option<u8>,
}

impl NewEntry {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(level) = self.energy_level {
            if !(1..=5).contains(&level) {
                bail!("Energy level must be between 1 and 5, got {level}");
            }
        }
        Ok(())
    }
}

/// The moods that fed each segment of a rendered story, after forward-fill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotMoods {
    pub morning: Mood,
    pub afternoon: Mood,
    pub evening: Mood,
}

/// The rendered narrative for one calendar date. At most one per date;
/// writes replace wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStory {
    pub date: NaiveDate,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
    pub summary: String,
    pub moods: SlotMoods,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activities: Vec<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_energy: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Time,
    Activity,
    Energy,
    Streak,
    Trend,
}

/// A tagged detection result surfaced in the weekly insights view.
#[derive(Debug, Clone, Serialize)]
pub struct PatternInsight {
    pub kind: PatternKind,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Logging,
    Mood,
}

#[derive(Debug, Clone, Serialize)]
pub struct StreakInfo {
    pub kind: StreakKind,
    pub count: u32,
    pub description: String,
}

/// Derived weekly report. Recomputed fresh on every request, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyInsight {
    pub dominant_mood: Mood,
    /// All 8 moods are present, zero-default, in enumeration order.
    pub mood_counts: Vec<(Mood, u32)>,
    pub insights: Vec<String>,
    pub patterns: Vec<PatternInsight>,
    pub streaks: Vec<StreakInfo>,
}
