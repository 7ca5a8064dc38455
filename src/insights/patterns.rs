//! Pure pattern and streak detectors over in-memory entry lists.
//!
//! Every detector is stateless and independent; the composition order and
//! the 4-pattern cap live in [`detect_patterns`].

use crate::model::{Mood, MoodEntry, PatternInsight, PatternKind, StreakInfo, StreakKind, TimeOfDay};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const STREAK_LOOKBACK_DAYS: i64 = 30;
const MAX_PATTERNS: usize = 4;

// Slot-specific positive sets for the morning-person / night-owl check.
const MORNING_POSITIVE: [Mood; 3] = [Mood::Happy, Mood::Focused, Mood::Excited];
const EVENING_POSITIVE: [Mood; 3] = [Mood::Happy, Mood::Calm, Mood::Excited];

/// Consecutive calendar days ending at `today` with at least one entry,
/// capped at a 30-day lookback. A gap on day 0 (today) does not end the
/// scan; an evening logger keeps their streak until midnight.
pub fn logging_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
    let logged = entries.iter().map(|entry| entry.date).collect::<HashSet<_>>();

    let mut count = 0;
    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset);
        if logged.contains(&day) {
            count += 1;
        } else if offset > 0 {
            break;
        }
    }

    count
}

/// Length of the leading run of positive-mood entries, newest first.
pub fn positive_mood_streak(entries: &[MoodEntry]) -> u32 {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|left, right| right.timestamp.cmp(&left.timestamp));

    sorted
        .iter()
        .take_while(|entry| entry.mood.is_positive())
        .count() as u32
}

/// The 0–2 streak summaries surfaced in the weekly report: a logging streak
/// of at least 2 days, then a positive-mood streak of at least 3 entries.
pub fn streaks(entries: &[MoodEntry], today: NaiveDate) -> Vec<StreakInfo> {
    let mut found = Vec::new();

    let logging = logging_streak(entries, today);
    if logging >= 2 {
        found.push(StreakInfo {
            kind: StreakKind::Logging,
            count: logging,
            description: format!("You've checked in {logging} days in a row"),
        });
    }

    let positive = positive_mood_streak(entries);
    if positive >= 3 {
        found.push(StreakInfo {
            kind: StreakKind::Mood,
            count: positive,
            description: format!("{positive} positive check-ins in a row"),
        });
    }

    found
}

/// Runs all detectors in fixed order (energy, time-of-day, trend, fatigue)
/// and keeps at most the first 4 results.
pub fn detect_patterns(week: &[MoodEntry], all: &[MoodEntry], now_ms: i64) -> Vec<PatternInsight> {
    let mut patterns = [
        energy_pattern(week),
        time_of_day_pattern(week),
        trend_pattern(all, now_ms),
        fatigue_pattern(week),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    patterns.truncate(MAX_PATTERNS);
    patterns
}

fn energy_pattern(week: &[MoodEntry]) -> Option<PatternInsight> {
    let levels = week
        .iter()
        .filter_map(|entry| entry.energy_level)
        .collect::<Vec<_>>();

    if levels.len() < 3 {
        return None;
    }

    let average = levels.iter().map(|level| f64::from(*level)).sum::<f64>() / levels.len() as f64;

    if average >= 4.0 {
        Some(PatternInsight {
            kind: PatternKind::Energy,
            title: "High energy week".to_string(),
            description: "Your energy has been running high lately.".to_string(),
            icon: "⚡".to_string(),
        })
    } else if average <= 2.0 {
        Some(PatternInsight {
            kind: PatternKind::Energy,
            title: "Low energy week".to_string(),
            description: "Your energy has been low this week. Be gentle with yourself."
                .to_string(),
            icon: "🪫".to_string(),
        })
    } else {
        None
    }
}

// Morning and evening checks are mutually exclusive: the first slot that
// clears the 0.7 bar wins for the week.
fn time_of_day_pattern(week: &[MoodEntry]) -> Option<PatternInsight> {
    let morning = week
        .iter()
        .filter(|entry| entry.time_of_day == TimeOfDay::Morning)
        .collect::<Vec<_>>();
    let evening = week
        .iter()
        .filter(|entry| entry.time_of_day == TimeOfDay::Evening)
        .collect::<Vec<_>>();

    if morning.len() >= 3 && positive_fraction(&morning, &MORNING_POSITIVE) > 0.7 {
        Some(PatternInsight {
            kind: PatternKind::Time,
            title: "Morning person".to_string(),
            description: "Your brightest moods show up in the morning.".to_string(),
            icon: "🌅".to_string(),
        })
    } else if evening.len() >= 3 && positive_fraction(&evening, &EVENING_POSITIVE) > 0.7 {
        Some(PatternInsight {
            kind: PatternKind::Time,
            title: "Night owl".to_string(),
            description: "Evenings are when you come alive.".to_string(),
            icon: "🦉".to_string(),
        })
    } else {
        None
    }
}

/// Compares the positive-mood fraction of the last 7 days against the 7
/// days before that. Both windows need at least 3 entries; a swing of more
/// than 0.2 either way produces a trend pattern.
fn trend_pattern(all: &[MoodEntry], now_ms: i64) -> Option<PatternInsight> {
    let week_ago = now_ms - 7 * DAY_MS;
    let two_weeks_ago = now_ms - 14 * DAY_MS;

    let this_week = all
        .iter()
        .filter(|entry| entry.timestamp > week_ago)
        .collect::<Vec<_>>();
    let prior_week = all
        .iter()
        .filter(|entry| entry.timestamp > two_weeks_ago && entry.timestamp <= week_ago)
        .collect::<Vec<_>>();

    if this_week.len() < 3 || prior_week.len() < 3 {
        return None;
    }

    let delta = positive_fraction(&this_week, &Mood::POSITIVE)
        - positive_fraction(&prior_week, &Mood::POSITIVE);

    if delta > 0.2 {
        Some(PatternInsight {
            kind: PatternKind::Trend,
            title: "On the upswing".to_string(),
            description: "This week felt noticeably brighter than the last.".to_string(),
            icon: "📈".to_string(),
        })
    } else if delta < -0.2 {
        Some(PatternInsight {
            kind: PatternKind::Trend,
            title: "A challenging week".to_string(),
            description: "This week has been harder than the last. That's okay.".to_string(),
            icon: "🌧️".to_string(),
        })
    } else {
        None
    }
}

/// Longest run of consecutive tired/anxious entries within the week,
/// scanning in ascending timestamp order. Runs of 3 or more are reported,
/// with stronger wording from 4 up.
fn fatigue_pattern(week: &[MoodEntry]) -> Option<PatternInsight> {
    let mut sorted = week.to_vec();
    sorted.sort_by_key(|entry| entry.timestamp);

    let mut longest = 0u32;
    let mut current = 0u32;
    for entry in &sorted {
        if matches!(entry.mood, Mood::Tired | Mood::Anxious) {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    if longest < 3 {
        return None;
    }

    let description = if longest >= 4 {
        format!("You've felt really tired or anxious {longest} check-ins in a row. Consider some extra rest.")
    } else {
        format!("You've felt tired or anxious {longest} check-ins in a row.")
    };

    Some(PatternInsight {
        kind: PatternKind::Streak,
        title: "A tiring stretch".to_string(),
        description,
        icon: "🛌".to_string(),
    })
}

fn positive_fraction(entries: &[&MoodEntry], positive: &[Mood]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }

    let hits = entries
        .iter()
        .filter(|entry| positive.contains(&entry.mood))
        .count();

    hits as f64 / entries.len() as f64
}
