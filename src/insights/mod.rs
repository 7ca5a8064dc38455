pub mod patterns;

use crate::model::{Activity, Mood, MoodEntry, TimeOfDay, WeeklyInsight};
use crate::store::EntryStore;
use chrono::{Local, NaiveDate, Utc};

const MAX_TEXT_INSIGHTS: usize = 3;

// Moods counted as restful for the evening-peace sentence.
const EVENING_PEACE: [Mood; 3] = [Mood::Calm, Mood::Happy, Mood::Sad];

/// Computes the weekly report from the injected store. Always recomputed
/// fresh; nothing here is persisted.
pub fn weekly_insights(store: &EntryStore) -> WeeklyInsight {
    build_weekly_insights(
        &store.week_entries(),
        &store.mood_entries(),
        Local::now().date_naive(),
        Utc::now().timestamp_millis(),
    )
}

/// Pure composition over already-loaded collections, split out so tests can
/// pin the clock.
pub fn build_weekly_insights(
    week: &[MoodEntry],
    all: &[MoodEntry],
    today: NaiveDate,
    now_ms: i64,
) -> WeeklyInsight {
    let mood_counts = tally_moods(week);
    let dominant_mood = dominant_mood(&mood_counts);

    WeeklyInsight {
        dominant_mood,
        mood_counts,
        insights: free_text_insights(week, dominant_mood),
        patterns: patterns::detect_patterns(week, all, now_ms),
        streaks: patterns::streaks(all, today),
    }
}

/// Occurrence count per mood across the week, every mood present with a
/// zero default, in enumeration order.
fn tally_moods(week: &[MoodEntry]) -> Vec<(Mood, u32)> {
    Mood::ALL
        .into_iter()
        .map(|mood| {
            let count = week.iter().filter(|entry| entry.mood == mood).count() as u32;
            (mood, count)
        })
        .collect()
}

// Strictly-highest count wins; ties resolve to the earlier mood in the
// enumeration. All-zero weeks default to neutral.
fn dominant_mood(counts: &[(Mood, u32)]) -> Mood {
    let mut best = (Mood::Neutral, 0);
    for (mood, count) in counts {
        if *count > best.1 {
            best = (*mood, *count);
        }
    }
    best.0
}

/// Up to 3 free-text sentences, in fixed rule order: the dominant-mood
/// sentence always leads, then evening peace, heavy mornings, and
/// activity-correlation sentences in order of first appearance.
fn free_text_insights(week: &[MoodEntry], dominant: Mood) -> Vec<String> {
    let mut insights = vec![format!(
        "Your week has carried a mostly {} tone.",
        dominant.adjective()
    )];

    let evenings = week
        .iter()
        .filter(|entry| entry.time_of_day == TimeOfDay::Evening)
        .collect::<Vec<_>>();
    if !evenings.is_empty() {
        let peaceful = evenings
            .iter()
            .filter(|entry| EVENING_PEACE.contains(&entry.mood))
            .count();
        if peaceful * 2 > evenings.len() {
            insights.push("Evenings seem to bring you peace.".to_string());
        }
    }

    let mornings = week
        .iter()
        .filter(|entry| entry.time_of_day == TimeOfDay::Morning)
        .collect::<Vec<_>>();
    if !mornings.is_empty() {
        let tired = mornings
            .iter()
            .filter(|entry| entry.mood == Mood::Tired)
            .count();
        if tired * 2 > mornings.len() {
            insights.push("Mornings have been feeling heavy. A softer start might help.".to_string());
        }
    }

    for activity in activities_by_first_appearance(week) {
        let moods = week
            .iter()
            .filter(|entry| entry.activities.contains(&activity))
            .map(|entry| entry.mood)
            .collect::<Vec<_>>();
        let positive = moods.iter().filter(|mood| mood.is_positive()).count();
        if positive * 2 > moods.len() {
            insights.push(format!(
                "{} seems to lift your spirits.",
                activity.display_name()
            ));
        }
    }

    insights.truncate(MAX_TEXT_INSIGHTS);
    insights
}

fn activities_by_first_appearance(week: &[MoodEntry]) -> Vec<Activity> {
    let mut seen = Vec::new();
    for entry in week {
        for activity in &entry.activities {
            if !seen.contains(activity) {
                seen.push(*activity);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::{build_weekly_insights, dominant_mood, free_text_insights, tally_moods};
    use crate::model::{Activity, Mood, MoodEntry, TimeOfDay};
    use chrono::NaiveDate;
    use uuid::Uuid;

    const NOW: i64 = 1_700_000_000_000;

    fn entry(slot: TimeOfDay, mood: Mood) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            date: today(),
            time_of_day: slot,
            mood,
            emotion_tag: None,
            note: None,
            activities: Vec::new(),
            energy_level: None,
            timestamp: NOW,
        }
    }

    fn with_activities(slot: TimeOfDay, mood: Mood, activities: &[Activity]) -> MoodEntry {
        let mut entry = entry(slot, mood);
        entry.activities = activities.to_vec();
        entry
    }

    fn today() -> NaiveDate {
        "2024-06-15".parse().expect("date")
    }

    #[test]
    fn tally_lists_all_moods_with_zero_defaults() {
        let counts = tally_moods(&[entry(TimeOfDay::Morning, Mood::Sad)]);
        assert_eq!(counts.len(), 8);
        assert_eq!(counts[7], (Mood::Sad, 1));
        assert_eq!(counts[0], (Mood::Happy, 0));
    }

    #[test]
    fn dominant_mood_tie_breaks_on_enumeration_order() {
        let week = [
            entry(TimeOfDay::Morning, Mood::Calm),
            entry(TimeOfDay::Afternoon, Mood::Happy),
            entry(TimeOfDay::Evening, Mood::Calm),
            entry(TimeOfDay::Morning, Mood::Happy),
        ];
        // happy and calm are tied at 2; happy is enumerated first.
        assert_eq!(dominant_mood(&tally_moods(&week)), Mood::Happy);
    }

    #[test]
    fn empty_week_defaults_to_neutral() {
        assert_eq!(dominant_mood(&tally_moods(&[])), Mood::Neutral);
    }

    #[test]
    fn dominant_sentence_always_leads() {
        let insights = free_text_insights(&[], Mood::Neutral);
        assert_eq!(insights.len(), 1);
        assert!(insights[0].contains("balanced"));
    }

    #[test]
    fn peaceful_evenings_are_noticed() {
        let week = [
            entry(TimeOfDay::Evening, Mood::Calm),
            entry(TimeOfDay::Evening, Mood::Sad),
            entry(TimeOfDay::Evening, Mood::Tired),
        ];
        let insights = free_text_insights(&week, Mood::Calm);
        assert!(insights.iter().any(|line| line.contains("Evenings")));
    }

    #[test]
    fn heavy_mornings_are_noticed() {
        let week = [
            entry(TimeOfDay::Morning, Mood::Tired),
            entry(TimeOfDay::Morning, Mood::Tired),
            entry(TimeOfDay::Morning, Mood::Happy),
        ];
        let insights = free_text_insights(&week, Mood::Tired);
        assert!(insights.iter().any(|line| line.contains("Mornings")));
    }

    #[test]
    fn uplifting_activities_are_noticed_in_first_appearance_order() {
        let week = [
            with_activities(TimeOfDay::Morning, Mood::Happy, &[Activity::Exercise]),
            with_activities(TimeOfDay::Afternoon, Mood::Excited, &[Activity::Exercise]),
            with_activities(TimeOfDay::Evening, Mood::Tired, &[Activity::Work]),
        ];
        let insights = free_text_insights(&week, Mood::Happy);
        assert!(insights.iter().any(|line| line.contains("Exercise")));
        assert!(!insights.iter().any(|line| line.contains("Work")));
    }

    #[test]
    fn insights_are_capped_at_three() {
        let week = [
            with_activities(TimeOfDay::Evening, Mood::Calm, &[Activity::Rest]),
            with_activities(TimeOfDay::Morning, Mood::Tired, &[Activity::Nature]),
            with_activities(TimeOfDay::Morning, Mood::Tired, &[]),
            with_activities(TimeOfDay::Afternoon, Mood::Happy, &[Activity::Rest, Activity::Nature]),
        ];
        let insights = free_text_insights(&week, Mood::Tired);
        assert_eq!(insights.len(), 3);
    }

    #[test]
    fn report_composes_counts_insights_and_streaks() {
        let week = vec![
            entry(TimeOfDay::Morning, Mood::Happy),
            entry(TimeOfDay::Afternoon, Mood::Happy),
            entry(TimeOfDay::Evening, Mood::Calm),
        ];
        let report = build_weekly_insights(&week, &week, today(), NOW);

        assert_eq!(report.dominant_mood, Mood::Happy);
        assert_eq!(report.mood_counts.iter().map(|(_, n)| n).sum::<u32>(), 3);
        assert!(!report.insights.is_empty());
        assert!(report.insights.len() <= 3);
        assert!(report.patterns.len() <= 4);
        // Three positive entries in a row qualifies as a mood streak.
        assert!(report.streaks.iter().any(|streak| streak.count == 3));
    }
}
