//! End-to-end flow: log entries, render and persist a day story, then pull
//! weekly insights, all against a real on-disk store.

use chrono::{Local, NaiveDate};
use moodweave::insights;
use moodweave::model::{Activity, Mood, NewEntry, TimeOfDay};
use moodweave::store::EntryStore;
use moodweave::story::{StoryGenerator, StoryInput};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> EntryStore {
    EntryStore::open(&dir.path().join("journal.db")).expect("store opens")
}

fn check_in(
    date: NaiveDate,
    slot: TimeOfDay,
    mood: Mood,
    activities: &[Activity],
    energy: Option<u8>,
    note: Option<&str>,
) -> NewEntry {
    NewEntry {
        date,
        time_of_day: slot,
        mood,
        emotion_tag: None,
        note: note.map(str::to_string),
        activities: activities.to_vec(),
        energy_level: energy,
    }
}

#[test]
fn a_full_day_flows_from_entries_to_story_to_insights() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let today = Local::now().date_naive();

    store
        .save_mood_entry(check_in(
            today,
            TimeOfDay::Morning,
            Mood::Happy,
            &[Activity::Exercise],
            Some(4),
            None,
        ))
        .expect("morning save");
    store
        .save_mood_entry(check_in(
            today,
            TimeOfDay::Afternoon,
            Mood::Focused,
            &[Activity::Work],
            Some(3),
            None,
        ))
        .expect("afternoon save");
    store
        .save_mood_entry(check_in(
            today,
            TimeOfDay::Evening,
            Mood::Calm,
            &[],
            None,
            Some("slow dinner at home"),
        ))
        .expect("evening save");

    // Render and persist the day's story.
    let entries = store.entries_for_date(today);
    assert_eq!(entries.len(), 3);

    let input = StoryInput::from_entries(today, &entries);
    let story = StoryGenerator::with_rng(StdRng::seed_from_u64(42)).generate_day_story(&input);

    assert!(!story.morning.is_empty());
    assert!(!story.afternoon.is_empty());
    assert!(!story.evening.is_empty());
    assert!(!story.summary.is_empty());
    for text in [&story.morning, &story.afternoon, &story.evening, &story.summary] {
        assert!(!text.contains("{{"), "unresolved placeholder in: {text}");
    }
    assert_eq!(story.moods.evening, Mood::Calm);
    assert_eq!(story.activities, vec![Activity::Exercise, Activity::Work]);
    assert_eq!(story.notes, vec!["slow dinner at home".to_string()]);

    store.save_story(story.clone()).expect("story save");
    let stored = store.story_for_date(today).expect("story readable");
    assert_eq!(stored, story);

    // Re-rendering replaces the stored story rather than stacking a second.
    let rerender =
        StoryGenerator::with_rng(StdRng::seed_from_u64(43)).generate_day_story(&input);
    store.save_story(rerender).expect("story resave");
    assert_eq!(store.stories().len(), 1);

    // The weekly report reflects the day that was just logged.
    let report = insights::weekly_insights(&store);
    assert_eq!(report.dominant_mood, Mood::Happy);
    assert_eq!(
        report
            .mood_counts
            .iter()
            .map(|(_, count)| count)
            .sum::<u32>(),
        3
    );
    assert!(!report.insights.is_empty());
    assert!(report.insights.len() <= 3);
    assert!(report.patterns.len() <= 4);
}

#[test]
fn relogging_a_slot_updates_the_story_input() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let today = Local::now().date_naive();

    store
        .save_mood_entry(check_in(today, TimeOfDay::Morning, Mood::Anxious, &[], None, None))
        .expect("first save");
    store
        .save_mood_entry(check_in(today, TimeOfDay::Morning, Mood::Calm, &[], None, None))
        .expect("replacing save");

    let entries = store.entries_for_date(today);
    assert_eq!(entries.len(), 1);

    let input = StoryInput::from_entries(today, &entries);
    let story = StoryGenerator::with_rng(StdRng::seed_from_u64(1)).generate_day_story(&input);

    // The morning mood forward-fills the whole day.
    assert_eq!(story.moods.morning, Mood::Calm);
    assert_eq!(story.moods.afternoon, Mood::Calm);
    assert_eq!(story.moods.evening, Mood::Calm);
}
