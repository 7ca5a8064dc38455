//! Template-driven narrative rendering.
//!
//! The pipeline is state-free: pick a template at random from the pool for
//! the (mood, segment) pair, then resolve placeholders deterministically
//! from the segment's context. Randomness is injected so tests can seed it.

pub mod templates;

use crate::model::{Activity, DayStory, Mood, MoodEntry, SlotMoods, TimeOfDay};
use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

const ACTIVITY_DOING: &str = "{{ACTIVITY_DOING}}";
const ACTIVITY_PAST: &str = "{{ACTIVITY_PAST}}";
const ACTIVITY_EFFECT: &str = "{{ACTIVITY_EFFECT}}";
const ACTIVITY_SUMMARY: &str = "{{ACTIVITY_SUMMARY}}";
const ENERGY_STATE: &str = "{{ENERGY_STATE}}";
const ENERGY_VERB: &str = "{{ENERGY_VERB}}";
const NOTE_REFLECTION: &str = "{{NOTE_REFLECTION}}";

const FALLBACK_DOING: &str = "letting the hours find their own shape";
const FALLBACK_PAST: &str = "a full day";
const FALLBACK_SUMMARY: &str = "its own quiet rhythm";
const FALLBACK_ENERGY_VERB: &str = "moved in its own waves";
const FALLBACK_NOTE: &str = "The rest went unrecorded, and that's fine.";

/// What one day segment knew about itself when it was logged.
#[derive(Debug, Clone)]
pub struct SegmentContext {
    pub mood: Mood,
    pub activities: Vec<Activity>,
    pub energy_level: Option<u8>,
    pub note: Option<String>,
}

impl SegmentContext {
    /// A mood with no trimmings; used for carried-forward segments.
    pub fn bare(mood: Mood) -> Self {
        Self {
            mood,
            activities: Vec::new(),
            energy_level: None,
            note: None,
        }
    }

    pub fn from_entry(entry: &MoodEntry) -> Self {
        Self {
            mood: entry.mood,
            activities: entry.activities.clone(),
            energy_level: entry.energy_level,
            note: entry.note.clone(),
        }
    }
}

/// The three-slot input to a day story. Missing slots are forward-filled
/// from the nearest earlier slot's mood at render time.
#[derive(Debug, Clone)]
pub struct StoryInput {
    pub date: NaiveDate,
    pub morning: Option<SegmentContext>,
    pub afternoon: Option<SegmentContext>,
    pub evening: Option<SegmentContext>,
}

impl StoryInput {
    pub fn from_entries(date: NaiveDate, entries: &[MoodEntry]) -> Self {
        let slot = |wanted: TimeOfDay| {
            entries
                .iter()
                .find(|entry| entry.date == date && entry.time_of_day == wanted)
                .map(SegmentContext::from_entry)
        };

        Self {
            date,
            morning: slot(TimeOfDay::Morning),
            afternoon: slot(TimeOfDay::Afternoon),
            evening: slot(TimeOfDay::Evening),
        }
    }

    /// The forward-fill rule, made explicit: afternoon inherits morning's
    /// mood, evening inherits afternoon's (or morning's); a day with no
    /// context at all renders as neutral.
    fn effective(&self) -> [SegmentContext; 3] {
        let morning = self
            .morning
            .clone()
            .unwrap_or_else(|| SegmentContext::bare(Mood::Neutral));
        let afternoon = self
            .afternoon
            .clone()
            .unwrap_or_else(|| SegmentContext::bare(morning.mood));
        let evening = self
            .evening
            .clone()
            .unwrap_or_else(|| SegmentContext::bare(afternoon.mood));

        [morning, afternoon, evening]
    }
}

pub struct StoryGenerator<R: Rng> {
    rng: R,
}

impl StoryGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for StoryGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> StoryGenerator<R> {
    /// A generator with a caller-supplied random source; seed it for
    /// reproducible template selection.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Renders prose for all three segments plus a summary. The summary is
    /// driven by the evening segment's (possibly carried-forward) mood and
    /// the union of all segments' activities.
    pub fn generate_day_story(&mut self, input: &StoryInput) -> DayStory {
        let [morning, afternoon, evening] = input.effective();

        let activities = union_activities(&[&morning, &afternoon, &evening]);
        let summary = self.render_summary(evening.mood, &activities);

        DayStory {
            date: input.date,
            morning: self.render_segment(TimeOfDay::Morning, &morning),
            afternoon: self.render_segment(TimeOfDay::Afternoon, &afternoon),
            evening: self.render_segment(TimeOfDay::Evening, &evening),
            summary,
            moods: SlotMoods {
                morning: morning.mood,
                afternoon: afternoon.mood,
                evening: evening.mood,
            },
            activities,
            average_energy: average_energy(&[&morning, &afternoon, &evening]),
            notes: [&morning, &afternoon, &evening]
                .into_iter()
                .filter_map(|segment| segment.note.clone())
                .collect(),
        }
    }

    /// One fixed context applied to all three segments; used when no
    /// entries exist for the day yet.
    pub fn generate_simple_story(&mut self, date: NaiveDate, mood: Mood) -> DayStory {
        let context = SegmentContext::bare(mood);
        self.generate_day_story(&StoryInput {
            date,
            morning: Some(context.clone()),
            afternoon: Some(context.clone()),
            evening: Some(context),
        })
    }

    /// Compact one-liner for the home view. A fixed prompt when no mood has
    /// been logged yet.
    pub fn quick_summary(&mut self, mood: Option<Mood>, activities: &[Activity]) -> String {
        let Some(mood) = mood else {
            return "Log a mood to start today's story.".to_string();
        };

        let template = format!(
            "So far, today carries a {} tone, {ACTIVITY_SUMMARY}.",
            mood.adjective()
        );
        fill(&template, ACTIVITY_SUMMARY, &summary_phrase(activities))
    }

    fn render_segment(&mut self, slot: TimeOfDay, context: &SegmentContext) -> String {
        let pool = templates::segment_templates(context.mood, slot);
        let template = pool.choose(&mut self.rng).copied().unwrap_or(pool[0]);
        render(template, context)
    }

    fn render_summary(&mut self, mood: Mood, activities: &[Activity]) -> String {
        let pool = templates::summary_templates(mood);
        let template = pool.choose(&mut self.rng).copied().unwrap_or(pool[0]);
        let text = fill(template, ACTIVITY_SUMMARY, &summary_phrase(activities));
        tidy(&text)
    }
}

/// Deterministic placeholder resolution for one segment. Placeholder fills
/// with an empty value also swallow a leading ", " so trailing clauses
/// collapse cleanly.
fn render(template: &str, context: &SegmentContext) -> String {
    let activity = context.activities.first().map(|a| templates::activity_phrases(*a));
    let (doing, past, effect) = match &activity {
        Some(phrases) => (phrases.doing, phrases.past, phrases.effect),
        None => (FALLBACK_DOING, FALLBACK_PAST, ""),
    };

    let energy = context.energy_level.map(templates::energy_phrases);
    let (energy_state, energy_verb) = match &energy {
        Some(phrases) => (phrases.state, phrases.verb),
        None => ("", FALLBACK_ENERGY_VERB),
    };

    let reflection = match context.note.as_deref().map(str::trim) {
        Some(note) if !note.is_empty() => format!("You noted, \"{note}\"."),
        _ => FALLBACK_NOTE.to_string(),
    };

    let mut text = template.to_string();
    text = fill(&text, ACTIVITY_DOING, doing);
    text = fill(&text, ACTIVITY_PAST, past);
    text = fill(&text, ACTIVITY_EFFECT, effect);
    text = fill(&text, ACTIVITY_SUMMARY, &summary_phrase(&context.activities));
    text = fill(&text, ENERGY_STATE, energy_state);
    text = fill(&text, ENERGY_VERB, energy_verb);
    text = fill(&text, NOTE_REFLECTION, &reflection);

    tidy(&text)
}

fn fill(text: &str, token: &str, value: &str) -> String {
    if value.is_empty() {
        text.replace(&format!(", {token}"), "").replace(token, "")
    } else {
        text.replace(token, value)
    }
}

fn tidy(text: &str) -> String {
    text.replace("  ", " ").trim().to_string()
}

/// Readable phrase for a set of activities: "work", "work and rest",
/// "work, rest, and movement". Empty sets get a generic phrase.
fn summary_phrase(activities: &[Activity]) -> String {
    let names = activities
        .iter()
        .map(|activity| templates::activity_phrases(*activity).summary)
        .collect::<Vec<_>>();

    match names.as_slice() {
        [] => FALLBACK_SUMMARY.to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", ")),
    }
}

fn union_activities(segments: &[&SegmentContext]) -> Vec<Activity> {
    let mut union = Vec::new();
    for segment in segments {
        for activity in &segment.activities {
            if !union.contains(activity) {
                union.push(*activity);
            }
        }
    }
    union
}

fn average_energy(segments: &[&SegmentContext]) -> Option<f64> {
    let levels = segments
        .iter()
        .filter_map(|segment| segment.energy_level)
        .collect::<Vec<_>>();

    if levels.is_empty() {
        return None;
    }

    Some(levels.iter().map(|level| f64::from(*level)).sum::<f64>() / levels.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::{SegmentContext, StoryGenerator, StoryInput, render, summary_phrase};
    use crate::model::{Activity, Mood, MoodEntry, TimeOfDay};
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use uuid::Uuid;

    fn date() -> NaiveDate {
        "2024-01-01".parse().expect("date")
    }

    fn entry(slot: TimeOfDay, mood: Mood) -> MoodEntry {
        MoodEntry {
            id: Uuid::new_v4(),
            date: date(),
            time_of_day: slot,
            mood,
            emotion_tag: None,
            note: None,
            activities: Vec::new(),
            energy_level: None,
            timestamp: 0,
        }
    }

    fn seeded() -> StoryGenerator<StdRng> {
        StoryGenerator::with_rng(StdRng::seed_from_u64(7))
    }

    #[test]
    fn every_template_renders_clean_with_a_bare_context() {
        for mood in Mood::ALL {
            for slot in TimeOfDay::ALL {
                for template in super::templates::segment_templates(mood, slot) {
                    let text = render(template, &SegmentContext::bare(mood));
                    assert!(!text.is_empty(), "empty render for {mood}/{slot}");
                    assert!(
                        !text.contains("{{") && !text.contains("}}"),
                        "unresolved placeholder in: {text}"
                    );
                    assert!(!text.contains(", ."), "stray comma in: {text}");
                    assert!(!text.contains(" ."), "dangling period in: {text}");
                }
            }
        }
    }

    #[test]
    fn every_template_renders_clean_with_a_full_context() {
        let context = SegmentContext {
            mood: Mood::Happy,
            activities: vec![Activity::Creative, Activity::Nature],
            energy_level: Some(4),
            note: Some("tried the new studio".to_string()),
        };

        for mood in Mood::ALL {
            for slot in TimeOfDay::ALL {
                for template in super::templates::segment_templates(mood, slot) {
                    let text = render(template, &context);
                    assert!(!text.contains("{{"), "unresolved placeholder in: {text}");
                }
            }
        }
    }

    #[test]
    fn activity_and_energy_phrases_appear_when_supplied() {
        let context = SegmentContext {
            mood: Mood::Calm,
            activities: vec![Activity::Exercise],
            energy_level: Some(5),
            note: None,
        };
        let text = render(
            "You eased into the day, {{ACTIVITY_DOING}}, {{ENERGY_STATE}}.",
            &context,
        );
        assert_eq!(
            text,
            "You eased into the day, moving your body, practically buzzing."
        );
    }

    #[test]
    fn note_is_quoted_verbatim() {
        let context = SegmentContext {
            mood: Mood::Sad,
            activities: Vec::new(),
            energy_level: None,
            note: Some("  long phone call  ".to_string()),
        };
        let text = render("The day wound down. {{NOTE_REFLECTION}}", &context);
        assert_eq!(text, "The day wound down. You noted, \"long phone call\".");
    }

    #[test]
    fn blank_note_falls_back_to_the_generic_closing() {
        let context = SegmentContext {
            mood: Mood::Sad,
            activities: Vec::new(),
            energy_level: None,
            note: Some("   ".to_string()),
        };
        let text = render("{{NOTE_REFLECTION}}", &context);
        assert_eq!(text, super::FALLBACK_NOTE);
    }

    #[test]
    fn missing_segments_carry_the_previous_mood_forward() {
        let input = StoryInput {
            date: date(),
            morning: Some(SegmentContext::bare(Mood::Excited)),
            afternoon: None,
            evening: None,
        };

        let story = seeded().generate_day_story(&input);
        assert_eq!(story.moods.morning, Mood::Excited);
        assert_eq!(story.moods.afternoon, Mood::Excited);
        assert_eq!(story.moods.evening, Mood::Excited);
    }

    #[test]
    fn empty_input_defaults_to_neutral() {
        let input = StoryInput {
            date: date(),
            morning: None,
            afternoon: None,
            evening: None,
        };

        let story = seeded().generate_day_story(&input);
        assert_eq!(story.moods.morning, Mood::Neutral);
        assert_eq!(story.moods.evening, Mood::Neutral);
    }

    #[test]
    fn full_day_produces_three_segments_and_an_evening_led_summary() {
        let entries = [
            entry(TimeOfDay::Morning, Mood::Happy),
            entry(TimeOfDay::Afternoon, Mood::Focused),
            entry(TimeOfDay::Evening, Mood::Calm),
        ];
        let input = StoryInput::from_entries(date(), &entries);
        let story = seeded().generate_day_story(&input);

        for segment in [&story.morning, &story.afternoon, &story.evening, &story.summary] {
            assert!(!segment.is_empty());
            assert!(!segment.contains("{{"), "unresolved placeholder in: {segment}");
        }
        assert_eq!(story.moods.evening, Mood::Calm);
    }

    #[test]
    fn same_seed_reproduces_the_same_story() {
        let entries = [
            entry(TimeOfDay::Morning, Mood::Tired),
            entry(TimeOfDay::Evening, Mood::Calm),
        ];
        let input = StoryInput::from_entries(date(), &entries);

        let first = seeded().generate_day_story(&input);
        let second = seeded().generate_day_story(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn story_aggregates_activities_energy_and_notes() {
        let input = StoryInput {
            date: date(),
            morning: Some(SegmentContext {
                mood: Mood::Happy,
                activities: vec![Activity::Work],
                energy_level: Some(4),
                note: Some("first note".to_string()),
            }),
            afternoon: Some(SegmentContext {
                mood: Mood::Happy,
                activities: vec![Activity::Work, Activity::Social],
                energy_level: Some(2),
                note: None,
            }),
            evening: None,
        };

        let story = seeded().generate_day_story(&input);
        assert_eq!(story.activities, vec![Activity::Work, Activity::Social]);
        assert_eq!(story.average_energy, Some(3.0));
        assert_eq!(story.notes, vec!["first note".to_string()]);
    }

    #[test]
    fn simple_story_renders_all_segments_from_one_mood() {
        let story = seeded().generate_simple_story(date(), Mood::Neutral);
        assert!(!story.morning.is_empty());
        assert!(!story.afternoon.is_empty());
        assert!(!story.evening.is_empty());
        assert_eq!(story.moods.morning, Mood::Neutral);
    }

    #[test]
    fn quick_summary_prompts_when_no_mood_is_set() {
        let text = seeded().quick_summary(None, &[]);
        assert_eq!(text, "Log a mood to start today's story.");
    }

    #[test]
    fn quick_summary_names_the_mood_and_activities() {
        let text = seeded().quick_summary(Some(Mood::Happy), &[Activity::Nature]);
        assert!(text.contains("joyful"));
        assert!(text.contains("the outdoors"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn summary_phrase_lists_up_to_three_activities() {
        assert_eq!(summary_phrase(&[]), "its own quiet rhythm");
        assert_eq!(summary_phrase(&[Activity::Rest]), "rest");
        assert_eq!(
            summary_phrase(&[Activity::Rest, Activity::Nature]),
            "rest and the outdoors"
        );
        assert_eq!(
            summary_phrase(&[Activity::Rest, Activity::Nature, Activity::Work]),
            "rest, the outdoors, and work"
        );
    }
}
