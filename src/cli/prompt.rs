use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Timelike};
use dialoguer::{Input, MultiSelect, Select, theme::ColorfulTheme};
use moodweave::model::{Activity, Mood, NewEntry, TimeOfDay};

pub const MAX_NOTE_CHARS: usize = 200;

/// Interactive check-in, used when `log` is run without `--mood`.
pub fn run_log_prompt(date: NaiveDate) -> Result<NewEntry> {
    let theme = ColorfulTheme::default();

    let mood_items = Mood::ALL
        .iter()
        .map(|mood| format!("{} {}", mood.emoji(), mood.as_str()))
        .collect::<Vec<_>>();
    let mood_index = Select::with_theme(&theme)
        .with_prompt("How are you feeling?")
        .default(0)
        .items(&mood_items)
        .interact()
        .context("Failed to read mood selection")?;
    let mood = Mood::ALL[mood_index];

    let default_slot = TimeOfDay::from_hour(Local::now().hour());
    let slot_index = Select::with_theme(&theme)
        .with_prompt("Which part of the day is this for?")
        .default(
            TimeOfDay::ALL
                .iter()
                .position(|slot| *slot == default_slot)
                .unwrap_or(0),
        )
        .items(&TimeOfDay::ALL.map(TimeOfDay::as_str))
        .interact()
        .context("Failed to read time-of-day selection")?;
    let time_of_day = TimeOfDay::ALL[slot_index];

    let activity_items = Activity::ALL
        .iter()
        .map(|activity| activity.display_name())
        .collect::<Vec<_>>();
    let selected = MultiSelect::with_theme(&theme)
        .with_prompt("What have you been up to? (space to toggle, enter to confirm)")
        .items(&activity_items)
        .interact()
        .context("Failed to read activity selection")?;
    let activities = selected
        .into_iter()
        .map(|index| Activity::ALL[index])
        .collect::<Vec<_>>();

    let energy_input: String = Input::with_theme(&theme)
        .with_prompt("Energy level 1-5 (empty to skip)")
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                return Ok(());
            }
            match input.trim().parse::<u8>() {
                Ok(1..=5) => Ok(()),
                _ => Err("Enter a number from 1 to 5, or leave empty"),
            }
        })
        .interact_text()
        .context("Failed to read energy level")?;
    let energy_level = energy_input.trim().parse::<u8>().ok();

    let note_input: String = Input::with_theme(&theme)
        .with_prompt("A short note (empty to skip)")
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            if input.chars().count() > MAX_NOTE_CHARS {
                Err(format!("Keep the note under {MAX_NOTE_CHARS} characters"))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read note")?;
    let note = (!note_input.trim().is_empty()).then(|| note_input.trim().to_string());

    let tag_input: String = Input::with_theme(&theme)
        .with_prompt("Emotion tag (empty to skip)")
        .allow_empty(true)
        .interact_text()
        .context("Failed to read emotion tag")?;
    let emotion_tag = (!tag_input.trim().is_empty()).then(|| tag_input.trim().to_string());

    Ok(NewEntry {
        date,
        time_of_day,
        mood,
        emotion_tag,
        note,
        activities,
        energy_level,
    })
}
