mod cli;

use crate::cli::{Cli, Commands, ConfigCommands};
use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, Timelike};
use clap::Parser;
use moodweave::config::Config;
use moodweave::insights;
use moodweave::model::{Activity, DayStory, Mood, MoodEntry, NewEntry, TimeOfDay};
use moodweave::store::EntryStore;
use moodweave::story::{StoryGenerator, StoryInput};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Log {
            mood,
            time,
            energy,
            activities,
            note,
            tag,
            date,
        } => handle_log(mood, time, energy, activities, note, tag, date),
        Commands::Today => handle_today(),
        Commands::Story { date } => handle_story(date),
        Commands::Insights { json } => handle_insights(json),
        Commands::History { limit } => handle_history(limit),
        Commands::Config { command } => handle_config_command(command),
        Commands::Status => handle_status(),
        Commands::Clear { yes } => handle_clear(yes),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_log(
    mood: Option<String>,
    time: Option<String>,
    energy: Option<u8>,
    activities: Vec<String>,
    note: Option<String>,
    tag: Option<String>,
    date: Option<String>,
) -> Result<()> {
    let config = load_or_default_config()?;
    let target_date = parse_optional_date(date)?;

    let new_entry = match mood {
        Some(raw) => NewEntry {
            date: target_date,
            time_of_day: match time {
                Some(raw) => raw.parse()?,
                None => TimeOfDay::from_hour(Local::now().hour()),
            },
            mood: raw.parse()?,
            emotion_tag: tag,
            note,
            activities: activities
                .iter()
                .map(|raw| raw.parse::<Activity>())
                .collect::<Result<Vec<_>>>()?,
            energy_level: energy,
        },
        None => cli::prompt::run_log_prompt(target_date)?,
    };
    new_entry.validate()?;

    let store = open_store(&config)?;
    let entry = store.save_mood_entry(new_entry)?;

    println!(
        "Logged {} {} for {} ({})",
        entry.mood.emoji(),
        entry.mood,
        entry.date,
        entry.time_of_day
    );

    if config.show_quick_summary && entry.date == Local::now().date_naive() {
        let today = store.today_moods();
        println!("{}", quick_summary_line(&today));
    }

    Ok(())
}

fn handle_today() -> Result<()> {
    let config = load_or_default_config()?;
    let store = open_store(&config)?;
    let entries = store.today_moods();

    println!("Today, {}", Local::now().date_naive());
    if entries.is_empty() {
        println!("- no check-ins yet");
    }
    for slot in TimeOfDay::ALL {
        if let Some(entry) = entries.iter().find(|entry| entry.time_of_day == slot) {
            println!("- {}", format_entry_line(entry));
        }
    }

    println!("{}", quick_summary_line(&entries));
    Ok(())
}

fn handle_story(date: Option<String>) -> Result<()> {
    let config = load_or_default_config()?;
    let target_date = parse_optional_date(date)?;
    let store = open_store(&config)?;
    let entries = store.entries_for_date(target_date);

    let mut generator = StoryGenerator::new();
    let story = if entries.is_empty() {
        println!("No check-ins for {target_date}; here's a blank-page story.\n");
        generator.generate_simple_story(target_date, Mood::Neutral)
    } else {
        let story = generator.generate_day_story(&StoryInput::from_entries(target_date, &entries));
        store.save_story(story.clone())?;
        story
    };

    print_story(&story);
    Ok(())
}

fn handle_insights(json: bool) -> Result<()> {
    let config = load_or_default_config()?;
    let store = open_store(&config)?;
    let report = insights::weekly_insights(&store);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize insights")?
        );
        return Ok(());
    }

    println!("This week");
    println!(
        "- dominant mood: {} {}",
        report.dominant_mood.emoji(),
        report.dominant_mood
    );

    let counted = report
        .mood_counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(mood, count)| format!("{mood} {count}"))
        .collect::<Vec<_>>();
    if !counted.is_empty() {
        println!("- check-ins: {}", counted.join(", "));
    }

    for insight in &report.insights {
        println!("- {insight}");
    }

    if !report.patterns.is_empty() {
        println!("\nPatterns");
        for pattern in &report.patterns {
            println!("- {} {}: {}", pattern.icon, pattern.title, pattern.description);
        }
    }

    if !report.streaks.is_empty() {
        println!("\nStreaks");
        for streak in &report.streaks {
            println!("- 🔥 {}", streak.description);
        }
    }

    Ok(())
}

fn handle_history(limit: Option<usize>) -> Result<()> {
    let config = load_or_default_config()?;
    let store = open_store(&config)?;
    let limit = limit.unwrap_or(config.history_limit);

    let dates = store.dates_with_entries();
    if dates.is_empty() {
        println!("No check-ins yet. Start with: moodweave log");
        return Ok(());
    }

    for date in dates.into_iter().take(limit) {
        let entries = store.entries_for_date(date);
        let moods = TimeOfDay::ALL
            .iter()
            .filter_map(|slot| {
                entries
                    .iter()
                    .find(|entry| entry.time_of_day == *slot)
                    .map(|entry| entry.mood.emoji())
            })
            .collect::<Vec<_>>()
            .join(" ");
        let story_marker = if store.story_for_date(date).is_some() {
            "  [story]"
        } else {
            ""
        };
        println!("{date}  {moods}{story_marker}");
    }

    Ok(())
}

fn handle_config_command(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Set { key, value } => {
            let mut config = load_or_default_config()?;
            config.set_value(&key, &value)?;
            config.ensure_bootstrap_files()?;
            config.save()?;

            println!("Config saved: {key} = {value}");
            Ok(())
        }
        ConfigCommands::Get { key } => {
            let config = load_or_default_config()?;
            let value = config
                .get_value(&key)
                .with_context(|| format!("Unsupported config key: {key}"))?;

            println!("{value}");
            Ok(())
        }
    }
}

fn handle_status() -> Result<()> {
    let config = load_or_default_config()?;
    let store = open_store(&config)?;

    let entries = store.mood_entries();
    let dates = store.dates_with_entries();
    let stories = store.stories();

    println!("Moodweave status");
    println!("- config: {}", Config::config_path()?.display());
    println!("- db_path: {}", config.db_path.display());
    println!("- total_check_ins: {}", entries.len());
    println!("- days_with_entries: {}", dates.len());
    println!(
        "- latest_entry_date: {}",
        dates
            .first()
            .map(|date| date.to_string())
            .unwrap_or_else(|| "none".to_string())
    );
    println!("- stories_saved: {}", stories.len());

    Ok(())
}

fn handle_clear(yes: bool) -> Result<()> {
    if !yes {
        bail!("This erases every entry and story. Re-run with --yes to confirm.");
    }

    let config = load_or_default_config()?;
    let store = open_store(&config)?;
    store.clear_all_data()?;

    println!("All journal data erased.");
    Ok(())
}

fn print_story(story: &DayStory) {
    println!("Story for {}", story.date);
    println!("\nMorning\n  {}", story.morning);
    println!("\nAfternoon\n  {}", story.afternoon);
    println!("\nEvening\n  {}", story.evening);
    println!("\nSummary\n  {}", story.summary);
}

fn format_entry_line(entry: &MoodEntry) -> String {
    let mut line = format!(
        "{}: {} {}",
        entry.time_of_day,
        entry.mood.emoji(),
        entry.mood
    );
    if let Some(level) = entry.energy_level {
        line.push_str(&format!(" (energy {level})"));
    }
    if !entry.activities.is_empty() {
        let names = entry
            .activities
            .iter()
            .map(|activity| activity.as_str())
            .collect::<Vec<_>>();
        line.push_str(&format!(" [{}]", names.join(", ")));
    }
    if let Some(note) = &entry.note {
        line.push_str(&format!(" \"{note}\""));
    }
    line
}

fn quick_summary_line(today: &[MoodEntry]) -> String {
    let latest = today.iter().max_by_key(|entry| entry.timestamp);
    let activities = today
        .iter()
        .flat_map(|entry| entry.activities.iter().copied())
        .fold(Vec::new(), |mut union, activity| {
            if !union.contains(&activity) {
                union.push(activity);
            }
            union
        });

    StoryGenerator::new().quick_summary(latest.map(|entry| entry.mood), &activities)
}

fn parse_optional_date(input: Option<String>) -> Result<NaiveDate> {
    input
        .as_deref()
        .map(|date| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("Invalid date format: {date}. Example: 2026-08-28"))
        })
        .transpose()?
        .map_or_else(|| Ok(Local::now().date_naive()), Ok)
}

fn open_store(config: &Config) -> Result<EntryStore> {
    EntryStore::open(&config.db_path)
}

fn load_or_default_config() -> Result<Config> {
    Config::load().or_else(|_| {
        let config = Config::default();
        config.ensure_bootstrap_files()?;
        config.save()?;
        Ok(config)
    })
}
