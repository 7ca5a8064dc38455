//! Template pools and phrase tables for the narrative generator.
//!
//! Each (mood, segment) pair owns a pool of 5 templates; summaries draw
//! from a 4-template pool per mood. Placeholders are resolved by
//! `story::render`; a template may use any subset of them:
//! `{{ACTIVITY_DOING}}`, `{{ACTIVITY_PAST}}`, `{{ACTIVITY_EFFECT}}`,
//! `{{ACTIVITY_SUMMARY}}`, `{{ENERGY_STATE}}`, `{{ENERGY_VERB}}`,
//! `{{NOTE_REFLECTION}}`.

use crate::model::{Activity, Mood, TimeOfDay};

pub struct ActivityPhrases {
    /// Participial clause: "working through your tasks".
    pub doing: &'static str,
    /// Noun phrase for looking back: "a stretch of work".
    pub past: &'static str,
    /// Trailing clause: "and it gave the day a steady frame".
    pub effect: &'static str,
    /// Short noun for summaries: "work".
    pub summary: &'static str,
}

pub struct EnergyPhrases {
    /// Participial clause: "running on empty".
    pub state: &'static str,
    /// Verb phrase following "your energy": "held steady".
    pub verb: &'static str,
}

pub fn activity_phrases(activity: Activity) -> ActivityPhrases {
    match activity {
        Activity::Work => ActivityPhrases {
            doing: "working through your tasks",
            past: "a stretch of work",
            effect: "and it gave the day a steady frame",
            summary: "work",
        },
        Activity::Social => ActivityPhrases {
            doing: "spending time with people",
            past: "time with others",
            effect: "and the company warmed you",
            summary: "good company",
        },
        Activity::Exercise => ActivityPhrases {
            doing: "moving your body",
            past: "a good workout",
            effect: "and your body thanked you for it",
            summary: "movement",
        },
        Activity::Creative => ActivityPhrases {
            doing: "making something of your own",
            past: "some creative time",
            effect: "and it left you a little lighter",
            summary: "creative work",
        },
        Activity::Rest => ActivityPhrases {
            doing: "taking it slow",
            past: "a slow stretch of rest",
            effect: "and it softened the edges of the day",
            summary: "rest",
        },
        Activity::Nature => ActivityPhrases {
            doing: "getting some fresh air",
            past: "time outside",
            effect: "and the open air cleared your head",
            summary: "the outdoors",
        },
        Activity::Learning => ActivityPhrases {
            doing: "learning something new",
            past: "some study",
            effect: "and it left your mind pleasantly full",
            summary: "learning",
        },
        Activity::Family => ActivityPhrases {
            doing: "being with family",
            past: "time with family",
            effect: "and it anchored you",
            summary: "family",
        },
    }
}

/// Phrases keyed by energy level 1–5. Levels outside the table fall back to
/// the level-3 phrasing.
pub fn energy_phrases(level: u8) -> EnergyPhrases {
    match level {
        1 => EnergyPhrases {
            state: "running on empty",
            verb: "dragged",
        },
        2 => EnergyPhrases {
            state: "feeling a little drained",
            verb: "flagged",
        },
        4 => EnergyPhrases {
            state: "feeling charged and ready",
            verb: "hummed",
        },
        5 => EnergyPhrases {
            state: "practically buzzing",
            verb: "soared",
        },
        _ => EnergyPhrases {
            state: "holding steady",
            verb: "held steady",
        },
    }
}

pub fn segment_templates(mood: Mood, slot: TimeOfDay) -> &'static [&'static str] {
    match (mood, slot) {
        (Mood::Happy, TimeOfDay::Morning) => &[
            "The morning opened warmly, {{ACTIVITY_DOING}} while the day was still new.",
            "You woke up on the bright side of things, {{ENERGY_STATE}}.",
            "Sunlight or not, the morning felt golden from the first hour.",
            "There was an easy smile in the morning, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The day started with a lightness you didn't have to work for, {{ENERGY_STATE}}.",
        ],
        (Mood::Happy, TimeOfDay::Afternoon) => &[
            "The afternoon kept the good mood going, {{ACTIVITY_DOING}}.",
            "Midday arrived and the brightness held. Your energy {{ENERGY_VERB}} through it.",
            "The hours after lunch passed easily, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "Nothing dented the afternoon; it stayed warm and unhurried.",
            "The middle of the day had a generous feel to it, {{ENERGY_STATE}}.",
        ],
        (Mood::Happy, TimeOfDay::Evening) => &[
            "The evening closed the day gently after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night came and the glow of the day stayed with you. {{NOTE_REFLECTION}}",
            "You ended the day the way you started it, lighter than usual.",
            "The evening felt like a reward, {{ENERGY_STATE}}. {{NOTE_REFLECTION}}",
            "As the day wound down, the good mood settled in for the night.",
        ],
        (Mood::Calm, TimeOfDay::Morning) => &[
            "The morning began quietly, {{ACTIVITY_DOING}} without any rush.",
            "You eased into the day, {{ENERGY_STATE}}.",
            "There was a stillness to the morning that asked nothing of you.",
            "The first hours moved slowly and softly, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "Morning came in on low tide, unhurried and even.",
        ],
        (Mood::Calm, TimeOfDay::Afternoon) => &[
            "The afternoon stayed level, {{ACTIVITY_DOING}}.",
            "Midday passed without a ripple. Your energy {{ENERGY_VERB}}.",
            "The hours drifted by at their own pace, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "Nothing pressed on the afternoon; it simply unfolded.",
            "The middle of the day kept its soft edges, {{ENERGY_STATE}}.",
        ],
        (Mood::Calm, TimeOfDay::Evening) => &[
            "The evening arrived like a slow exhale after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night settled in peacefully, {{ENERGY_STATE}}. {{NOTE_REFLECTION}}",
            "You let the day end without holding onto it.",
            "The quiet of the evening matched the quiet in you. {{NOTE_REFLECTION}}",
            "The day closed the way calm days do, softly and on time.",
        ],
        (Mood::Tired, TimeOfDay::Morning) => &[
            "The morning asked more than you had, {{ENERGY_STATE}}.",
            "Waking up was the hardest part of the morning, {{ACTIVITY_DOING}} anyway.",
            "The first hours moved through fog, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "You carried the morning more than it carried you.",
            "The day started heavy-lidded, and coffee only did so much.",
        ],
        (Mood::Tired, TimeOfDay::Afternoon) => &[
            "The afternoon stretched long, {{ENERGY_STATE}}.",
            "Midday came with a slump; your energy {{ENERGY_VERB}}.",
            "You kept going through the afternoon, {{ACTIVITY_DOING}}, even when it dragged.",
            "The hours after lunch felt twice their length.",
            "The afternoon was an exercise in pushing through, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
        ],
        (Mood::Tired, TimeOfDay::Evening) => &[
            "By evening you were ready to set the day down after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night came as a relief, {{ENERGY_STATE}}. {{NOTE_REFLECTION}}",
            "You gave the evening what was left, which wasn't much.",
            "The day ended with gravity winning. Rest was overdue. {{NOTE_REFLECTION}}",
            "The evening blurred at the edges; sleep was already calling.",
        ],
        (Mood::Anxious, TimeOfDay::Morning) => &[
            "The morning started with a knot in it, {{ACTIVITY_DOING}} to keep moving.",
            "You woke with your thoughts already racing, {{ENERGY_STATE}}.",
            "The first hours felt tight, like the day was waiting to go wrong.",
            "Worry got up before you did, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The morning hummed with a nervous static that was hard to name.",
        ],
        (Mood::Anxious, TimeOfDay::Afternoon) => &[
            "The afternoon kept you on edge, {{ACTIVITY_DOING}}.",
            "Midday didn't loosen the knot; your energy {{ENERGY_VERB}} under it.",
            "You moved through the afternoon with your shoulders up, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The hours ticked by louder than usual.",
            "The middle of the day stayed restless, {{ENERGY_STATE}}.",
        ],
        (Mood::Anxious, TimeOfDay::Evening) => &[
            "The evening finally let some of it go after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night came and the worry quieted, though it didn't leave. {{NOTE_REFLECTION}}",
            "You ended the day still braced, {{ENERGY_STATE}}.",
            "The evening was for unclenching, one breath at a time. {{NOTE_REFLECTION}}",
            "The day closed with the noise turned down, if not off.",
        ],
        (Mood::Focused, TimeOfDay::Morning) => &[
            "The morning snapped into place early, {{ACTIVITY_DOING}} with clear intent.",
            "You woke up already aimed at something, {{ENERGY_STATE}}.",
            "The first hours were all signal and no noise.",
            "The morning had a straight line through it, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "Everything extra fell away and the morning got to the point.",
        ],
        (Mood::Focused, TimeOfDay::Afternoon) => &[
            "The afternoon stayed locked in, {{ACTIVITY_DOING}}.",
            "Midday deepened the groove; your energy {{ENERGY_VERB}} with it.",
            "Hours disappeared into the work of the afternoon, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The afternoon passed in that rare state where time stops mattering.",
            "You held the thread all afternoon, {{ENERGY_STATE}}.",
        ],
        (Mood::Focused, TimeOfDay::Evening) => &[
            "The evening came with the satisfaction of {{ACTIVITY_PAST}} behind you. {{NOTE_REFLECTION}}",
            "Night arrived and you finally looked up from the day. {{NOTE_REFLECTION}}",
            "You closed the day with the to-do list lighter than you found it.",
            "The evening was for landing the plane, {{ENERGY_STATE}}.",
            "The day ended sharp, the way it ran. {{NOTE_REFLECTION}}",
        ],
        (Mood::Neutral, TimeOfDay::Morning) => &[
            "The morning came and went without drama, {{ACTIVITY_DOING}}.",
            "You started the day somewhere in the middle, {{ENERGY_STATE}}.",
            "The first hours were ordinary in the comfortable sense.",
            "The morning took its usual shape, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "Nothing about the morning asked to be remembered, and that was fine.",
        ],
        (Mood::Neutral, TimeOfDay::Afternoon) => &[
            "The afternoon rolled along evenly, {{ACTIVITY_DOING}}.",
            "Midday passed the way middles do; your energy {{ENERGY_VERB}}.",
            "The hours after lunch were steady and unremarkable, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The afternoon neither rose nor fell; it just moved.",
            "You took the middle of the day as it came, {{ENERGY_STATE}}.",
        ],
        (Mood::Neutral, TimeOfDay::Evening) => &[
            "The evening wrapped up an even day after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night came on schedule and the day filed itself away. {{NOTE_REFLECTION}}",
            "You ended the day level, {{ENERGY_STATE}}.",
            "The evening was plain in the restful way. {{NOTE_REFLECTION}}",
            "The day closed its ledger with nothing owed either direction.",
        ],
        (Mood::Excited, TimeOfDay::Morning) => &[
            "The morning arrived already in motion, {{ACTIVITY_DOING}} before most of the world woke.",
            "You were up with sparks in you, {{ENERGY_STATE}}.",
            "The first hours couldn't come fast enough.",
            "The morning had a drumbeat under it, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "Everything felt possible before breakfast.",
        ],
        (Mood::Excited, TimeOfDay::Afternoon) => &[
            "The afternoon kept the momentum, {{ACTIVITY_DOING}}.",
            "Midday only turned the volume up; your energy {{ENERGY_VERB}}.",
            "The hours raced each other through the afternoon, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The afternoon fizzed with things to look forward to.",
            "You rode the middle of the day like a current, {{ENERGY_STATE}}.",
        ],
        (Mood::Excited, TimeOfDay::Evening) => &[
            "The evening buzzed on after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night fell and the spark was still going. {{NOTE_REFLECTION}}",
            "Winding down was the hardest part of an electric day.",
            "The evening stayed bright past its bedtime, {{ENERGY_STATE}}.",
            "The day ended mid-sentence, eager for tomorrow. {{NOTE_REFLECTION}}",
        ],
        (Mood::Sad, TimeOfDay::Morning) => &[
            "The morning came in gray, {{ACTIVITY_DOING}} to keep the hours moving.",
            "You woke with a weight that didn't explain itself, {{ENERGY_STATE}}.",
            "The first hours were quiet in the heavy way.",
            "The morning asked for patience with yourself, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The day started low, and you let it start low.",
        ],
        (Mood::Sad, TimeOfDay::Afternoon) => &[
            "The afternoon moved slowly through the fog, {{ACTIVITY_DOING}}.",
            "Midday didn't lift much; your energy {{ENERGY_VERB}} along the bottom.",
            "You kept gentle company with yourself through the afternoon, {{ACTIVITY_DOING}}, {{ACTIVITY_EFFECT}}.",
            "The hours after lunch were soft and a little blue.",
            "The middle of the day stayed muted, {{ENERGY_STATE}}.",
        ],
        (Mood::Sad, TimeOfDay::Evening) => &[
            "The evening held the day kindly after {{ACTIVITY_PAST}}. {{NOTE_REFLECTION}}",
            "Night came as permission to stop carrying it. {{NOTE_REFLECTION}}",
            "You let the evening be small and close.",
            "The day ended tender, {{ENERGY_STATE}}. {{NOTE_REFLECTION}}",
            "The evening asked nothing more of you, and you gave it nothing more.",
        ],
    }
}

pub fn summary_templates(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &[
            "A bright day, carried by {{ACTIVITY_SUMMARY}}.",
            "One of the good ones; worth remembering.",
            "The whole day leaned toward light, with {{ACTIVITY_SUMMARY}} at its center.",
            "A warm day from end to end.",
        ],
        Mood::Calm => &[
            "A quiet, even day shaped by {{ACTIVITY_SUMMARY}}.",
            "Still water, start to finish.",
            "The day kept its peace, helped along by {{ACTIVITY_SUMMARY}}.",
            "A day that asked little and gave calm back.",
        ],
        Mood::Tired => &[
            "A long day that ran on fumes, even with {{ACTIVITY_SUMMARY}} in it.",
            "You made it through; that counts.",
            "A heavy-lidded day, softened a little by {{ACTIVITY_SUMMARY}}.",
            "A day that ended exactly where it should: in rest.",
        ],
        Mood::Anxious => &[
            "A tight-shouldered day, steadied some by {{ACTIVITY_SUMMARY}}.",
            "A day spent braced; tomorrow owes you nothing.",
            "The worry ran under the day, with {{ACTIVITY_SUMMARY}} as ballast.",
            "An on-edge day that still got crossed off.",
        ],
        Mood::Focused => &[
            "A sharp, productive day built on {{ACTIVITY_SUMMARY}}.",
            "A day with a straight line through it.",
            "Deep-groove hours, anchored by {{ACTIVITY_SUMMARY}}.",
            "A day that knew what it was for.",
        ],
        Mood::Neutral => &[
            "An ordinary day in the comfortable sense, with {{ACTIVITY_SUMMARY}}.",
            "A level day; nothing owed either way.",
            "The day moved evenly through {{ACTIVITY_SUMMARY}}.",
            "A plain day, filed without complaint.",
        ],
        Mood::Excited => &[
            "A day with sparks in it, fueled by {{ACTIVITY_SUMMARY}}.",
            "Everything felt possible today.",
            "A fizzing day, lit up by {{ACTIVITY_SUMMARY}}.",
            "A day that ended eager for the next one.",
        ],
        Mood::Sad => &[
            "A gray day, held gently with {{ACTIVITY_SUMMARY}}.",
            "A low day, carried with patience.",
            "The day ran quiet and a little blue, softened by {{ACTIVITY_SUMMARY}}.",
            "A tender day that deserved the kindness you gave it.",
        ],
    }
}
