//! Turns a recognised speech transcript into journal actions.

use serde::{Deserialize, Serialize};

use crate::models::{ExerciseKind, Mood};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "type", content = "value")]
pub enum VoiceCommand {
    AddExercise(ExerciseKind),
    SetMood(Mood),
    TakeAllMedications,
}

const WORKOUT_WORDS: &[&str] = &["exercise", "gym", "yoga"];
const HAPPY_WORDS: &[&str] = &["happy", "good", "great"];
const OKAY_WORDS: &[&str] = &["okay", "fine", "alright"];
const SAD_WORDS: &[&str] = &["sad", "bad", "tired"];
const MEDICATION_WORDS: &[&str] = &["medicine", "tablet", "pill", "medication"];

/// Every command the transcript mentions, in application order.
///
/// Matching is case-insensitive substring search, so one sentence can carry
/// several commands (and several moods; the last one applied wins).
pub fn parse_transcript(transcript: &str) -> Vec<VoiceCommand> {
    let lower = transcript.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|word| lower.contains(word));
    let mut commands = Vec::new();

    if lower.contains("walk") {
        let kind = if lower.contains("long") {
            ExerciseKind::Long
        } else {
            ExerciseKind::Short
        };
        commands.push(VoiceCommand::AddExercise(kind));
    }
    if mentions(WORKOUT_WORDS) {
        commands.push(VoiceCommand::AddExercise(ExerciseKind::Other));
    }
    if mentions(HAPPY_WORDS) {
        commands.push(VoiceCommand::SetMood(Mood::Happy));
    }
    if mentions(OKAY_WORDS) {
        commands.push(VoiceCommand::SetMood(Mood::Okay));
    }
    if mentions(SAD_WORDS) {
        commands.push(VoiceCommand::SetMood(Mood::Sad));
    }
    if mentions(MEDICATION_WORDS) {
        commands.push(VoiceCommand::TakeAllMedications);
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_walk_and_mood() {
        assert_eq!(
            parse_transcript("Went for a LONG walk and feel great"),
            vec![
                VoiceCommand::AddExercise(ExerciseKind::Long),
                VoiceCommand::SetMood(Mood::Happy),
            ]
        );
    }

    #[test]
    fn short_walk_is_the_default() {
        assert_eq!(
            parse_transcript("quick walk round the block"),
            vec![VoiceCommand::AddExercise(ExerciseKind::Short)]
        );
    }

    #[test]
    fn workouts_and_medication() {
        assert_eq!(
            parse_transcript("Yoga this morning, took my tablets"),
            vec![
                VoiceCommand::AddExercise(ExerciseKind::Other),
                VoiceCommand::TakeAllMedications,
            ]
        );
    }

    #[test]
    fn conflicting_moods_keep_rule_order() {
        assert_eq!(
            parse_transcript("tired but happy"),
            vec![
                VoiceCommand::SetMood(Mood::Happy),
                VoiceCommand::SetMood(Mood::Sad),
            ]
        );
    }

    #[test]
    fn unrelated_speech_yields_nothing() {
        assert!(parse_transcript("what's the weather like").is_empty());
    }
}
