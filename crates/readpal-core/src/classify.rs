//! Deterministic lexical message classifier.
//!
//! `classify` turns a single utterance plus its speaker role into a
//! [`ClassificationRecord`]. It is pure, total, and text-only: no I/O,
//! no state, never fails. The phrase tables are fixed literal sets
//! scanned case-insensitively as substrings.

use readpal_types::chat::Speaker;
use readpal_types::classify::{
    Affect, ClassificationRecord, LadderStep, SignalStrength, Stance, TextFocus,
};

/// Minimum whitespace-delimited token count for an "elaborated" message.
const ELABORATED_MIN_WORDS: usize = 12;

/// Phrases indicating the child is confused or stuck.
pub const CONFUSION_PHRASES: &[&str] = &[
    "i don't know",
    "idk",
    "confused",
    "stuck",
    "lost",
    "i'm not sure",
];

/// Phrases indicating self-directed initiative.
pub const AUTONOMY_PHRASES: &[&str] = &[
    "let me try",
    "i want to try",
    "can i do it",
    "i'll do it myself",
];

/// Casual-laughter markers that flag an agent reply as over-social.
const LAUGHTER_MARKERS: &[&str] = &["lol", "haha", "lmao", "😂"];

/// Warm emoji glyphs that flag an agent reply as warm-supportive.
const WARM_EMOJI: &[&str] = &["❄️", "✨", "🌟", "💖", "💕", "📚", "😊", "😀", "🙂", "🌈"];

/// Classify one message into its persisted metadata record.
pub fn classify(text: &str, speaker: Speaker) -> ClassificationRecord {
    match speaker {
        Speaker::User => classify_user(text),
        Speaker::Agent => classify_agent(text),
    }
}

fn classify_user(text: &str) -> ClassificationRecord {
    let lower = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    ClassificationRecord::Child {
        // On/off-task detection is not implemented; the current policy
        // reports every message as on-task.
        on_task: true,
        elaborated: word_count >= ELABORATED_MIN_WORDS,
        is_question: text.contains('?'),
        confusion_signal: signal(&lower, CONFUSION_PHRASES),
        autonomy_signal: signal(&lower, AUTONOMY_PHRASES),
    }
}

fn classify_agent(text: &str) -> ClassificationRecord {
    let lower = text.to_lowercase();

    let affect = if contains_any(&lower, LAUGHTER_MARKERS) {
        Affect::OverSocial
    } else if contains_any(&lower, WARM_EMOJI) {
        Affect::WarmSupportive
    } else {
        Affect::Neutral
    };

    ClassificationRecord::Agent {
        text_focus: TextFocus::OnText,
        stance: Stance::Responsive,
        ladder_step: LadderStep::Nudge,
        affect,
    }
}

fn signal(lower: &str, phrases: &[&str]) -> SignalStrength {
    if contains_any(lower, phrases) {
        SignalStrength::High
    } else {
        SignalStrength::None
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child_fields(record: ClassificationRecord) -> (bool, bool, bool, SignalStrength, SignalStrength) {
        match record {
            ClassificationRecord::Child {
                on_task,
                elaborated,
                is_question,
                confusion_signal,
                autonomy_signal,
            } => (on_task, elaborated, is_question, confusion_signal, autonomy_signal),
            other => panic!("expected child record, got {other:?}"),
        }
    }

    fn agent_affect(record: ClassificationRecord) -> Affect {
        match record {
            ClassificationRecord::Agent { affect, .. } => affect,
            other => panic!("expected agent record, got {other:?}"),
        }
    }

    #[test]
    fn test_question_and_confusion() {
        // Scenario: a confused question gets both flags.
        let record = classify("I don't know what this means?", Speaker::User);
        let (on_task, _, is_question, confusion, _) = child_fields(record);
        assert!(on_task);
        assert!(is_question);
        assert_eq!(confusion, SignalStrength::High);
    }

    #[test]
    fn test_each_confusion_phrase_individually() {
        for phrase in CONFUSION_PHRASES {
            let record = classify(&format!("well {phrase} really"), Speaker::User);
            let (_, _, _, confusion, _) = child_fields(record);
            assert_eq!(confusion, SignalStrength::High, "phrase: {phrase}");
        }
        let record = classify("the dragon flies home", Speaker::User);
        let (_, _, _, confusion, _) = child_fields(record);
        assert_eq!(confusion, SignalStrength::None);
    }

    #[test]
    fn test_confusion_is_case_insensitive() {
        let record = classify("I'M NOT SURE about the ending", Speaker::User);
        let (_, _, _, confusion, _) = child_fields(record);
        assert_eq!(confusion, SignalStrength::High);
    }

    #[test]
    fn test_each_autonomy_phrase_individually() {
        for phrase in AUTONOMY_PHRASES {
            let record = classify(&format!("ok {phrase} now"), Speaker::User);
            let (_, _, _, _, autonomy) = child_fields(record);
            assert_eq!(autonomy, SignalStrength::High, "phrase: {phrase}");
        }
        let record = classify("what happens next", Speaker::User);
        let (_, _, _, _, autonomy) = child_fields(record);
        assert_eq!(autonomy, SignalStrength::None);
    }

    #[test]
    fn test_elaborated_threshold() {
        let eleven = "one two three four five six seven eight nine ten eleven";
        let (_, elaborated, ..) = child_fields(classify(eleven, Speaker::User));
        assert!(!elaborated);

        let twelve = format!("{eleven} twelve");
        let (_, elaborated, ..) = child_fields(classify(&twelve, Speaker::User));
        assert!(elaborated);
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let (_, elaborated, ..) = child_fields(classify("  a   b\t c  ", Speaker::User));
        assert!(!elaborated);
    }

    #[test]
    fn test_agent_warm_emoji() {
        // Scenario: warm emoji, no laughter markers.
        let affect = agent_affect(classify("Great thinking! 😊", Speaker::Agent));
        assert_eq!(affect, Affect::WarmSupportive);
    }

    #[test]
    fn test_agent_laughter_wins_over_warm_emoji() {
        // Scenario: laughter markers dominate regardless of other emoji.
        let affect = agent_affect(classify("lol 😂 nice one 😊", Speaker::Agent));
        assert_eq!(affect, Affect::OverSocial);
    }

    #[test]
    fn test_agent_neutral() {
        let affect = agent_affect(classify("The chapter introduces the setting.", Speaker::Agent));
        assert_eq!(affect, Affect::Neutral);
    }

    #[test]
    fn test_agent_constants() {
        match classify("anything", Speaker::Agent) {
            ClassificationRecord::Agent {
                text_focus,
                stance,
                ladder_step,
                ..
            } => {
                assert_eq!(text_focus, TextFocus::OnText);
                assert_eq!(stance, Stance::Responsive);
                assert_eq!(ladder_step, LadderStep::Nudge);
            }
            other => panic!("expected agent record, got {other:?}"),
        }
    }

    #[test]
    fn test_total_on_awkward_inputs() {
        // Never panics: empty, whitespace, very long, non-Latin, no punctuation.
        for text in [
            "",
            "   ",
            "á é í ó ú ção",
            "本を読むのが好きです",
            "no punctuation at all",
        ] {
            let _ = classify(text, Speaker::User);
            let _ = classify(text, Speaker::Agent);
        }
        let long = "word ".repeat(10_000);
        let (_, elaborated, ..) = child_fields(classify(&long, Speaker::User));
        assert!(elaborated);
    }

    #[test]
    fn test_deterministic() {
        let text = "Can I do it myself? I'm not sure...";
        let first = classify(text, Speaker::User);
        for _ in 0..5 {
            assert_eq!(classify(text, Speaker::User), first);
        }
    }
}
