use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Upper bound on `mood_intensity` that still counts as "not intense enough".
pub const HAPPY_MIN_INTENSITY_EXCLUSIVE: i32 = 5;
/// Sadness at or above this level is never happy.
pub const HAPPY_MAX_SADNESS_EXCLUSIVE: i32 = 5;
/// Column width of `mood_entries.mood`.
pub const MOOD_MAX_CHARS: usize = 255;

/// Happy means intense enough and not too sad. Total over every `i32` pair.
pub fn is_happy(mood_intensity: i32, sadness_level: i32) -> bool {
    mood_intensity > HAPPY_MIN_INTENSITY_EXCLUSIVE && sadness_level < HAPPY_MAX_SADNESS_EXCLUSIVE
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub mood: String,
    pub time: NaiveDate,
    pub feelings: String,
    pub mood_intensity: i32,
    pub sadness_level: i32,
}

impl MoodEntry {
    /// Builds a stored record. Only stores call this; `time` is whatever the
    /// store decided the creation date is.
    pub(crate) fn from_new(id: Uuid, time: NaiveDate, new: NewMoodEntry) -> Self {
        Self {
            id,
            mood: new.mood,
            time,
            feelings: new.feelings,
            mood_intensity: new.mood_intensity,
            sadness_level: new.sadness_level,
        }
    }

    pub fn is_happy(&self) -> bool {
        is_happy(self.mood_intensity, self.sadness_level)
    }
}

/// Everything a caller supplies to create an entry. Identity and creation
/// date are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewMoodEntry {
    pub mood: String,
    pub feelings: String,
    pub mood_intensity: i32,
    pub sadness_level: i32,
}

/// JSON view of an entry with the derived classification attached.
#[derive(Debug, Serialize)]
pub struct MoodEntryView {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub is_happy: bool,
}

impl From<MoodEntry> for MoodEntryView {
    fn from(entry: MoodEntry) -> Self {
        let is_happy = entry.is_happy();
        Self { entry, is_happy }
    }
}

/// POST /create-mood-entry, urlencoded.
///
/// Scores arrive as raw strings so a non-numeric value can be reported next
/// to the field instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateMoodEntryForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "Mood must be 1-255 characters"))]
    pub mood: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Feelings are required"))]
    pub feelings: String,

    #[serde(default)]
    pub mood_intensity: String,

    #[serde(default)]
    pub sadness_level: String,
}

impl CreateMoodEntryForm {
    /// Runs field validation and score parsing, collecting every message.
    pub fn clean(&self) -> Result<NewMoodEntry, Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.validate() {
            let mut fields: Vec<_> = e.field_errors().into_iter().collect();
            fields.sort_by_key(|(name, _)| *name);
            for (_, field_errors) in fields {
                for err in field_errors {
                    if let Some(msg) = &err.message {
                        errors.push(msg.to_string());
                    }
                }
            }
        }

        let mood_intensity = parse_score(&self.mood_intensity, "Mood intensity", &mut errors);
        let sadness_level = parse_score(&self.sadness_level, "Sadness level", &mut errors);

        match (mood_intensity, sadness_level) {
            (Some(mood_intensity), Some(sadness_level)) if errors.is_empty() => Ok(NewMoodEntry {
                mood: self.mood.clone(),
                feelings: self.feelings.clone(),
                mood_intensity,
                sadness_level,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_score(raw: &str, label: &str, errors: &mut Vec<String>) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(v) => Some(v),
        Err(_) => {
            errors.push(format!("{label} must be a whole number"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(mood_intensity: i32, sadness_level: i32) -> MoodEntry {
        MoodEntry::from_new(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2024, 9, 11).unwrap(),
            NewMoodEntry {
                mood: "LUMAYAN SENANG".into(),
                feelings: "senang sih, cuman tadi baju aku bahas kena hujan :(".into(),
                mood_intensity,
                sadness_level,
            },
        )
    }

    #[test]
    fn test_happy_entry() {
        assert!(entry(8, 2).is_happy());
    }

    #[test]
    fn test_low_intensity_is_not_happy() {
        assert!(!entry(4, 2).is_happy());
    }

    #[test]
    fn test_boundaries_are_not_happy() {
        assert!(!is_happy(5, 0));
        assert!(!is_happy(10, 5));
        assert!(is_happy(6, 4));
    }

    #[test]
    fn test_extreme_scores() {
        assert!(is_happy(i32::MAX, i32::MIN));
        assert!(!is_happy(i32::MIN, i32::MIN));
        assert!(!is_happy(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_view_carries_is_happy() {
        let json = serde_json::to_value(MoodEntryView::from(entry(8, 2))).unwrap();
        assert_eq!(json["is_happy"], true);
        assert_eq!(json["mood"], "LUMAYAN SENANG");
        assert_eq!(json["time"], "2024-09-11");
    }

    #[test]
    fn test_form_clean_ok() {
        let form = CreateMoodEntryForm {
            mood: "Calm".into(),
            feelings: "quiet evening".into(),
            mood_intensity: " 7 ".into(),
            sadness_level: "-3".into(),
        };
        let new = form.clean().unwrap();
        assert_eq!(new.mood_intensity, 7);
        assert_eq!(new.sadness_level, -3);
    }

    #[test]
    fn test_form_clean_collects_all_errors() {
        let form = CreateMoodEntryForm {
            mood: String::new(),
            feelings: String::new(),
            mood_intensity: "lots".into(),
            sadness_level: String::new(),
        };
        let errors = form.clean().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Feelings are required".to_string(),
                "Mood must be 1-255 characters".to_string(),
                "Mood intensity must be a whole number".to_string(),
                "Sadness level must be a whole number".to_string(),
            ]
        );
    }

    #[test]
    fn test_form_mood_length_counts_chars() {
        let form = CreateMoodEntryForm {
            mood: "é".repeat(MOOD_MAX_CHARS),
            feelings: "ok".into(),
            mood_intensity: "1".into(),
            sadness_level: "1".into(),
        };
        assert!(form.clean().is_ok());

        let too_long = CreateMoodEntryForm {
            mood: "a".repeat(MOOD_MAX_CHARS + 1),
            ..form
        };
        assert!(too_long.clean().is_err());
    }

    proptest! {
        #[test]
        fn prop_is_happy_matches_thresholds(i in any::<i32>(), s in any::<i32>()) {
            prop_assert_eq!(is_happy(i, s), i > 5 && s < 5);
        }

        #[test]
        fn prop_intensity_five_or_less_never_happy(i in i32::MIN..=5, s in any::<i32>()) {
            prop_assert!(!is_happy(i, s));
        }

        #[test]
        fn prop_sadness_five_or_more_never_happy(i in any::<i32>(), s in 5..=i32::MAX) {
            prop_assert!(!is_happy(i, s));
        }
    }
}
