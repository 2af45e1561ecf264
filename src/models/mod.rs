use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    /// Prompt template, may contain the `{friendName}` placeholder.
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flag {
    #[serde(rename = "greenFlag")]
    Green,
    #[serde(rename = "yellowFlag")]
    Yellow,
    #[serde(rename = "redFlag")]
    Red,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Green, Flag::Yellow, Flag::Red];

    /// Wire name, e.g. `greenFlag`.
    pub fn name(self) -> &'static str {
        match self {
            Flag::Green => "greenFlag",
            Flag::Yellow => "yellowFlag",
            Flag::Red => "redFlag",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Flag::ALL.into_iter().find(|flag| flag.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Flag::Green => "Green Flag",
            Flag::Yellow => "Yellow Flag",
            Flag::Red => "Red Flag",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Flag::Green => "🟢",
            Flag::Yellow => "🟡",
            Flag::Red => "🔴",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One selection made by the user. Raw answers coming from a shell may lack
/// points or a category, so both are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: u32,
    #[serde(default)]
    pub selected_option: Option<QuizOption>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Answer {
    pub fn new(question: &Question, option: &QuizOption) -> Self {
        Self {
            question_id: question.id,
            selected_option: Some(option.clone()),
            points: Some(option.points),
            category: Some(question.category.clone()),
        }
    }

    /// Bare answer carrying only a point value.
    pub fn with_points(question_id: u32, points: u32) -> Self {
        Self {
            question_id,
            selected_option: None,
            points: Some(points),
            category: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: u32,
    pub percentage: u32,
    pub max_possible: u32,
    pub question_count: u32,
    pub flag: Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
    pub max_possible: u32,
    pub questions: u32,
    pub percentage: u32,
}

/// Per-category scores in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryScore>,
}

impl ScoreBreakdown {
    pub fn get(&self, category: &str) -> Option<&CategoryScore> {
        self.categories.iter().find(|entry| entry.category == category)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.categories.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMessage {
    pub title: String,
    pub description: String,
}

impl ResultMessage {
    pub fn personalize(&self, friend_name: Option<&str>) -> Self {
        Self {
            title: crate::template::fill_friend_name(&self.title, friend_name),
            description: crate::template::fill_friend_name(&self.description, friend_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_names_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_name(flag.name()), Some(flag));
        }
        assert_eq!(Flag::from_name("blueFlag"), None);
        assert_eq!(Flag::from_name("GreenFlag"), None);
    }

    #[test]
    fn flag_serializes_with_wire_name() {
        assert_eq!(serde_json::to_string(&Flag::Yellow).unwrap(), "\"yellowFlag\"");
        let flag: Flag = serde_json::from_str("\"redFlag\"").unwrap();
        assert_eq!(flag, Flag::Red);
    }

    #[test]
    fn answer_copies_points_and_category() {
        let question = Question {
            id: 7,
            prompt: "Does {friendName} share fries?".to_string(),
            options: vec![QuizOption { text: "Always".to_string(), points: 5 }],
            category: "generosity".to_string(),
        };
        let answer = Answer::new(&question, &question.options[0]);
        assert_eq!(answer.question_id, 7);
        assert_eq!(answer.points, Some(5));
        assert_eq!(answer.category.as_deref(), Some("generosity"));
    }

    #[test]
    fn raw_answer_without_points_deserializes() {
        let answer: Answer = serde_json::from_str(r#"{"questionId": 3}"#).unwrap();
        assert_eq!(answer.points, None);
        assert_eq!(answer.category, None);
    }
}
