mod messages;

pub use messages::{MessagePool, RESULT_MESSAGES};

use crate::config::ScoringConfig;
use crate::error::{QuizError, Result};
use crate::models::{Question, QuizOption};
use lazy_static::lazy_static;
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn question(id: u32, prompt: &str, category: &str, options: &[(&str, u32)]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options
            .iter()
            .map(|(text, points)| QuizOption { text: text.to_string(), points: *points })
            .collect(),
        category: category.to_string(),
    }
}

lazy_static! {
    static ref BUILTIN_QUESTIONS: Vec<Question> = vec![
        question(
            1,
            "{friendName} texts you at 3 AM with 'EMERGENCY!' and it's about...",
            "crisis_response",
            &[
                ("A genuine crisis that needs immediate help", 5),
                ("Drama about their crush not texting back", 2),
                ("They're drunk and want to order pizza together", 4),
                ("They found a spider and need emotional support", 3),
            ],
        ),
        question(
            2,
            "When {friendName} posts a questionable outfit on Instagram, they usually...",
            "social_media",
            &[
                ("Own it confidently and respond to comments with humor", 5),
                ("Get defensive and start drama in the comments", 2),
                ("Delete it after a few hours when they realize", 3),
                ("Leave it up but clearly feel embarrassed", 4),
            ],
        ),
        question(
            3,
            "When you ask {friendName} to help you move this weekend, they...",
            "support",
            &[
                ("Show up early with coffee, snacks, and their best attitude", 5),
                ("Agree but complain the entire time about their back", 2),
                ("Suddenly remember they have other plans", 1),
                ("Offer to pay for pizza and movers instead", 3),
            ],
        ),
        question(
            4,
            "If your ex slid into {friendName}'s DMs, they would...",
            "loyalty",
            &[
                ("Screenshot immediately and send it to you", 5),
                ("Ignore it and never speak of it", 4),
                ("Tell you about it but admit they responded 'for research'", 2),
                ("Actually consider it because your ex is kind of cute", 1),
            ],
        ),
        question(
            5,
            "At parties, {friendName} usually...",
            "social_behavior",
            &[
                ("Makes sure everyone feels included and has a good time", 5),
                ("Tells the same embarrassing stories about you every time", 2),
                ("Is the life of the party but sometimes goes too far", 3),
                ("Starts drama or gets into arguments with people", 1),
            ],
        ),
        question(
            6,
            "When {friendName} asks for your honest opinion about their terrible haircut...",
            "honesty",
            &[
                ("They genuinely want the truth and can handle it maturely", 5),
                ("They want honesty but will sulk if you're not positive", 3),
                ("They're clearly fishing for compliments and want you to lie", 2),
                ("They ask but then get angry when you're honest", 1),
            ],
        ),
    ];
}

/// Ordered, immutable set of quiz questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { questions: BUILTIN_QUESTIONS.clone() }
    }

    /// Parses a JSON array of questions. Call [`Catalog::validate`] before use.
    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        debug!("Parsed catalog with {} question(s)", questions.len());
        Ok(Self { questions })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self, config: &ScoringConfig) -> Result<()> {
        if self.questions.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id) {
                return Err(QuizError::DuplicateQuestion(question.id));
            }
            if question.options.is_empty() {
                return Err(QuizError::NoOptions(question.id));
            }
            for option in &question.options {
                if !(1..=config.max_points_per_question).contains(&option.points) {
                    return Err(QuizError::PointsOutOfRange {
                        question_id: question.id,
                        text: option.text.clone(),
                        points: option.points,
                        max: config.max_points_per_question,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Category tag as shown above a question, e.g. `SOCIAL MEDIA`.
pub fn display_category(category: Option<&str>) -> String {
    match category {
        Some(category) if !category.is_empty() => category.replace('_', " ").to_uppercase(),
        _ => "FRIENDSHIP".to_string(),
    }
}
