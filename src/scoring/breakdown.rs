use crate::config::ScoringConfig;
use crate::models::{Answer, CategoryScore, ScoreBreakdown};
use crate::scoring::rounded_percentage;

/// Groups answers by category. Every category is measured against a single
/// question's maximum, however many questions it holds.
pub fn score_breakdown(answers: &[Answer], config: &ScoringConfig) -> ScoreBreakdown {
    let mut categories: Vec<CategoryScore> = Vec::new();

    for (index, answer) in answers.iter().enumerate() {
        let category = match answer.category.as_deref() {
            Some(category) if !category.is_empty() => category.to_string(),
            _ => format!("question_{}", index + 1),
        };

        let position = match categories.iter().position(|entry| entry.category == category) {
            Some(position) => position,
            None => {
                categories.push(CategoryScore {
                    category,
                    score: 0,
                    max_possible: config.max_points_per_question,
                    questions: 0,
                    percentage: 0,
                });
                categories.len() - 1
            }
        };

        let entry = &mut categories[position];
        entry.score = entry.score.saturating_add(answer.points.unwrap_or(0));
        entry.questions += 1;
    }

    for entry in &mut categories {
        entry.percentage = rounded_percentage(entry.score, entry.max_possible);
    }

    ScoreBreakdown { categories }
}
