pub mod breakdown;
pub mod message;

pub use breakdown::score_breakdown;
pub use message::{generate_share_text, result_message, result_message_by_name};

use crate::config::ScoringConfig;
use crate::models::{Answer, ScoreResult};
use log::debug;

/// Rounded share of `score` in `max`, as a whole percent.
pub(crate) fn rounded_percentage(score: u32, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    (score as f64 / max as f64 * 100.0).round() as u32
}

/// Aggregates the answers into a score and a flag. Entries are not validated;
/// an answer without points contributes nothing.
pub fn calculate_score(answers: &[Answer], config: &ScoringConfig) -> ScoreResult {
    let total_score = answers
        .iter()
        .fold(0u32, |total, answer| total.saturating_add(answer.points.unwrap_or(0)));
    let percentage = rounded_percentage(total_score, config.total_possible_points);
    let flag = config.classify(total_score);

    debug!(
        "Scored {} answer(s): {}/{} ({}%) -> {}",
        answers.len(),
        total_score,
        config.total_possible_points,
        percentage,
        flag
    );

    ScoreResult {
        total_score,
        percentage,
        max_possible: config.total_possible_points,
        question_count: config.total_questions,
        flag,
    }
}

/// True when there is exactly one answer per question and every answer
/// carries points within `1..=max_points_per_question`.
pub fn validate_answers(answers: &[Answer], config: &ScoringConfig) -> bool {
    if answers.len() != config.total_questions as usize {
        return false;
    }

    answers.iter().all(|answer| {
        answer
            .points
            .is_some_and(|points| (1..=config.max_points_per_question).contains(&points))
    })
}
