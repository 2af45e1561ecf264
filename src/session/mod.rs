use crate::catalog::Catalog;
use crate::config::ScoringConfig;
use crate::error::{QuizError, Result};
use crate::models::{Answer, Question, ScoreResult};
use crate::scoring::{calculate_score, rounded_percentage};
use crate::template::fill_friend_name;
use log::{debug, info};

/// Where the session landed after moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Question(usize),
    Finished,
}

/// Walks one user through the catalog, keeping at most one answer per question.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    catalog: &'a Catalog,
    friend_name: String,
    current: usize,
    answers: Vec<Answer>,
}

impl<'a> QuizSession<'a> {
    pub fn new(catalog: &'a Catalog, friend_name: &str) -> Result<Self> {
        let friend_name = friend_name.trim();
        if friend_name.is_empty() {
            return Err(QuizError::BlankFriendName);
        }
        if catalog.is_empty() {
            return Err(QuizError::EmptyCatalog);
        }

        info!("Starting quiz about {}", friend_name);
        Ok(Self {
            catalog,
            friend_name: friend_name.to_string(),
            current: 0,
            answers: Vec::with_capacity(catalog.len()),
        })
    }

    pub fn friend_name(&self) -> &str {
        &self.friend_name
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'a Question {
        &self.catalog.questions()[self.current]
    }

    /// Current prompt with the friend's name filled in.
    pub fn prompt(&self) -> String {
        fill_friend_name(&self.current_question().prompt, Some(&self.friend_name))
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.catalog.len()
    }

    /// Position of the current question as a whole percent of the quiz.
    pub fn progress(&self) -> u32 {
        rounded_percentage(self.current as u32 + 1, self.catalog.len() as u32)
    }

    /// Records the choice for the current question, replacing any earlier one.
    pub fn select(&mut self, option_index: usize) -> Result<&Answer> {
        let question = self.current_question();
        let option = question.options.get(option_index).ok_or(QuizError::UnknownOption {
            question_id: question.id,
            index: option_index,
        })?;
        let answer = Answer::new(question, option);

        let slot = match self.answers.iter().position(|a| a.question_id == question.id) {
            Some(existing) => {
                debug!("Replacing answer for question {}", question.id);
                self.answers[existing] = answer;
                existing
            }
            None => {
                self.answers.push(answer);
                self.answers.len() - 1
            }
        };

        Ok(&self.answers[slot])
    }

    /// Answer already given for the current question, if any.
    pub fn selected(&self) -> Option<&Answer> {
        let id = self.current_question().id;
        self.answers.iter().find(|answer| answer.question_id == id)
    }

    pub fn next(&mut self) -> Result<Step> {
        let question = self.current_question();
        if self.selected().is_none() {
            return Err(QuizError::Unanswered(question.id));
        }
        if self.is_last() {
            return Ok(Step::Finished);
        }

        self.current += 1;
        Ok(Step::Question(self.current))
    }

    /// Steps back one question; stays put on the first.
    pub fn previous(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Scores the session once every question has an answer.
    pub fn finish(&self, config: &ScoringConfig) -> Result<ScoreResult> {
        if let Some(missing) = self
            .catalog
            .questions()
            .iter()
            .find(|question| !self.answers.iter().any(|a| a.question_id == question.id))
        {
            return Err(QuizError::Unanswered(missing.id));
        }

        Ok(calculate_score(&self.answers, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flag;

    #[test]
    fn rejects_blank_friend_name() {
        let catalog = Catalog::builtin();
        assert!(matches!(QuizSession::new(&catalog, "  "), Err(QuizError::BlankFriendName)));
    }

    #[test]
    fn rejects_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(matches!(QuizSession::new(&catalog, "Sam"), Err(QuizError::EmptyCatalog)));
    }

    #[test]
    fn prompt_is_personalized() {
        let catalog = Catalog::builtin();
        let session = QuizSession::new(&catalog, " Riley ").unwrap();
        assert_eq!(session.friend_name(), "Riley");
        assert_eq!(
            session.prompt(),
            "Riley texts you at 3 AM with 'EMERGENCY!' and it's about..."
        );
    }

    #[test]
    fn reselecting_replaces_answer() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog, "Sam").unwrap();
        session.select(1).unwrap();
        let answer = session.select(0).unwrap();
        assert_eq!(answer.points, Some(5));
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.selected().unwrap().points, Some(5));
    }

    #[test]
    fn unknown_option_is_rejected() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog, "Sam").unwrap();
        let err = session.select(4).unwrap_err();
        assert!(matches!(err, QuizError::UnknownOption { question_id: 1, index: 4 }));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn cannot_advance_without_answer() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog, "Sam").unwrap();
        assert!(matches!(session.next(), Err(QuizError::Unanswered(1))));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn navigation_and_progress() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog, "Sam").unwrap();
        assert!(session.is_first());
        assert_eq!(session.progress(), 17);
        assert_eq!(session.previous(), 0);

        session.select(0).unwrap();
        assert_eq!(session.next().unwrap(), Step::Question(1));
        assert_eq!(session.progress(), 33);
        assert!(session.selected().is_none());

        assert_eq!(session.previous(), 0);
        assert_eq!(session.selected().unwrap().question_id, 1);
    }

    #[test]
    fn completing_the_quiz_scores_it() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog, "Sam").unwrap();
        loop {
            session.select(0).unwrap();
            if session.next().unwrap() == Step::Finished {
                break;
            }
        }
        assert!(session.is_last());
        assert_eq!(session.progress(), 100);

        let result = session.finish(&ScoringConfig::default()).unwrap();
        assert_eq!(result.total_score, 30);
        assert_eq!(result.flag, Flag::Green);
    }

    #[test]
    fn finish_requires_every_answer() {
        let catalog = Catalog::builtin();
        let mut session = QuizSession::new(&catalog, "Sam").unwrap();
        session.select(2).unwrap();
        session.next().unwrap();
        assert!(matches!(
            session.finish(&ScoringConfig::default()),
            Err(QuizError::Unanswered(2))
        ));
    }
}
