use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::models::Flag;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub const MAX_POINTS_VAR: &str = "QUIZ_MAX_POINTS";
pub const GREEN_THRESHOLD_VAR: &str = "QUIZ_GREEN_THRESHOLD";
pub const YELLOW_THRESHOLD_VAR: &str = "QUIZ_YELLOW_THRESHOLD";
pub const CATALOG_VAR: &str = "QUIZ_CATALOG";
pub const SHARE_URL_VAR: &str = "QUIZ_SHARE_URL";

pub const DEFAULT_SHARE_URL: &str = "https://greenflagquiz.app";

const DEFAULT_TOTAL_QUESTIONS: u32 = 6;
const DEFAULT_MAX_POINTS: u32 = 5;
// 70% and above
const DEFAULT_GREEN_THRESHOLD: u32 = 21;
// 43% to 69%
const DEFAULT_YELLOW_THRESHOLD: u32 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub total_questions: u32,
    pub max_points_per_question: u32,
    pub total_possible_points: u32,
    /// Inclusive lower bound for a green flag.
    pub green_threshold: u32,
    /// Inclusive lower bound for a yellow flag; anything below is red.
    pub yellow_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            max_points_per_question: DEFAULT_MAX_POINTS,
            total_possible_points: DEFAULT_TOTAL_QUESTIONS * DEFAULT_MAX_POINTS,
            green_threshold: DEFAULT_GREEN_THRESHOLD,
            yellow_threshold: DEFAULT_YELLOW_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    pub fn new(
        total_questions: u32,
        max_points_per_question: u32,
        green_threshold: u32,
        yellow_threshold: u32,
    ) -> Result<Self> {
        if max_points_per_question == 0 {
            return Err(QuizError::InvalidMaxPoints);
        }
        let total_possible_points = total_questions
            .checked_mul(max_points_per_question)
            .ok_or(QuizError::TotalPointsOverflow {
                total_questions,
                max_points: max_points_per_question,
            })?;
        if yellow_threshold > green_threshold || green_threshold > total_possible_points {
            return Err(QuizError::InvalidThresholds {
                yellow: yellow_threshold,
                green: green_threshold,
                total: total_possible_points,
            });
        }

        Ok(Self {
            total_questions,
            max_points_per_question,
            total_possible_points,
            green_threshold,
            yellow_threshold,
        })
    }

    /// Reads threshold overrides from the process environment.
    pub fn from_env(total_questions: u32) -> Result<Self> {
        Self::from_lookup(total_questions, |var| env::var(var).ok())
    }

    pub fn from_lookup<F>(total_questions: u32, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_points = parse_var(&lookup, MAX_POINTS_VAR, DEFAULT_MAX_POINTS)?;
        let green = parse_var(&lookup, GREEN_THRESHOLD_VAR, DEFAULT_GREEN_THRESHOLD)?;
        let yellow = parse_var(&lookup, YELLOW_THRESHOLD_VAR, DEFAULT_YELLOW_THRESHOLD)?;
        Self::new(total_questions, max_points, green, yellow)
    }

    pub fn classify(&self, total_score: u32) -> Flag {
        if total_score >= self.green_threshold {
            Flag::Green
        } else if total_score >= self.yellow_threshold {
            Flag::Yellow
        } else {
            Flag::Red
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| QuizError::InvalidEnv { var, value }),
        None => Ok(default),
    }
}

/// Everything the runner needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: Catalog,
    pub scoring: ScoringConfig,
    pub share_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog = match lookup(CATALOG_VAR) {
            Some(path) => {
                info!("Loading question catalog from {}", path);
                Catalog::load(&path)?
            }
            None => Catalog::builtin(),
        };

        let total_questions = u32::try_from(catalog.len()).map_err(|_| QuizError::InvalidEnv {
            var: CATALOG_VAR,
            value: catalog.len().to_string(),
        })?;
        let scoring = ScoringConfig::from_lookup(total_questions, &lookup)?;
        catalog.validate(&scoring)?;

        let share_origin = lookup(SHARE_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SHARE_URL.to_string());

        debug!("Resolved scoring config: {:?}", scoring);
        Ok(Self { catalog, scoring, share_origin })
    }
}
