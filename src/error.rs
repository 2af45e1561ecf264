use thiserror::Error;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid value `{value}` for {var}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("thresholds must satisfy yellow ({yellow}) <= green ({green}) <= total ({total})")]
    InvalidThresholds { yellow: u32, green: u32, total: u32 },
    #[error("max points per question must be at least 1")]
    InvalidMaxPoints,
    #[error("{total_questions} questions worth {max_points} points each overflow the score range")]
    TotalPointsOverflow { total_questions: u32, max_points: u32 },
    #[error("catalog has no questions")]
    EmptyCatalog,
    #[error("question {0} appears more than once in the catalog")]
    DuplicateQuestion(u32),
    #[error("question {0} has no options")]
    NoOptions(u32),
    #[error("option `{text}` of question {question_id} is worth {points} points (allowed 1..={max})")]
    PointsOutOfRange { question_id: u32, text: String, points: u32, max: u32 },
    #[error("friend name must not be blank")]
    BlankFriendName,
    #[error("question {question_id} has no option #{index}")]
    UnknownOption { question_id: u32, index: usize },
    #[error("question {0} has not been answered yet")]
    Unanswered(u32),
    #[error("failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}
