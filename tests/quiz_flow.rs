use green_flag_quiz::catalog::Catalog;
use green_flag_quiz::config::{AppConfig, ScoringConfig};
use green_flag_quiz::models::{Answer, Flag};
use green_flag_quiz::scoring::{
    calculate_score, generate_share_text, result_message, score_breakdown, validate_answers,
};
use green_flag_quiz::session::{QuizSession, Step};
use green_flag_quiz::spectrum::{color_for_score, flag_colors, text_color_for_background};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn play(catalog: &Catalog, friend: &str, choices: &[usize]) -> Vec<Answer> {
    let mut session = QuizSession::new(catalog, friend).unwrap();
    for choice in choices {
        session.select(*choice).unwrap();
        if session.next().unwrap() == Step::Finished {
            break;
        }
    }
    session.answers().to_vec()
}

#[test]
fn full_quiz_produces_yellow_result() {
    let catalog = Catalog::builtin();
    let config = ScoringConfig::default();
    // 3 + 3 + 5 + 2 + 2 + 3 = 18
    let answers = play(&catalog, "Jordan", &[3, 2, 0, 2, 1, 1]);

    assert!(validate_answers(&answers, &config));
    let result = calculate_score(&answers, &config);
    assert_eq!(result.total_score, 18);
    assert_eq!(result.percentage, 60);
    assert_eq!(result.flag, Flag::Yellow);

    let message = result_message(result.flag, &mut StdRng::seed_from_u64(3)).personalize(Some("Jordan"));
    assert!(message.title.contains("Jordan"));
    assert!(!message.title.contains("{friendName}"));

    let share = generate_share_text(&result, Some("Jordan"));
    assert!(share.contains("Yellow Flag friend! 🟡 (60% friend score)"));
}

#[test]
fn breakdown_lists_every_builtin_category() {
    let catalog = Catalog::builtin();
    let config = ScoringConfig::default();
    let answers = play(&catalog, "Jordan", &[0, 0, 0, 0, 0, 0]);

    let breakdown = score_breakdown(&answers, &config);
    let categories: Vec<&str> = breakdown.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(
        categories,
        vec!["crisis_response", "social_media", "support", "loyalty", "social_behavior", "honesty"]
    );
    assert!(breakdown.iter().all(|c| c.percentage == 100 && c.questions == 1));
}

#[test]
fn result_colors_follow_the_flag() {
    let config = ScoringConfig::default();
    let result = calculate_score(&[Answer::with_points(1, 2)], &config);
    assert_eq!(result.flag, Flag::Red);
    assert_eq!(color_for_score(result.total_score as f64, result.max_possible as f64), "#ff2200");

    let palette = flag_colors(result.flag);
    assert_eq!(text_color_for_background(&palette.primary), "#FFFFFF");
    assert_eq!(text_color_for_background(&palette.lighter), "#000000");
}

#[test]
fn custom_catalog_drives_scoring() {
    let dir = std::env::temp_dir().join(format!("green-flag-quiz-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalog.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 10, "question": "Does {friendName} remember birthdays?", "category": "care",
             "options": [{"text": "Always", "points": 5}, {"text": "Never", "points": 1}]},
            {"id": 11, "question": "Does {friendName} return calls?", "category": "care",
             "options": [{"text": "Yes", "points": 4}, {"text": "No", "points": 1}]}
        ]"#,
    )
    .unwrap();

    let path_str = path.to_string_lossy().to_string();
    let config = AppConfig::from_lookup(|var| match var {
        "QUIZ_CATALOG" => Some(path_str.clone()),
        "QUIZ_GREEN_THRESHOLD" => Some("8".to_string()),
        "QUIZ_YELLOW_THRESHOLD" => Some("5".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.scoring.total_questions, 2);
    assert_eq!(config.scoring.total_possible_points, 10);

    let answers = play(&config.catalog, "Robin", &[0, 0]);
    let result = calculate_score(&answers, &config.scoring);
    assert_eq!(result.total_score, 9);
    assert_eq!(result.percentage, 90);
    assert_eq!(result.flag, Flag::Green);

    let breakdown = score_breakdown(&answers, &config.scoring);
    let care = breakdown.get("care").unwrap();
    assert_eq!((care.score, care.questions, care.max_possible), (9, 2, 5));

    std::fs::remove_dir_all(&dir).ok();
}
