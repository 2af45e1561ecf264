use green_flag_quiz::catalog::display_category;
use green_flag_quiz::config::AppConfig;
use green_flag_quiz::scoring::{generate_share_text, result_message, score_breakdown};
use green_flag_quiz::session::{QuizSession, Step};
use green_flag_quiz::share;
use green_flag_quiz::spectrum::{flag_colors, perc2color};
use log::{error, info};
use std::env;
use std::process::ExitCode;

const USAGE: &str = "usage: green-flag-quiz [--json] <friend name> <choice>...\n\
                     choices are 1-based option numbers, one per question";

struct Args {
    json: bool,
    friend_name: String,
    choices: Vec<usize>,
}

fn parse_args() -> Option<Args> {
    let mut json = false;
    let mut rest = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            rest.push(arg);
        }
    }

    let mut rest = rest.into_iter();
    let friend_name = rest.next()?;
    let choices = rest
        .map(|choice| choice.parse::<usize>().ok().filter(|c| *c > 0).map(|c| c - 1))
        .collect::<Option<Vec<_>>>()?;

    Some(Args { json, friend_name, choices })
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::from_env()?;
    let mut session = QuizSession::new(&config.catalog, &args.friend_name)?;

    for choice in args.choices {
        let question = session.current_question();
        let answer = session.select(choice)?;
        info!(
            "Q{} [{}]: {} point(s)",
            question.id,
            display_category(Some(&question.category)),
            answer.points.unwrap_or(0)
        );
        if session.next()? == Step::Finished {
            break;
        }
    }

    let result = session.finish(&config.scoring)?;
    let friend_name = session.friend_name();

    if args.json {
        let breakdown = score_breakdown(session.answers(), &config.scoring);
        let output = serde_json::json!({
            "friendName": friend_name,
            "result": result,
            "breakdown": breakdown.categories,
            "color": perc2color(result.percentage as f64),
            "palette": flag_colors(result.flag),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let message = result_message(result.flag, &mut rand::rng()).personalize(Some(friend_name));
    let share_text = generate_share_text(&result, Some(friend_name));

    println!("{}", message.title);
    println!("{}", message.description);
    println!();
    println!(
        "Score: {}/{} ({}%) {} [{}]",
        result.total_score,
        result.max_possible,
        result.percentage,
        result.flag.label(),
        flag_colors(result.flag).primary
    );
    println!("Spectrum: {}", perc2color(result.percentage as f64));
    println!();
    println!("{}", share::clipboard_text(&share_text, &config.share_origin));
    println!();
    println!("{}", share::twitter_intent_url(&share_text, &config.share_origin));

    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let Some(args) = parse_args() else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Quiz failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
