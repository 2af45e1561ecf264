use crate::catalog::RESULT_MESSAGES;
use crate::models::{Flag, ResultMessage, ScoreResult};
use log::warn;
use rand::Rng;
use rand::seq::IndexedRandom;

pub const UNKNOWN_TITLE: &str = "Unknown Result";
pub const UNKNOWN_DESCRIPTION: &str = "Something went wrong with your score calculation!";
pub const DEFAULT_SHARE_NAME: &str = "My Friend";

fn fallback_message() -> ResultMessage {
    ResultMessage {
        title: UNKNOWN_TITLE.to_string(),
        description: UNKNOWN_DESCRIPTION.to_string(),
    }
}

/// Picks a title and a description for the flag, each drawn independently.
/// Templates are returned unfilled; see [`ResultMessage::personalize`].
pub fn result_message<R: Rng + ?Sized>(flag: Flag, rng: &mut R) -> ResultMessage {
    let Some(pool) = RESULT_MESSAGES.get(&flag) else {
        return fallback_message();
    };

    match (pool.titles.choose(rng), pool.descriptions.choose(rng)) {
        (Some(title), Some(description)) => ResultMessage {
            title: title.to_string(),
            description: description.to_string(),
        },
        _ => fallback_message(),
    }
}

/// Same as [`result_message`] for a wire name such as `yellowFlag`.
pub fn result_message_by_name<R: Rng + ?Sized>(name: &str, rng: &mut R) -> ResultMessage {
    match Flag::from_name(name) {
        Some(flag) => result_message(flag, rng),
        None => {
            warn!("Unknown flag type: {}", name);
            fallback_message()
        }
    }
}

pub fn generate_share_text(result: &ScoreResult, friend_name: Option<&str>) -> String {
    let friend_name = match friend_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_SHARE_NAME,
    };

    format!(
        "I just assessed {} in the Green Flag Quiz and they're a {} friend! {} ({}% friend score)\n\n\
         Take the quiz and see what kind of friend YOUR friends are! 👫 #GreenFlagQuiz #FriendshipGoals",
        friend_name,
        result.flag.label(),
        result.flag.emoji(),
        result.percentage
    )
}
