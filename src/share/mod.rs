use crate::template::display_name;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("whitespace pattern is valid");
}

pub fn twitter_intent_url(share_text: &str, origin: &str) -> String {
    let text = share_text.replace('\n', " ");
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(&text),
        urlencoding::encode(origin)
    )
}

pub fn facebook_share_url(origin: &str) -> String {
    format!("https://www.facebook.com/sharer/sharer.php?u={}", urlencoding::encode(origin))
}

/// Text placed on the clipboard when no share dialog is available.
pub fn clipboard_text(share_text: &str, origin: &str) -> String {
    format!("{}\n\n{}", share_text, origin)
}

pub fn share_title(friend_name: Option<&str>) -> String {
    format!("{} - Green Flag Quiz Results", display_name(friend_name))
}

/// File name for a saved result image, e.g. `Mary-Jane-quiz-results.png`.
pub fn screenshot_file_name(friend_name: Option<&str>) -> String {
    let name = WHITESPACE.replace_all(display_name(friend_name), "-");
    format!("{}-quiz-results.png", name)
}
