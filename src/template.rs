pub const FRIEND_NAME_PLACEHOLDER: &str = "{friendName}";
pub const DEFAULT_FRIEND_NAME: &str = "Your Friend";

/// Trimmed friend name, or the default when absent or blank.
pub fn display_name(friend_name: Option<&str>) -> &str {
    match friend_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_FRIEND_NAME,
    }
}

/// Substitutes every `{friendName}` token in one pass.
pub fn fill_friend_name(template: &str, friend_name: Option<&str>) -> String {
    template.replace(FRIEND_NAME_PLACEHOLDER, display_name(friend_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_name() {
        assert_eq!(
            fill_friend_name("{friendName} is a Green Flag Legend!", Some("Sam")),
            "Sam is a Green Flag Legend!"
        );
    }

    #[test]
    fn falls_back_for_missing_or_blank_name() {
        assert_eq!(fill_friend_name("Hi {friendName}", None), "Hi Your Friend");
        assert_eq!(fill_friend_name("Hi {friendName}", Some("   ")), "Hi Your Friend");
    }

    #[test]
    fn inserted_name_is_not_rescanned() {
        assert_eq!(
            fill_friend_name("{friendName}!", Some("{friendName}")),
            "{friendName}!"
        );
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(fill_friend_name("At parties...", Some("Kim")), "At parties...");
    }
}
