/// True when `phrase` occurs in `text` with no letter or digit directly on
/// either side, so "keys" hits "car keys" but not "turkeys".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }

    text.match_indices(phrase).any(|(start, _)| {
        let end = start + phrase.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();

        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

pub fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "A", "A and B", "A, B and C".
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => format!(
            "{} and {}",
            init.iter().map(|name| name.as_ref()).collect::<Vec<_>>().join(", "),
            last.as_ref()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_phrase_word_boundaries() {
        assert!(contains_phrase("car keys", "keys"));
        assert!(contains_phrase("keys", "keys"));
        assert!(contains_phrase("grass-fed beef", "grass"));
        assert!(!contains_phrase("smoked turkeys", "keys"));
        assert!(!contains_phrase("rice", "ice"));
        assert!(!contains_phrase("anything", ""));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("smoked trout"), "Smoked Trout");
        assert_eq!(title_case("xyzzy"), "Xyzzy");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names::<&str>(&[]), "");
        assert_eq!(join_names(&["Brie"]), "Brie");
        assert_eq!(join_names(&["Brie", "Figs"]), "Brie and Figs");
        assert_eq!(join_names(&["Brie", "Figs", "Honey"]), "Brie, Figs and Honey");
    }
}
