/// Answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Affirmative,
    Negative,
}

impl Intent {
    pub fn is_affirmative(&self) -> bool {
        *self == Intent::Affirmative
    }
}

// Base forms only; inflections are folded onto these by `lemma`.
const AFFIRMATIVE: &[&str] = &["yes", "yeah", "yup"];
const NEGATIVE: &[&str] = &["no", "nope", "nah"];

/// Detect yes/no intent in a free text answer.
///
/// Words are scanned left to right and the first recognised word decides.
/// Anything unrecognised counts as negative.
pub fn detect_intent(response: &str) -> Intent {
    let response = response.trim().to_lowercase();
    let intent = tokens(&response)
        .map(lemma)
        .find_map(|word| {
            if AFFIRMATIVE.contains(&word) {
                Some(Intent::Affirmative)
            } else if NEGATIVE.contains(&word) {
                Some(Intent::Negative)
            } else {
                None
            }
        })
        .unwrap_or(Intent::Negative);
    log::debug!("Response {:?} read as {:?}", response, intent);
    intent
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
}

/// Fold the few inflected forms people type onto the recognised words.
fn lemma(word: &str) -> &str {
    match word {
        "yess" | "yes's" | "yesses" => "yes",
        "yeahs" => "yeah",
        "noes" | "nos" => "no",
        _ => word,
    }
}
