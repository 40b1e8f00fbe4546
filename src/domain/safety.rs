//! Keyword safety router for free-text questions.
//!
//! Matching is a lowercase substring search, not tokenized: `"hit"` also
//! matches inside `"hitchhiker"`. Over-matching is accepted; there is no
//! severity grading.

use serde::Serialize;

const SAFETY_KEYWORDS: &[&str] = &[
    "suicide",
    "kill",
    "murder",
    "harm",
    "hurt",
    "abuse",
    "violent",
    "violence",
    "self-harm",
    "self harm",
    "die",
    "death threat",
    "beat",
    "hit",
    "assault",
    "coercion",
    "force",
    "threatening",
    "weapon",
];

pub const SAFETY_RESOURCES: &[&str] = &[
    "National Crisis Helpline (India): iCall - 9152987821",
    "Vandrevala Foundation: 1860-2662-345",
    "NIMHANS Helpline: 080-46110007",
    "International Association for Suicide Prevention: https://www.iasp.info/resources/Crisis_Centres/",
];

pub const SAFETY_MESSAGE: &str = "We noticed your message may relate to a difficult situation. \n\
Your wellbeing is our priority. Please reach out to professional support services \n\
who can provide the help you deserve. Astrology cannot address matters of safety \n\
or mental health - please contact the resources below.";

/// Supportive payload returned instead of astrology content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyResponse {
    pub message: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyResult {
    pub is_safe: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SafetyResponse>,
}

impl SafetyResult {
    fn safe() -> Self {
        Self {
            is_safe: true,
            response: None,
        }
    }

    fn flagged() -> Self {
        Self {
            is_safe: false,
            response: Some(SafetyResponse {
                message: SAFETY_MESSAGE.to_string(),
                resources: SAFETY_RESOURCES.iter().map(|r| r.to_string()).collect(),
            }),
        }
    }
}

/// First keyword contained in `text`, if any.
pub fn matched_keyword(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    SAFETY_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(keyword))
}

/// Checks `text` against the keyword list.
pub fn check_safety(text: &str) -> SafetyResult {
    match matched_keyword(text) {
        Some(keyword) => {
            tracing::info!(keyword, "question routed to crisis resources");
            SafetyResult::flagged()
        }
        None => SafetyResult::safe(),
    }
}
