use crate::text::NO_ANSWER;
use crate::AnswerPayload;

/// Picks the text shown for an answer, in order of precedence:
/// `improved_answer`, then `answer`, then the "No answer found." placeholder.
/// Empty strings count as absent.
pub fn select_display_text(payload: &AnswerPayload) -> String {
    [payload.improved_answer.as_deref(), payload.answer.as_deref()]
        .into_iter()
        .flatten()
        .find(|text| !text.is_empty())
        .unwrap_or(NO_ANSWER)
        .to_string()
}
