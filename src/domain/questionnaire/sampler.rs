//! Session question sampling: one variant per marker.

use rand::Rng;
use tracing::debug;

use super::{Question, QuestionBank, QuestionBankError};

/// Draws one variant per marker, uniformly at random.
///
/// The result is ordered AMI before CMI, then by ascending question id.
/// The random source is injected so callers can seed it.
///
/// # Errors
///
/// `QuestionBankError::Empty` if the bank has no markers.
pub fn select_session_questions<R>(
    bank: &QuestionBank,
    rng: &mut R,
) -> Result<Vec<Question>, QuestionBankError>
where
    R: Rng,
{
    if bank.marker_count() == 0 {
        return Err(QuestionBankError::Empty);
    }

    let mut selected: Vec<Question> = bank
        .pools()
        .filter(|(_, variants)| !variants.is_empty())
        .map(|(_, variants)| variants[rng.random_range(0..variants.len())].clone())
        .collect();

    selected.sort_by(|a, b| a.dimension.cmp(&b.dimension).then(a.id.cmp(&b.id)));

    debug!(count = selected.len(), "Session questions selected");
    Ok(selected)
}
