/*!
 * Alignment reassembly.
 *
 * Translated batches are flattened in original order and rejoined onto the
 * source cues' index and timing metadata. The count check here is the
 * load-bearing guard: an oracle that under- or over-produces outputs would
 * otherwise silently shift every subsequent cue's text by one position.
 */

use crate::errors::PipelineError;
use crate::subtitle_processor::SubtitleDocument;

/// Rejoin translated batches onto the original cue sequence
///
/// Position `i` of the flattened batches is paired with `original[i]`'s
/// index and timing; only the text differs in the result. If the flattened
/// count disagrees with the cue count the run fails with
/// `AlignmentMismatch` and no document is produced — a misaligned subtitle
/// file is worse than no file.
pub fn reassemble(
    original: &SubtitleDocument,
    translated_batches: Vec<Vec<String>>,
) -> Result<SubtitleDocument, PipelineError> {
    let translated: Vec<String> = translated_batches.into_iter().flatten().collect();

    if translated.len() != original.len() {
        return Err(PipelineError::AlignmentMismatch {
            expected: original.len(),
            actual: translated.len(),
        });
    }

    let cues = original
        .cues
        .iter()
        .zip(translated)
        .map(|(cue, text)| cue.with_text(text))
        .collect();

    Ok(SubtitleDocument::from_cues(cues))
}
