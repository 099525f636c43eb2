/*!
 * Positional batch partitioning.
 *
 * Cue texts are grouped into contiguous fixed-size batches before being
 * handed to the oracle, purely to bound the number of service calls.
 */

use crate::errors::PipelineError;

/// Partition an ordered sequence into contiguous batches of at most `size`
///
/// Batches cover the sequence exactly once, in order, with no overlap and no
/// gaps; the last batch may be shorter. Boundaries are solely a function of
/// position, never of content: translation units are independent per text,
/// so keeping semantically related neighbors together buys nothing.
///
/// Fails with `InvalidConfiguration` if `size` is zero. This is checked
/// before any oracle work happens.
pub fn partition<T: Clone>(items: &[T], size: usize) -> Result<Vec<Vec<T>>, PipelineError> {
    if size < 1 {
        return Err(PipelineError::InvalidConfiguration(
            "batch size must be at least 1".to_string(),
        ));
    }

    Ok(items.chunks(size).map(|chunk| chunk.to_vec()).collect())
}
