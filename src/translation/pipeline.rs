/*!
 * Pipeline orchestrator.
 *
 * Drives one translation run end to end: parse the source document,
 * partition its cue texts into batches, call the oracle once per batch in
 * original order, reassemble the translated texts onto the source timing,
 * and compose the output document. Progress is reported per completed
 * batch. The oracle is injected at construction; the pipeline itself holds
 * no state across runs.
 */

use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info};

use crate::errors::PipelineError;
use crate::providers::TranslationOracle;
use crate::subtitle_processor::SubtitleDocument;
use crate::translation::batch::partition;
use crate::translation::reassemble::reassemble;

/// Default number of cue texts packed into one oracle call
///
/// Inherited as an empirical token-limit accommodation; a tunable, not a law.
pub const DEFAULT_BATCH_SIZE: usize = 40;

/// Result of a completed translation run
#[derive(Debug)]
pub struct PipelineOutput {
    /// The composed output document, same format and cue count as the input
    pub document: Vec<u8>,

    /// Number of cues translated
    pub cue_count: usize,

    /// Number of batches the run was split into
    pub batches_total: usize,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Orchestrator for one-shot subtitle translation runs
#[derive(Debug, Clone)]
pub struct TranslationPipeline {
    /// The oracle to translate with
    oracle: Arc<dyn TranslationOracle>,

    /// Maximum number of cue texts per oracle call
    batch_size: usize,
}

impl TranslationPipeline {
    /// Create a new pipeline around the given oracle
    pub fn new(oracle: Arc<dyn TranslationOracle>, batch_size: usize) -> Self {
        Self { oracle, batch_size }
    }

    /// Translate a subtitle document into the target language
    ///
    /// Batches are processed sequentially, in order: progress must reflect
    /// completed work, and reassembly needs strict original-order
    /// concatenation. `on_progress` is invoked once after each completed
    /// batch with `(completed, total)`, `completed` strictly increasing from
    /// 1 to the total.
    ///
    /// An empty document is a vacuous success: zero-cue output, no oracle
    /// calls. Any oracle failure aborts the whole run at that batch with no
    /// partial output; retry policy is the caller's to wrap around the run.
    /// The oracle call is the only await point, so a host that drops this
    /// future between batches abandons the run cleanly.
    pub async fn run(
        &self,
        document: &[u8],
        target_language: &str,
        mut on_progress: impl FnMut(usize, usize),
    ) -> Result<PipelineOutput, PipelineError> {
        let started = Instant::now();

        let source = SubtitleDocument::parse(document)?;
        if source.is_empty() {
            debug!("Document has no cues, nothing to translate");
            return Ok(PipelineOutput {
                document: source.compose().into_bytes(),
                cue_count: 0,
                batches_total: 0,
                elapsed: started.elapsed(),
            });
        }

        let batches = partition(&source.texts(), self.batch_size)?;
        let total = batches.len();
        info!(
            "Translating {} cues to {} in {} batches",
            source.len(),
            target_language,
            total
        );

        let mut translated = Vec::with_capacity(total);
        for (batch_index, batch) in batches.iter().enumerate() {
            let output = self
                .oracle
                .translate_batch(batch, target_language)
                .await
                .map_err(|source| PipelineError::Oracle {
                    batch_index,
                    source,
                })?;

            debug!(
                "Batch {}/{} completed ({} texts)",
                batch_index + 1,
                total,
                output.len()
            );
            translated.push(output);
            on_progress(batch_index + 1, total);
        }

        let result = reassemble(&source, translated)?;

        Ok(PipelineOutput {
            cue_count: result.len(),
            batches_total: total,
            document: result.compose().into_bytes(),
            elapsed: started.elapsed(),
        })
    }
}
