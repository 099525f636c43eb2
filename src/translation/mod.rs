/*!
 * Batch translation pipeline.
 *
 * This module drives the translation of a subtitle document through the
 * oracle boundary. It is split into several submodules:
 *
 * - `batch`: Positional partitioning of cue texts into bounded batches
 * - `reassemble`: Rejoining translated batches onto the original cue metadata
 * - `pipeline`: The orchestrator running parse, translate and reassemble
 */

// Re-export main types for easier usage
pub use self::batch::partition;
pub use self::pipeline::{PipelineOutput, TranslationPipeline};
pub use self::reassemble::reassemble;

// Submodules
pub mod batch;
pub mod pipeline;
pub mod reassemble;
