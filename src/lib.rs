/*!
 * # subtrans - Subtitle Batch Translator
 *
 * A Rust library for translating SRT subtitle files with an AI translation
 * service.
 *
 * ## Features
 *
 * - Parse and compose SRT subtitle documents with millisecond timing
 * - Translate cue texts in bounded batches to cut down on service calls
 * - Preserve every cue's ordinal index and timing in the output
 * - Strict alignment guard: a run fails rather than emit shifted cues
 * - Per-batch progress reporting for driving a progress indicator
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `subtitle_processor`: Cue model and SRT codec
 * - `translation`: The batch translation pipeline:
 *   - `translation::batch`: Positional partitioning of cue texts
 *   - `translation::reassemble`: Alignment-checked reassembly
 *   - `translation::pipeline`: Run orchestration and progress events
 * - `providers`: Translation oracle implementations:
 *   - `providers::openai`: Chat-completions API client
 *   - `providers::mock`: Scriptable oracle for tests and benchmarks
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod providers;
pub mod subtitle_processor;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, OracleError, PipelineError};
pub use providers::TranslationOracle;
pub use subtitle_processor::{Cue, SubtitleDocument};
pub use translation::{PipelineOutput, TranslationPipeline};
