/*!
 * Translation oracle implementations.
 *
 * This module contains client implementations for the external translation
 * service boundary:
 * - OpenAI: chat-completions API integration
 * - Mock: scriptable in-memory oracle for tests and benchmarks
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::OracleError;

/// Capability interface for the external translation service
///
/// Implementations take an ordered sequence of text blocks and a free-form
/// target-language identifier and return an ordered sequence of translated
/// blocks. The contract every implementation must uphold: **the returned
/// sequence has exactly the same length as the input, in the same order.**
/// An oracle that cannot guarantee this itself must raise
/// `OracleError::MalformedResponse` rather than return a shifted sequence —
/// the pipeline independently re-checks the total count before any output
/// is produced.
#[async_trait]
pub trait TranslationOracle: Send + Sync + Debug {
    /// Translate one batch of texts into the target language
    ///
    /// # Arguments
    /// * `texts` - Ordered source-language text blocks
    /// * `target_language` - Display name of the target language, passed
    ///   through verbatim (e.g. "Yoruba", "Fon")
    ///
    /// # Returns
    /// * `Result<Vec<String>, OracleError>` - Exactly `texts.len()` translated
    ///   blocks in input order, or an error
    async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, OracleError>;
}

pub mod mock;
pub mod openai;
