/*!
 * Mock oracle implementations for testing.
 *
 * This module provides mock oracles that simulate different behaviors:
 * - `MockOracle::identity()` - Returns every batch unchanged
 * - `MockOracle::tagged()` - Prefixes each text with the target language
 * - `MockOracle::scripted(...)` - Replays canned responses per call
 * - `MockOracle::short_by_one(...)` - Drops one element from a chosen batch
 * - `MockOracle::unavailable()` / `MockOracle::malformed()` - Always fail
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::OracleError;
use crate::providers::TranslationOracle;

/// Behavior mode for the mock oracle
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Returns every batch unchanged
    Identity,
    /// Prefixes each text with the target language
    Tagged,
    /// Replays the given responses, one per call, in order
    Scripted(Vec<Vec<String>>),
    /// Behaves like Identity except the chosen call drops its last element
    ShortByOne {
        /// Zero-based call index that under-produces
        batch_index: usize,
    },
    /// Always fails with a transient error
    Unavailable,
    /// Always fails with an undecodable-response error
    Malformed,
}

/// Mock oracle for exercising pipeline behavior without a real service
#[derive(Debug)]
pub struct MockOracle {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate_batch calls made so far
    call_count: Arc<AtomicUsize>,
}

impl MockOracle {
    /// Create a new mock oracle with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock that returns every batch unchanged
    pub fn identity() -> Self {
        Self::new(MockBehavior::Identity)
    }

    /// Create a mock that prefixes each text with the target language
    pub fn tagged() -> Self {
        Self::new(MockBehavior::Tagged)
    }

    /// Create a mock that replays canned responses, one per call
    pub fn scripted(responses: Vec<Vec<String>>) -> Self {
        Self::new(MockBehavior::Scripted(responses))
    }

    /// Create a mock that drops one element from the chosen call
    pub fn short_by_one(batch_index: usize) -> Self {
        Self::new(MockBehavior::ShortByOne { batch_index })
    }

    /// Create a mock that always fails with a transient error
    pub fn unavailable() -> Self {
        Self::new(MockBehavior::Unavailable)
    }

    /// Create a mock that always fails with an undecodable-response error
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Number of translate_batch calls made so far, shared across clones
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Clone for MockOracle {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            call_count: Arc::clone(&self.call_count),
        }
    }
}

#[async_trait]
impl TranslationOracle for MockOracle {
    async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
    ) -> Result<Vec<String>, OracleError> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Identity => Ok(texts.to_vec()),

            MockBehavior::Tagged => Ok(texts
                .iter()
                .map(|text| format!("[{target_language}] {text}"))
                .collect()),

            MockBehavior::Scripted(responses) => responses.get(call).cloned().ok_or_else(|| {
                OracleError::Unavailable(format!("no scripted response for call {call}"))
            }),

            MockBehavior::ShortByOne { batch_index } => {
                let mut out = texts.to_vec();
                if call == *batch_index {
                    out.pop();
                }
                Ok(out)
            }

            MockBehavior::Unavailable => Err(OracleError::Unavailable(
                "simulated transient failure".to_string(),
            )),

            MockBehavior::Malformed => Err(OracleError::MalformedResponse(
                "simulated undecodable response".to_string(),
            )),
        }
    }
}
