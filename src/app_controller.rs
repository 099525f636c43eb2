use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::Arc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::providers::openai::OpenAI;
use crate::translation::TranslationPipeline;

// @module: Application controller for subtitle translation

/// Main application controller for subtitle translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the main workflow for one subtitle file
    ///
    /// Reads the input, drives one translation run with a progress bar, and
    /// writes the translated document next to the input (or to the explicit
    /// output path).
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_file: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<()> {
        // Check if the input file exists
        if !FileManager::file_exists(&input_file) {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        // Check if translation already exists
        let output_path = output_file.unwrap_or_else(|| {
            FileManager::generate_output_path(&input_file, &self.config.target_language)
        });
        if FileManager::file_exists(&output_path) && !force_overwrite {
            warn!("Skipping file, translation already exists (use -f to force overwrite)");
            return Ok(());
        }

        let content = FileManager::read_to_bytes(&input_file)?;

        // Build the oracle and pipeline from config
        let oracle = Arc::new(
            OpenAI::new(
                self.config.resolved_api_key(),
                self.config.provider.endpoint.clone(),
                self.config.provider.model.clone(),
                self.config.provider.timeout_secs,
            )
            .with_delimiter(self.config.delimiter.clone()),
        );
        let pipeline = TranslationPipeline::new(oracle, self.config.batch_size);

        info!(
            "subtrans: translating {:?} to {} with {}",
            input_file.file_name().unwrap_or_default(),
            self.config.target_language,
            self.config.provider.model
        );

        // Create a progress bar for batch tracking; the total is known once
        // the pipeline reports its first completed batch
        let progress_bar = ProgressBar::new(0);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} batches ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Translating");

        // Clone the progress_bar for use in the callback
        let pb = progress_bar.clone();
        let output = pipeline
            .run(&content, &self.config.target_language, move |completed, total| {
                pb.set_length(total as u64);
                pb.set_position(completed as u64);
            })
            .await
            .with_context(|| format!("Translation failed for {:?}", input_file))?;

        // Finish and clear the progress bar so only the summary lines remain
        progress_bar.finish_and_clear();

        FileManager::write_bytes(&output_path, &output.document)?;

        if output.cue_count == 0 {
            info!("Input had no cues, wrote an empty subtitle file");
        } else {
            info!(
                "Successfully translated {} cues in {} batches - {}",
                output.cue_count,
                output.batches_total,
                Self::format_duration(output.elapsed)
            );
        }
        info!("Translated subtitle saved to {}", output_path.display());

        Ok(())
    }

    /// Format a duration for the completion summary
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
