/*!
 * End-to-end translation workflow tests: file in, translated file out,
 * driven through the pipeline with mock oracles.
 */

use std::sync::Arc;
use subtrans::file_utils::FileManager;
use subtrans::providers::mock::MockOracle;
use subtrans::subtitle_processor::SubtitleDocument;
use subtrans::translation::TranslationPipeline;
use crate::common;

#[tokio::test]
async fn test_workflow_withSampleFile_shouldWriteAlignedTranslation() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input_path = common::create_test_subtitle(&dir, "movie.srt").unwrap();

    let content = FileManager::read_to_bytes(&input_path).unwrap();
    let oracle = MockOracle::tagged();
    let pipeline = TranslationPipeline::new(Arc::new(oracle.clone()), 2);

    let output = pipeline.run(&content, "Yoruba", |_, _| {}).await.unwrap();

    let output_path = FileManager::generate_output_path(&input_path, "Yoruba");
    FileManager::write_bytes(&output_path, &output.document).unwrap();

    assert_eq!(output_path, dir.join("movie.yoruba.srt"));
    assert!(FileManager::file_exists(&output_path));

    // The written document parses, has the same shape, and every cue keeps
    // its index and timing while carrying translated text
    let source = SubtitleDocument::parse(&content).unwrap();
    let translated =
        SubtitleDocument::parse(&FileManager::read_to_bytes(&output_path).unwrap()).unwrap();

    assert_eq!(translated.len(), source.len());
    for (translated_cue, source_cue) in translated.cues.iter().zip(&source.cues) {
        assert_eq!(translated_cue.index, source_cue.index);
        assert_eq!(translated_cue.start_ms, source_cue.start_ms);
        assert_eq!(translated_cue.end_ms, source_cue.end_ms);
        assert_eq!(
            translated_cue.text,
            format!("[Yoruba] {}", source_cue.text)
        );
    }

    // Three cues at batch size two means two oracle calls
    assert_eq!(oracle.call_count(), 2);
}

#[tokio::test]
async fn test_workflow_withEmptyFile_shouldWriteEmptyDocumentWithoutOracleCalls() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input_path = common::create_test_file(&dir, "empty.srt", "").unwrap();

    let content = FileManager::read_to_bytes(&input_path).unwrap();
    let oracle = MockOracle::identity();
    let pipeline = TranslationPipeline::new(Arc::new(oracle.clone()), 40);

    let output = pipeline.run(&content, "Fon", |_, _| {}).await.unwrap();

    assert_eq!(output.cue_count, 0);
    assert!(output.document.is_empty());
    assert_eq!(oracle.call_count(), 0);
}

#[tokio::test]
async fn test_workflow_withLargerDocument_shouldReportBatchTotals() {
    let source = common::sample_document(100);
    let oracle = MockOracle::identity();
    let pipeline = TranslationPipeline::new(Arc::new(oracle.clone()), 40);

    let mut last_event = (0, 0);
    let output = pipeline
        .run(source.compose().as_bytes(), "Yoruba", |completed, total| {
            last_event = (completed, total);
        })
        .await
        .unwrap();

    // 100 cues at batch size 40 gives 3 batches
    assert_eq!(output.batches_total, 3);
    assert_eq!(last_event, (3, 3));
    assert_eq!(output.cue_count, 100);
    assert_eq!(oracle.call_count(), 3);
}
