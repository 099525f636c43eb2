/*!
 * Tests for oracle implementations
 */

use subtrans::errors::OracleError;
use subtrans::providers::TranslationOracle;
use subtrans::providers::mock::MockOracle;
use subtrans::providers::openai::{ChatRequest, ChatResponse, DEFAULT_DELIMITER, OpenAI};
use crate::common;

#[test]
fn test_chatRequest_serialization_shouldMatchWireFormat() {
    let request = ChatRequest::new("gpt-4-turbo", 2000)
        .add_message("system", "You are a Yoruba AI that translates English text into Yoruba.")
        .add_message("user", "Translate the following texts to Yoruba:\n\nHello")
        .temperature(1.0)
        .top_p(1.0);

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "gpt-4-turbo");
    assert_eq!(value["max_tokens"], 2000);
    assert_eq!(value["messages"].as_array().unwrap().len(), 2);
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][1]["role"], "user");
    assert_eq!(value["temperature"], 1.0);
    assert_eq!(value["top_p"], 1.0);
}

#[test]
fn test_chatRequest_serialization_withoutSamplingParams_shouldOmitThem() {
    let request = ChatRequest::new("gpt-4-turbo", 500).add_message("user", "Hello");

    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("temperature").is_none());
    assert!(value.get("top_p").is_none());
}

#[test]
fn test_chatResponse_deserialization_shouldExtractContent() {
    let body = r#"{
        "choices": [
            {"message": {"role": "assistant", "content": "  Bawo\n\nAye  "}}
        ]
    }"#;

    let response: ChatResponse = serde_json::from_str(body).unwrap();
    let text = OpenAI::extract_text_from_response(&response).unwrap();

    assert_eq!(text, "Bawo\n\nAye");
}

#[test]
fn test_chatResponse_withNoChoices_shouldBeMalformed() {
    let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();

    let result = OpenAI::extract_text_from_response(&response);

    assert!(matches!(result, Err(OracleError::MalformedResponse(_))));
}

#[test]
fn test_joinBatch_shouldJoinWithDelimiter() {
    let texts = common::batch(&["Hello", "World"]);

    let joined = OpenAI::join_batch(&texts, DEFAULT_DELIMITER);

    assert_eq!(joined, "Hello\n\nWorld");
}

#[test]
fn test_joinBatch_withEmbeddedDelimiter_shouldCollapseIt() {
    // A blank line inside one text would desynchronize the response split
    let texts = common::batch(&["First\n\nhalf", "Second"]);

    let joined = OpenAI::join_batch(&texts, DEFAULT_DELIMITER);

    assert_eq!(joined, "First\nhalf\n\nSecond");
}

#[test]
fn test_joinBatch_withRunOfBlankLines_shouldCollapseAll() {
    let texts = common::batch(&["a\n\n\n\nb"]);

    let joined = OpenAI::join_batch(&texts, DEFAULT_DELIMITER);

    assert!(!joined.contains(DEFAULT_DELIMITER));
}

#[test]
fn test_splitResponse_withMatchingCount_shouldSplitAndTrim() {
    let content = "  Bawo \n\n Aye \n\n O dabo  ";

    let parts = OpenAI::split_response(content, DEFAULT_DELIMITER, 3).unwrap();

    assert_eq!(parts, vec!["Bawo", "Aye", "O dabo"]);
}

#[test]
fn test_splitResponse_withSingleBlock_shouldSucceed() {
    let parts = OpenAI::split_response("Bawo", DEFAULT_DELIMITER, 1).unwrap();

    assert_eq!(parts, vec!["Bawo"]);
}

#[test]
fn test_splitResponse_withWrongCount_shouldFailWithMalformedResponse() {
    // The oracle merged two blocks into one
    let content = "Bawo\n\nAye";

    let result = OpenAI::split_response(content, DEFAULT_DELIMITER, 3);

    match result {
        Err(OracleError::MalformedResponse(message)) => {
            assert!(message.contains("expected 3"));
            assert!(message.contains("got 2"));
        }
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[test]
fn test_openai_debug_shouldNotLeakApiKey() {
    let client = OpenAI::new("sk-secret-key", "", "gpt-4-turbo", 120);

    let debug = format!("{:?}", client);

    assert!(!debug.contains("sk-secret-key"));
    assert!(debug.contains("gpt-4-turbo"));
}

/// The mock oracle honors the count-preservation contract in identity mode
#[tokio::test]
async fn test_mockOracle_identity_shouldPreserveCount() {
    let oracle = MockOracle::identity();
    let texts = common::batch(&["One", "Two", "Three"]);

    let result = oracle.translate_batch(&texts, "Fon").await.unwrap();

    assert_eq!(result.len(), texts.len());
}
