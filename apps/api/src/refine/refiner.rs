//! Refine response normalization.
//!
//! Array-shaped replies are parsed as JSON with no checks on the element
//! types. Anything else, or an array that is not valid JSON, is returned as
//! trimmed text. Never errors.

use tracing::error;

use crate::llm_client::strip_code_fences;
use crate::refine::models::RefinedContent;

pub fn normalize_refined_response(response_text: &str) -> RefinedContent {
    let cleaned = strip_code_fences(response_text);

    if cleaned.starts_with('[') && cleaned.ends_with(']') {
        match serde_json::from_str::<Vec<serde_json::Value>>(cleaned) {
            Ok(items) => return RefinedContent::Items(items),
            Err(e) => error!("Failed to parse JSON array from Gemini: {e}"),
        }
    }

    RefinedContent::Text(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;

    /// Collects formatted log output so tests can assert on emitted events.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Runs `f` with a subscriber that records every event into the returned buffer.
    fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        (result, logs.contents())
    }

    fn items(values: &[serde_json::Value]) -> RefinedContent {
        RefinedContent::Items(values.to_vec())
    }

    #[test]
    fn test_array_reply_becomes_items() {
        assert_eq!(
            normalize_refined_response(r#"["a","b"]"#),
            items(&[json!("a"), json!("b")])
        );
    }

    #[test]
    fn test_fenced_array_reply_becomes_items() {
        assert_eq!(
            normalize_refined_response("```json\n[\"a\", \"b\"]\n```"),
            items(&[json!("a"), json!("b")])
        );
        assert_eq!(
            normalize_refined_response("  ```\n[\"a\"]\n```  "),
            items(&[json!("a")])
        );
    }

    #[test]
    fn test_invalid_array_falls_back_to_text() {
        assert_eq!(
            normalize_refined_response("[a,b]"),
            RefinedContent::Text("[a,b]".to_string())
        );
    }

    #[test]
    fn test_invalid_array_logs_parse_error() {
        let (result, logs) = with_captured_logs(|| normalize_refined_response("[a,b]"));

        assert_eq!(result, RefinedContent::Text("[a,b]".to_string()));
        assert!(logs.contains("ERROR"));
        assert!(logs.contains("Failed to parse JSON array from Gemini"));
    }

    #[test]
    fn test_valid_array_logs_nothing() {
        let (_, logs) = with_captured_logs(|| normalize_refined_response(r#"["a", 2]"#));
        assert!(logs.is_empty());
    }

    #[test]
    fn test_non_string_arrays_are_returned_parsed() {
        assert_eq!(
            normalize_refined_response("[1, 2]"),
            items(&[json!(1), json!(2)])
        );
        assert_eq!(
            normalize_refined_response(r#"["a", 2]"#),
            items(&[json!("a"), json!(2)])
        );
        assert_eq!(
            normalize_refined_response(r#"[{"scene":1,"visual":"x"}]"#),
            items(&[json!({"scene": 1, "visual": "x"})])
        );
    }

    #[test]
    fn test_plain_text_is_trimmed_and_returned() {
        assert_eq!(
            normalize_refined_response("\n  Rewritten caption here.  \n"),
            RefinedContent::Text("Rewritten caption here.".to_string())
        );
        assert_eq!(
            normalize_refined_response("```\nRewritten caption here.\n```"),
            RefinedContent::Text("Rewritten caption here.".to_string())
        );
    }

    #[test]
    fn test_empty_reply_is_empty_text() {
        assert_eq!(
            normalize_refined_response(""),
            RefinedContent::Text(String::new())
        );
    }

    #[test]
    fn test_bracketed_prose_is_not_an_array() {
        let text = "[Intro] Hook line here [Outro]";
        assert_eq!(
            normalize_refined_response(text),
            RefinedContent::Text(text.to_string())
        );
    }
}
