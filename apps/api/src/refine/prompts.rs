// All LLM prompt text for content refinement.

use crate::llm_client::prompts::{
    injection_guard, OUTPUT_FORMAT_ONLY, USER_PROVIDED_CLOSE, USER_PROVIDED_OPEN,
};
use crate::refine::models::RefineRequest;

/// Used when the caller does not say what kind of content is being refined.
pub const DEFAULT_CONTENT_TYPE: &str = "content";

/// Refine system instruction. Replace `{content_type}`, `{injection_guard}`
/// and `{output_format}` before sending.
pub const REFINE_SYSTEM_TEMPLATE: &str = "You are a professional content strategist and growth marketer.
Refine the following {content_type}.
Take into account ONLY the context provided inside the <user_provided> tags. {injection_guard}

{output_format}";

pub fn build_system_instruction(content_type: &str) -> String {
    let content_type = match content_type.trim() {
        "" => DEFAULT_CONTENT_TYPE,
        t => t,
    };
    REFINE_SYSTEM_TEMPLATE
        .replace("{content_type}", content_type)
        .replace("{injection_guard}", &injection_guard("user_provided"))
        .replace("{output_format}", OUTPUT_FORMAT_ONLY)
}

pub fn build_user_prompt(request: &RefineRequest) -> String {
    format!(
        "{USER_PROVIDED_OPEN}\n\
         Topic Context: \"{topic}\"\n\
         \n\
         Instruction:\n\
         {instruction}\n\
         \n\
         Original Content:\n\
         {content}\n\
         {USER_PROVIDED_CLOSE}",
        topic = request.topic.as_deref().unwrap_or_default(),
        instruction = request.instruction,
        content = request.content.as_deref().unwrap_or_default(),
    )
}
