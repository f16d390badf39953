// Campaign generation: request/result types, prompt assembly, response
// parsing and schema validation. Remote calls go through gateway::AiGateway.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
