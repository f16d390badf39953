// Content refinement: rewrite an existing piece of campaign copy per a
// caller instruction. Remote calls go through gateway::AiGateway.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod refiner;
