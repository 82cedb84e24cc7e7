pub mod gateway;
pub mod history;
pub mod llm;
