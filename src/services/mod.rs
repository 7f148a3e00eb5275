// src/services/mod.rs
pub mod chatbot;
pub mod deepseek;
pub mod prompt;
