pub mod ast;
pub mod codegen;
pub mod config;
pub mod converter;
pub mod error;
pub mod model;
pub mod naming;
pub mod orchestrator;
