pub mod ast;
pub mod command;
pub(crate) mod engine;
pub mod include;
pub mod lexer;
pub mod parser;
pub mod render;
pub mod render_context;
