// Style transformation: rewrite text in a target register while keeping its meaning.

pub mod handlers;
pub mod prompts;
pub mod service;
