// Creative content generation: turn input text into a poem, song, story, ...

pub mod handlers;
pub mod kind;
pub mod prompts;
pub mod service;
