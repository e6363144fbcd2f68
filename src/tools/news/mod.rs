pub mod tool_router;

pub use tool_router::{NewsRouter, NewsSvc, PROMPT_NAME};
