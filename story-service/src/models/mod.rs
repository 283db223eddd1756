pub mod story;

pub use story::{GenerationConfig, StoryLength, StoryRequest, StoryResponse};
