pub mod providers;
pub mod story;

pub use story::{mock_story, StoryError, StoryGenerator};
