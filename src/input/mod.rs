mod reader;

pub use reader::{InputReader, STDIN_PATH};
