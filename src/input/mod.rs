mod reader;
mod tokenizer;

pub use reader::{stdin_reader, EditorReader, LineReader, ReadEvent, StreamReader};
pub use tokenizer::ArgVector;
