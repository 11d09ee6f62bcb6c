mod strings;

pub use strings::{
    char_offset, context_window, decode_text, sentence_segments, word_count, CONTEXT_RADIUS,
};
