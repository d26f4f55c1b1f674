// Core algorithm exports
pub mod gap;
pub mod scoring;
pub mod stopwords;
pub mod vector;

pub use gap::gap;
pub use scoring::{score, to_percentage};
pub use stopwords::{is_stop_word, ENGLISH_STOP_WORDS};
pub use vector::{cosine_similarity, tokenize, Vocabulary};
