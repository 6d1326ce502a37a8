//! Text processing adapters: tokenizer, Persian normalizer, Arabic-script shaper.

pub mod normalizer;
pub mod shaper;
pub mod tokenizer;

pub use normalizer::PersianNormalizer;
pub use shaper::ArabicShaper;
pub use tokenizer::UnicodeWordTokenizer;
