//! PosGame - Sentence generation and ground-truth tagging
//!
//! Content engine for a part-of-speech classification game: produces a
//! sentence in the requested language, classifies its difficulty, and builds
//! the answer key the presentation layer scores against.

pub mod answer_key;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod difficulty;
pub mod engine;
pub mod error;
pub mod generator;
pub mod language;
pub mod memory;
pub mod normalize;
pub mod pos;
pub mod script;
pub mod source;
pub mod tagging;
pub mod translate;
