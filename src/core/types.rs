//! Core type definitions used throughout the codebase

/// A word in the phonemic working alphabet
pub type Word = String;

/// Index-aligned list of words; its length never changes during a run
pub type WordList = Vec<Word>;
