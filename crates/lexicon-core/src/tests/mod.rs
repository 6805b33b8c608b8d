//! Unit tests for `lexicon_core`.

mod loader_tests;
