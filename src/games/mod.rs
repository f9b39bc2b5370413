//! Reference `Game` implementations used to exercise the engine in tests
//! and the demo binary.
//!
//! These are deliberately small, fully-specified games in the spirit of
//! `original_source/tests/mcts_tests.py`'s `GuessIt`/`LeapFrog` families —
//! see `guessit` and `leapfrog` module docs for why they are original
//! reimplementations rather than byte-for-byte ports.

pub mod guessit;
pub mod leapfrog;
