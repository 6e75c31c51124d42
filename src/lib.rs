//! bsviz: Binary Search Visualizer
//!
//! Terminal application that steps through a binary search one iteration at
//! a time, showing which cells are still in play and which were ruled out.
//!
//! Pure Core / Impure Shell: `model`, `parser` and `state` hold no I/O;
//! `view`, `trace`, `config` and `logging` talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod parser;
pub mod state;
pub mod trace;
pub mod view;
