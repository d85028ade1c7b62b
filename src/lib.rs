//! # Introduction
//!
//! algoTTY precomputes every intermediate state of a classic algorithm run
//! (comparison sorts, minimum spanning trees, binary search tree traversals)
//! as an immutable timeline, and plays that timeline back step by step in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Generator → Timeline (Snapshots) → Player → TUI
//! ```
//!
//! 1. [`structures`]: the data structures the algorithms run on: an owned
//!    binary search tree, a weighted undirected graph and a union-find.
//! 2. [`generators`]: run an algorithm to completion and record a
//!    [`snapshot::Snapshot`] at every meaningful step.
//! 3. [`snapshot`]: step kinds, per-step state and metrics, and the
//!    [`snapshot::Timeline`] container.
//! 4. [`playback`]: cursor, stepping and tick-driven autoplay over a timeline.
//! 5. [`random`] and [`config`]: seeded input generation, defaults and the
//!    command line.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algotty::generators::{generate_sort_timeline, SortAlgorithm};
//! use algotty::playback::Player;
//! use std::time::Duration;
//!
//! let timeline = generate_sort_timeline(SortAlgorithm::Merge, &[5, 3, 8, 1]);
//! let mut player = Player::new(timeline, Duration::from_millis(300));
//! player.jump_to_end();
//! assert_eq!(player.current_snapshot().state.as_array(), Some(&[1, 3, 5, 8][..]));
//! ```

pub mod config;
pub mod generators;
pub mod playback;
pub mod random;
pub mod snapshot;
pub mod structures;
pub mod ui;
