// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Signed cursors index slices once the engines have proven them in range
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]

//! Sorting algorithms as resumable step engines, for frame-by-frame
//! animation.
//!
//! Bubble, insertion and quick sort are each reformulated as a state
//! machine that performs one comparison or swap per call (or, in fast mode,
//! runs to the next pass, placement or partition boundary), preserving the
//! exact operation order of the loop/recursive originals.
//!
//! # Key entry points
//!
//! - [`dispatcher::Dispatcher`] - owns the values and the active engine;
//!   `start`, `step`, `reset`, `shuffle`
//! - [`engine::EngineState`] - the tagged union of per-algorithm cursors
//! - [`highlight::highlights`] - which indices to color, derived from the
//!   cursors
//! - [`controller::Controller`] - pause / single-step / fast-mode driver
//!   state fed by [`input::Command`]s
//! - [`frame::Frame`] - per-tick snapshot for a renderer
//! - [`options::Options`] - TOML configuration
//!
//! ```
//! use sortvis::{dispatcher::Dispatcher, engine::Algorithm};
//!
//! let mut sorter = Dispatcher::new(vec![3, 1, 2].into());
//! sorter.start(Algorithm::Quick);
//! while sorter.step(false) {}
//! assert_eq!(sorter.sequence().values(), &[1, 2, 3]);
//! ```

pub mod controller;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod frame;
pub mod highlight;
pub mod input;
pub mod options;
pub mod sequence;
pub mod util;

pub use controller::{Controller, TickOutcome};
pub use dispatcher::{Dispatcher, RunStats};
pub use engine::{Algorithm, EngineState, StepOutcome, StepStats};
pub use error::SortvisError;
pub use frame::{Bar, BarLayout, Frame};
pub use highlight::{Highlights, Role};
pub use input::{Command, KeyBindings};
pub use options::Options;
pub use sequence::{SequenceStore, Value};
