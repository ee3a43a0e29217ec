//! Dice-driven yes/no narrative oracle for Emberdelve.
//!
//! A question and the current surge counter go in; a structured answer
//! comes out: yes or no, an optional qualifier, a surge delta, and (on
//! the most dramatic rolls) a twist drawn from a twenty-entry side
//! table. The oracle itself is pure; the [`session::OracleSession`]
//! owns the surge counter and the narrative state machine and applies
//! the side effects each answer implies.

/// Session configuration.
pub mod config;
/// Error types for the oracle crate.
pub mod error;
/// The resolution engine: roll adjustment and the answer bands.
pub mod fate;
/// Narrative bookkeeping: threads, scenes, vignette, facts.
pub mod narrative;
/// The session orchestrator gluing oracle, surge, and narrative.
pub mod session;
/// The surge counter: an accumulating risk gauge.
pub mod surge;
/// The twenty-entry twist side table.
pub mod twist;

pub use config::OracleConfig;
pub use error::{OracleError, SessionResult};
pub use fate::{OracleAnswer, OracleResult, Qualifier, resolve};
pub use narrative::{Fact, NarrativeState, Scene, SceneId, StoryStage, Thread, ThreadId, Vignette, VignetteStage};
pub use session::OracleSession;
pub use surge::SurgeCounter;
pub use twist::{TwistOutcome, TwistRoll, twist_outcome};
