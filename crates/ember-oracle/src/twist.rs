//! The twist side table.
//!
//! When the oracle answers `unexpectedly`, an independent d20 resolves
//! through this fixed twenty-entry table. Each live entry names exactly
//! one narrative-transition tag; the oracle never mutates state itself.
//! Entries 18-20 are reserved in the chart with no defined effect and
//! stay an explicit no-op.

use serde::{Deserialize, Serialize};

use crate::narrative::StoryStage;

/// A narrative-transition tag named by the twist table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwistOutcome {
    /// Close the currently open scene.
    CloseCurrentScene,
    /// The main thread moves forward one stage.
    AdvanceMainThread,
    /// The main thread slips back one stage.
    SetBackMainThread,
    /// Another tracked thread takes over as the main thread.
    SetMainThread,
    /// The story leans toward the named stage.
    SuggestStage(StoryStage),
    /// An environmental hazard manifests at the current location.
    SpawnHazard,
    /// A hostile appears at the current location.
    SpawnHostile,
    /// A potential ally enters the story.
    IntroduceAlly,
    /// A vignette overlay begins.
    StartVignette,
    /// The active vignette deepens one stage.
    AdvanceVignette,
    /// The active vignette ends.
    EndVignette,
    /// The open scene fades out and the story picks up elsewhere.
    ShiftScene,
    /// The expedition gains an unexpected resource.
    Windfall,
    /// The expedition loses something it was counting on.
    Setback,
    /// An omen worth recording, with no immediate effect.
    RecordOmen,
    /// The question itself returns changed; ask again later.
    EchoQuestion,
    /// Reserved chart entry. Deliberately inert.
    Reserved,
}

impl std::fmt::Display for TwistOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CloseCurrentScene => write!(f, "the scene closes"),
            Self::AdvanceMainThread => write!(f, "the main thread advances"),
            Self::SetBackMainThread => write!(f, "the main thread is set back"),
            Self::SetMainThread => write!(f, "another thread takes the fore"),
            Self::SuggestStage(stage) => write!(f, "the story leans toward {stage}"),
            Self::SpawnHazard => write!(f, "a hazard manifests"),
            Self::SpawnHostile => write!(f, "a hostile appears"),
            Self::IntroduceAlly => write!(f, "an ally enters the story"),
            Self::StartVignette => write!(f, "a vignette begins"),
            Self::AdvanceVignette => write!(f, "the vignette deepens"),
            Self::EndVignette => write!(f, "the vignette ends"),
            Self::ShiftScene => write!(f, "the story shifts elsewhere"),
            Self::Windfall => write!(f, "an unexpected windfall"),
            Self::Setback => write!(f, "an unexpected setback"),
            Self::RecordOmen => write!(f, "an omen, recorded"),
            Self::EchoQuestion => write!(f, "the question echoes back"),
            Self::Reserved => write!(f, "nothing stirs"),
        }
    }
}

/// A d20 twist roll and its resolved table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwistRoll {
    /// The d20 roll (1-20).
    pub roll: u32,
    /// The table entry the roll landed on.
    pub outcome: TwistOutcome,
}

/// Resolve a d20 roll through the twist table.
///
/// Entries 18-20 are reserved and resolve to the inert
/// [`TwistOutcome::Reserved`].
pub fn twist_outcome(roll: u32) -> TwistOutcome {
    match roll {
        1 => TwistOutcome::CloseCurrentScene,
        2 => TwistOutcome::AdvanceMainThread,
        3 => TwistOutcome::SetBackMainThread,
        4 => TwistOutcome::SetMainThread,
        5 => TwistOutcome::SuggestStage(StoryStage::Conflict),
        6 => TwistOutcome::SuggestStage(StoryStage::Climax),
        7 => TwistOutcome::SpawnHazard,
        8 => TwistOutcome::SpawnHostile,
        9 => TwistOutcome::IntroduceAlly,
        10 => TwistOutcome::StartVignette,
        11 => TwistOutcome::AdvanceVignette,
        12 => TwistOutcome::EndVignette,
        13 => TwistOutcome::ShiftScene,
        14 => TwistOutcome::Windfall,
        15 => TwistOutcome::Setback,
        16 => TwistOutcome::RecordOmen,
        17 => TwistOutcome::EchoQuestion,
        18..=20 => TwistOutcome::Reserved,
        _ => unreachable!("twist roll out of range: {roll}"),
    }
}
