//! Narrative bookkeeping: threads, scenes, vignette, and facts.
//!
//! Threads are named throughlines with an ordered stage; a scene is a
//! single located beat opened under a thread; a vignette is an optional
//! theme overlay with its own stage progression; facts are the
//! append-only breadcrumb log of oracle exchanges. Every operation is a
//! total function: acting on an already-transitioned entity is a silent
//! no-op, never an error, because narrative continuity must not fail a
//! tick.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ember_core::LocationId;

use crate::twist::TwistOutcome;

/// Unique identifier for a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub Uuid);

impl ThreadId {
    /// Generate a new random thread ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ThreadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Unique identifier for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneId(pub Uuid);

impl SceneId {
    /// Generate a new random scene ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SceneId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The ordered stage of a story thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryStage {
    /// Establishing the situation.
    Setup,
    /// Forces in opposition.
    Conflict,
    /// The decisive confrontation.
    Climax,
    /// Consequences settle.
    Resolution,
}

impl StoryStage {
    /// The following stage, saturating at `Resolution`.
    pub fn next(self) -> Self {
        match self {
            Self::Setup => Self::Conflict,
            Self::Conflict => Self::Climax,
            Self::Climax | Self::Resolution => Self::Resolution,
        }
    }

    /// The preceding stage, saturating at `Setup`.
    pub fn prev(self) -> Self {
        match self {
            Self::Setup | Self::Conflict => Self::Setup,
            Self::Climax => Self::Conflict,
            Self::Resolution => Self::Climax,
        }
    }
}

impl fmt::Display for StoryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Conflict => write!(f, "conflict"),
            Self::Climax => write!(f, "climax"),
            Self::Resolution => write!(f, "resolution"),
        }
    }
}

/// The stage of a vignette overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VignetteStage {
    /// The overlay is establishing itself.
    Opening,
    /// The overlay colors everything.
    Middle,
    /// The overlay is winding down.
    Closing,
}

impl VignetteStage {
    /// The following stage, saturating at `Closing`.
    pub fn next(self) -> Self {
        match self {
            Self::Opening => Self::Middle,
            Self::Middle | Self::Closing => Self::Closing,
        }
    }
}

impl fmt::Display for VignetteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opening => write!(f, "opening"),
            Self::Middle => write!(f, "middle"),
            Self::Closing => write!(f, "closing"),
        }
    }
}

/// A named narrative throughline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique identifier.
    pub id: ThreadId,
    /// Thread name.
    pub name: String,
    /// Current stage.
    pub stage: StoryStage,
    /// Scenes this thread has visited, in order.
    pub visited: Vec<SceneId>,
}

/// A single located narrative beat under a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier.
    pub id: SceneId,
    /// Where the scene takes place.
    pub location: LocationId,
    /// The thread this scene belongs to.
    pub thread: ThreadId,
    /// The thread stage at fade-in time.
    pub stage: StoryStage,
    /// Whether the scene is still open.
    pub open: bool,
}

/// An optional theme overlay with its own lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vignette {
    /// Theme name.
    pub theme: String,
    /// Current overlay stage.
    pub stage: VignetteStage,
}

/// An immutable record of one oracle exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fact {
    /// The question that was asked.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Whether this is a system-generated follow-up rather than a
    /// player question.
    pub follow_up: bool,
    /// When the exchange was recorded.
    pub recorded_at: DateTime<Utc>,
}

/// The narrative state machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeState {
    threads: Vec<Thread>,
    main_thread: Option<ThreadId>,
    scenes: Vec<Scene>,
    current_scene: Option<SceneId>,
    vignette: Option<Vignette>,
    facts: Vec<Fact>,
}

impl NarrativeState {
    /// Create an empty narrative state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new thread at the setup stage. Returns its ID.
    pub fn add_thread(&mut self, name: impl Into<String>) -> ThreadId {
        let id = ThreadId::new();
        self.threads.push(Thread {
            id,
            name: name.into(),
            stage: StoryStage::Setup,
            visited: Vec::new(),
        });
        id
    }

    /// Make a known thread the main thread. Unknown IDs are ignored.
    pub fn set_main_thread(&mut self, id: ThreadId) {
        if self.threads.iter().any(|t| t.id == id) {
            self.main_thread = Some(id);
        }
    }

    /// The main thread, if one is set.
    pub fn main_thread(&self) -> Option<&Thread> {
        self.main_thread.and_then(|id| self.thread(id))
    }

    /// Look up a thread by ID.
    pub fn thread(&self, id: ThreadId) -> Option<&Thread> {
        self.threads.iter().find(|t| t.id == id)
    }

    /// All tracked threads, in creation order.
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    /// Look up a scene by ID.
    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.id == id)
    }

    /// The currently open scene, if any.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current_scene.and_then(|id| self.scene(id))
    }

    /// The active vignette, if any.
    pub fn vignette(&self) -> Option<&Vignette> {
        self.vignette.as_ref()
    }

    /// The fact log, oldest first.
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Open a new scene at a location under a thread and stage. Any
    /// scene already open fades out first. Returns the new scene's ID,
    /// or `None` if the thread is unknown.
    pub fn fade_in_scene(
        &mut self,
        location: LocationId,
        thread: ThreadId,
        stage: StoryStage,
    ) -> Option<SceneId> {
        if !self.threads.iter().any(|t| t.id == thread) {
            return None;
        }
        self.fade_out_scene(None);

        let id = SceneId::new();
        self.scenes.push(Scene {
            id,
            location,
            thread,
            stage,
            open: true,
        });
        self.current_scene = Some(id);
        if let Some(t) = self.threads.iter_mut().find(|t| t.id == thread) {
            t.visited.push(id);
        }
        Some(id)
    }

    /// Close a scene. Defaults to the current scene; clears the
    /// current-scene pointer only when it matched. Closing a scene that
    /// is not open (or not present) is a silent no-op.
    pub fn fade_out_scene(&mut self, id: Option<SceneId>) {
        let Some(target) = id.or(self.current_scene) else {
            return;
        };
        if let Some(scene) = self.scenes.iter_mut().find(|s| s.id == target) {
            scene.open = false;
        }
        if self.current_scene == Some(target) {
            self.current_scene = None;
        }
    }

    /// Begin a vignette overlay at the opening stage. A vignette that
    /// is already running is left untouched.
    pub fn start_vignette(&mut self, theme: impl Into<String>) {
        if self.vignette.is_none() {
            self.vignette = Some(Vignette {
                theme: theme.into(),
                stage: VignetteStage::Opening,
            });
        }
    }

    /// Move the active vignette to the given stage. No-op without one.
    pub fn advance_vignette_stage(&mut self, stage: VignetteStage) {
        if let Some(v) = self.vignette.as_mut() {
            v.stage = stage;
        }
    }

    /// End the active vignette. No-op without one.
    pub fn end_vignette(&mut self) {
        self.vignette = None;
    }

    /// Append a fact to the breadcrumb log.
    pub fn add_fact(&mut self, question: impl Into<String>, answer: impl Into<String>, follow_up: bool) {
        self.facts.push(Fact {
            question: question.into(),
            answer: answer.into(),
            follow_up,
            recorded_at: Utc::now(),
        });
    }

    /// Full narrative reset. The only operation that clears facts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a twist outcome's narrative transition, if it has one.
    ///
    /// World-affecting tags (hazards, hostiles, windfalls) are the
    /// control layer's to act on and change nothing here; reserved
    /// entries change nothing anywhere. `location` is where a shifted
    /// scene would fade back in.
    pub fn apply_twist(&mut self, outcome: &TwistOutcome, location: Option<LocationId>) {
        match outcome {
            TwistOutcome::CloseCurrentScene => self.fade_out_scene(None),
            TwistOutcome::AdvanceMainThread => {
                if let Some(t) = self.main_thread_mut() {
                    t.stage = t.stage.next();
                }
            }
            TwistOutcome::SetBackMainThread => {
                if let Some(t) = self.main_thread_mut() {
                    t.stage = t.stage.prev();
                }
            }
            TwistOutcome::SetMainThread => self.rotate_main_thread(),
            TwistOutcome::SuggestStage(stage) => {
                if let Some(t) = self.main_thread_mut() {
                    t.stage = *stage;
                }
            }
            TwistOutcome::StartVignette => self.start_vignette("portent"),
            TwistOutcome::AdvanceVignette => {
                if let Some(next) = self.vignette.as_ref().map(|v| v.stage.next()) {
                    self.advance_vignette_stage(next);
                }
            }
            TwistOutcome::EndVignette => self.end_vignette(),
            TwistOutcome::ShiftScene => {
                self.fade_out_scene(None);
                if let Some(loc) = location
                    && let Some((id, stage)) = self.main_thread().map(|t| (t.id, t.stage))
                {
                    self.fade_in_scene(loc, id, stage);
                }
            }
            TwistOutcome::SpawnHazard
            | TwistOutcome::SpawnHostile
            | TwistOutcome::IntroduceAlly
            | TwistOutcome::Windfall
            | TwistOutcome::Setback
            | TwistOutcome::RecordOmen
            | TwistOutcome::EchoQuestion
            | TwistOutcome::Reserved => {}
        }
    }

    fn main_thread_mut(&mut self) -> Option<&mut Thread> {
        let id = self.main_thread?;
        self.threads.iter_mut().find(|t| t.id == id)
    }

    /// The next thread in creation order takes over as main; wraps, and
    /// picks the first thread when none is main yet.
    fn rotate_main_thread(&mut self) {
        if self.threads.is_empty() {
            return;
        }
        let next = match self.main_thread {
            None => 0,
            Some(id) => {
                let pos = self.threads.iter().position(|t| t.id == id).unwrap_or(0);
                (pos + 1) % self.threads.len()
            }
        };
        self.main_thread = Some(self.threads[next].id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_thread() -> (NarrativeState, ThreadId) {
        let mut n = NarrativeState::new();
        let t = n.add_thread("Find the ember vault");
        (n, t)
    }

    #[test]
    fn add_thread_starts_at_setup() {
        let (n, t) = state_with_thread();
        let thread = n.thread(t).unwrap();
        assert_eq!(thread.stage, StoryStage::Setup);
        assert!(thread.visited.is_empty());
        assert!(n.main_thread().is_none());
    }

    #[test]
    fn set_main_thread_known_only() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(ThreadId::new());
        assert!(n.main_thread().is_none());
        n.set_main_thread(t);
        assert_eq!(n.main_thread().unwrap().id, t);
    }

    #[test]
    fn fade_in_records_visit_and_current() {
        let (mut n, t) = state_with_thread();
        let loc = LocationId::new();
        let s = n.fade_in_scene(loc, t, StoryStage::Setup).unwrap();
        assert_eq!(n.current_scene().unwrap().id, s);
        assert_eq!(n.thread(t).unwrap().visited, vec![s]);
        assert!(n.scene(s).unwrap().open);
    }

    #[test]
    fn fade_in_unknown_thread_is_none() {
        let mut n = NarrativeState::new();
        assert!(
            n.fade_in_scene(LocationId::new(), ThreadId::new(), StoryStage::Setup)
                .is_none()
        );
        assert!(n.current_scene().is_none());
    }

    #[test]
    fn fade_in_closes_previous_scene() {
        let (mut n, t) = state_with_thread();
        let s1 = n.fade_in_scene(LocationId::new(), t, StoryStage::Setup).unwrap();
        let s2 = n.fade_in_scene(LocationId::new(), t, StoryStage::Conflict).unwrap();
        assert!(!n.scene(s1).unwrap().open);
        assert_eq!(n.current_scene().unwrap().id, s2);
        assert_eq!(n.thread(t).unwrap().visited.len(), 2);
    }

    #[test]
    fn fade_out_twice_is_idempotent() {
        let (mut n, t) = state_with_thread();
        let s = n.fade_in_scene(LocationId::new(), t, StoryStage::Setup).unwrap();
        n.fade_out_scene(None);
        assert!(!n.scene(s).unwrap().open);
        assert!(n.current_scene().is_none());
        // Second call: nothing to do, nothing thrown.
        n.fade_out_scene(None);
        n.fade_out_scene(Some(s));
        assert!(!n.scene(s).unwrap().open);
        assert!(n.current_scene().is_none());
    }

    #[test]
    fn fade_out_non_current_keeps_pointer() {
        let (mut n, t) = state_with_thread();
        let s1 = n.fade_in_scene(LocationId::new(), t, StoryStage::Setup).unwrap();
        let s2 = n.fade_in_scene(LocationId::new(), t, StoryStage::Setup).unwrap();
        // s1 is already closed; closing it again must not clear s2.
        n.fade_out_scene(Some(s1));
        assert_eq!(n.current_scene().unwrap().id, s2);
    }

    #[test]
    fn vignette_lifecycle() {
        let mut n = NarrativeState::new();
        assert!(n.vignette().is_none());
        n.start_vignette("ashfall");
        assert_eq!(n.vignette().unwrap().stage, VignetteStage::Opening);
        n.advance_vignette_stage(VignetteStage::Middle);
        assert_eq!(n.vignette().unwrap().stage, VignetteStage::Middle);
        // Starting again while active is a no-op.
        n.start_vignette("other");
        assert_eq!(n.vignette().unwrap().theme, "ashfall");
        n.end_vignette();
        assert!(n.vignette().is_none());
        // Ending or advancing without one is a no-op.
        n.end_vignette();
        n.advance_vignette_stage(VignetteStage::Closing);
        assert!(n.vignette().is_none());
    }

    #[test]
    fn facts_append_only() {
        let mut n = NarrativeState::new();
        n.add_fact("Is it safe?", "No.", false);
        n.add_fact("Is it safe?", "a hazard manifests", true);
        assert_eq!(n.facts().len(), 2);
        assert!(!n.facts()[0].follow_up);
        assert!(n.facts()[1].follow_up);
    }

    #[test]
    fn reset_clears_everything() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        n.fade_in_scene(LocationId::new(), t, StoryStage::Setup);
        n.start_vignette("ashfall");
        n.add_fact("q", "a", false);
        n.reset();
        assert!(n.threads().is_empty());
        assert!(n.main_thread().is_none());
        assert!(n.current_scene().is_none());
        assert!(n.vignette().is_none());
        assert!(n.facts().is_empty());
    }

    #[test]
    fn stage_order_saturates() {
        assert_eq!(StoryStage::Setup.next(), StoryStage::Conflict);
        assert_eq!(StoryStage::Resolution.next(), StoryStage::Resolution);
        assert_eq!(StoryStage::Setup.prev(), StoryStage::Setup);
        assert_eq!(StoryStage::Resolution.prev(), StoryStage::Climax);
    }

    #[test]
    fn twist_advance_and_setback() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        n.apply_twist(&TwistOutcome::AdvanceMainThread, None);
        assert_eq!(n.main_thread().unwrap().stage, StoryStage::Conflict);
        n.apply_twist(&TwistOutcome::SetBackMainThread, None);
        assert_eq!(n.main_thread().unwrap().stage, StoryStage::Setup);
    }

    #[test]
    fn twist_suggest_stage_sets_main() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        n.apply_twist(&TwistOutcome::SuggestStage(StoryStage::Climax), None);
        assert_eq!(n.main_thread().unwrap().stage, StoryStage::Climax);
    }

    #[test]
    fn twist_rotate_main_thread() {
        let mut n = NarrativeState::new();
        let a = n.add_thread("A");
        let b = n.add_thread("B");
        n.apply_twist(&TwistOutcome::SetMainThread, None);
        assert_eq!(n.main_thread().unwrap().id, a);
        n.apply_twist(&TwistOutcome::SetMainThread, None);
        assert_eq!(n.main_thread().unwrap().id, b);
        n.apply_twist(&TwistOutcome::SetMainThread, None);
        assert_eq!(n.main_thread().unwrap().id, a);
    }

    #[test]
    fn twist_shift_scene_moves_story() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        let s1 = n.fade_in_scene(LocationId::new(), t, StoryStage::Setup).unwrap();
        let elsewhere = LocationId::new();
        n.apply_twist(&TwistOutcome::ShiftScene, Some(elsewhere));
        assert!(!n.scene(s1).unwrap().open);
        let current = n.current_scene().unwrap();
        assert_eq!(current.location, elsewhere);
    }

    #[test]
    fn twist_shift_scene_without_location_just_closes() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        n.fade_in_scene(LocationId::new(), t, StoryStage::Setup).unwrap();
        n.apply_twist(&TwistOutcome::ShiftScene, None);
        assert!(n.current_scene().is_none());
    }

    #[test]
    fn twist_world_tags_touch_nothing() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        let before = serde_json::to_string(&n).unwrap();
        for outcome in [
            TwistOutcome::SpawnHazard,
            TwistOutcome::SpawnHostile,
            TwistOutcome::IntroduceAlly,
            TwistOutcome::Windfall,
            TwistOutcome::Setback,
            TwistOutcome::RecordOmen,
            TwistOutcome::EchoQuestion,
            TwistOutcome::Reserved,
        ] {
            n.apply_twist(&outcome, None);
        }
        assert_eq!(serde_json::to_string(&n).unwrap(), before);
    }

    #[test]
    fn twist_vignette_transitions() {
        let mut n = NarrativeState::new();
        n.apply_twist(&TwistOutcome::StartVignette, None);
        assert_eq!(n.vignette().unwrap().theme, "portent");
        n.apply_twist(&TwistOutcome::AdvanceVignette, None);
        assert_eq!(n.vignette().unwrap().stage, VignetteStage::Middle);
        n.apply_twist(&TwistOutcome::EndVignette, None);
        assert!(n.vignette().is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let (mut n, t) = state_with_thread();
        n.set_main_thread(t);
        n.fade_in_scene(LocationId::new(), t, StoryStage::Conflict);
        n.add_fact("q", "a", false);
        let json = serde_json::to_string(&n).unwrap();
        let n2: NarrativeState = serde_json::from_str(&json).unwrap();
        assert_eq!(n2.threads().len(), 1);
        assert!(n2.current_scene().is_some());
        assert_eq!(n2.facts().len(), 1);
    }
}
