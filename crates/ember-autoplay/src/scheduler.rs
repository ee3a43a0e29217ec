//! The per-actor tick scheduler.
//!
//! Every registered actor has a slot: pending (registered, awaiting its
//! first eligible time), or armed at a clock time. On each pass, due
//! slots are cleared and then dispatched through the decision pipeline
//! and the actuator, and re-armed from the action's resolution time.
//! The clear-then-rearm discipline serializes each actor's ticks; a
//! failed actuation still re-arms, so no actor is ever left stranded
//! with a cleared slot.

use std::collections::HashMap;

use rand::Rng;

use ember_core::{Actor, ActorId};

use crate::config::AutoplayConfig;
use crate::context::TickContext;
use crate::event::AutoplayEventKind;
use crate::pipeline;

/// The scheduling state of one registered actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Registered; the next pass assigns a jittered first eligible
    /// time. Actors never act on the pass that assigns it.
    Pending,
    /// Eligible to act at the contained clock time (milliseconds).
    Armed(u64),
    /// Cleared for dispatch this pass. Never survives an `update`: the
    /// same pass re-arms the slot whether actuation succeeds or fails.
    Cleared,
}

/// Schedules autonomous ticks for every registered actor.
#[derive(Debug)]
pub struct TickScheduler {
    slots: HashMap<ActorId, Slot>,
    config: AutoplayConfig,
}

impl TickScheduler {
    /// Create a scheduler with the given configuration.
    pub fn new(config: AutoplayConfig) -> Self {
        Self {
            slots: HashMap::new(),
            config,
        }
    }

    /// Register an actor. It receives its first eligible time on the
    /// next pass; registering an already-known actor changes nothing.
    pub fn register(&mut self, id: ActorId) {
        self.slots.entry(id).or_insert(Slot::Pending);
    }

    /// Remove an actor from scheduling (defeat, dismissal).
    pub fn deregister(&mut self, id: ActorId) {
        self.slots.remove(&id);
    }

    /// Whether an actor is registered.
    pub fn is_registered(&self, id: ActorId) -> bool {
        self.slots.contains_key(&id)
    }

    /// An actor's current slot state.
    pub fn slot(&self, id: ActorId) -> Option<Slot> {
        self.slots.get(&id).copied()
    }

    /// Number of registered actors.
    pub fn registered_count(&self) -> usize {
        self.slots.len()
    }

    /// The active configuration.
    pub fn config(&self) -> &AutoplayConfig {
        &self.config
    }

    /// Run one scheduler pass at clock time `now` over the given
    /// actors. Unregistered actors are skipped. Actors are processed
    /// sequentially in slice order; each due actor gets exactly one
    /// decision and one actuation.
    pub fn update(&mut self, now: u64, actors: &[Actor], ctx: &mut TickContext<'_>) {
        for actor in actors {
            let Some(slot) = self.slots.get(&actor.id).copied() else {
                continue;
            };
            match slot {
                Slot::Pending => {
                    // Stagger startup so freshly spawned actors don't
                    // all act in lock-step.
                    let jitter = ctx
                        .rng
                        .random_range(self.config.jitter_min_ms..=self.config.jitter_max_ms);
                    self.arm(actor.id, now + jitter, ctx);
                }
                Slot::Armed(at) if now >= at => {
                    self.slots.insert(actor.id, Slot::Cleared);
                    self.dispatch(now, actor, ctx);
                }
                Slot::Armed(_) | Slot::Cleared => {}
            }
        }
    }

    /// Decide and actuate one tick for a due actor, then re-arm.
    fn dispatch(&mut self, now: u64, actor: &Actor, ctx: &mut TickContext<'_>) {
        let directive = pipeline::decide(actor, ctx.snapshot, self.config.focus);
        match ctx.actuator.apply(actor, &directive) {
            Ok(delay_ms) => {
                ctx.emit(
                    now,
                    AutoplayEventKind::TickDispatched {
                        actor: actor.id,
                        directive: directive.clone(),
                    },
                    format!("{}: {}", actor.name, directive),
                );
                self.arm(actor.id, now + delay_ms, ctx);
            }
            Err(err) => {
                // Re-arm on the base interval rather than retrying
                // immediately; the next eligible window is the retry.
                ctx.emit(
                    now,
                    AutoplayEventKind::ActuationRejected {
                        actor: actor.id,
                        reason: err.to_string(),
                    },
                    format!("{}: rejected: {err}", actor.name),
                );
                self.arm(actor.id, now + self.config.speed.base_interval_ms(), ctx);
            }
        }
    }

    fn arm(&mut self, id: ActorId, at: u64, ctx: &mut TickContext<'_>) {
        self.slots.insert(id, Slot::Armed(at));
        ctx.emit(
            at,
            AutoplayEventKind::SlotArmed { actor: id, at },
            format!("slot armed at {at}"),
        );
    }
}
