//! The avatar's automated-play slot.
//!
//! The same clear-then-rearm primitive as the per-actor scheduler, but
//! with a single global slot and a self-accelerating delay: every
//! successful tick multiplies the delay by the speed mode's decay
//! factor, bounded below by its floor, so uninterrupted automated play
//! speeds up over time. Disabling clears the slot; re-enabling resets
//! the delay to the configured base.

use ember_core::Actor;

use crate::config::AutoplayConfig;
use crate::context::TickContext;
use crate::event::{AutoplayEvent, AutoplayEventKind, EventLog};
use crate::pipeline;

/// Automated play for the player avatar.
#[derive(Debug)]
pub struct AvatarAutoplay {
    config: AutoplayConfig,
    enabled: bool,
    slot: Option<u64>,
    delay_ms: f64,
}

impl AvatarAutoplay {
    /// Create the autoplay slot. With `auto_start` set the slot arms
    /// itself on the first pass.
    pub fn new(config: AutoplayConfig) -> Self {
        let delay_ms = config.speed.base_interval_ms() as f64;
        Self {
            enabled: config.auto_start,
            slot: None,
            delay_ms,
            config,
        }
    }

    /// Whether automated play is on.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The current slot, if armed.
    pub fn slot(&self) -> Option<u64> {
        self.slot
    }

    /// The current inter-tick delay in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms as u64
    }

    /// The active configuration.
    pub fn config(&self) -> &AutoplayConfig {
        &self.config
    }

    /// Change the focus mode mid-run.
    pub fn set_focus(&mut self, focus: crate::config::FocusMode) {
        self.config.focus = focus;
    }

    /// Turn automated play on, resetting the delay to the configured
    /// base and arming the slot. Enabling an already-enabled slot only
    /// resets its pace.
    pub fn enable(&mut self, now: u64, events: &mut EventLog) {
        self.enabled = true;
        self.delay_ms = self.config.speed.base_interval_ms() as f64;
        self.slot = Some(now + self.delay_ms as u64);
        events.push(AutoplayEvent::new(
            now,
            AutoplayEventKind::AvatarEnabled,
            "avatar autoplay enabled",
        ));
    }

    /// Turn automated play off and clear the slot. A tick already
    /// dispatched this pass completes; no new tick will be scheduled.
    pub fn disable(&mut self, now: u64, events: &mut EventLog) {
        self.enabled = false;
        self.slot = None;
        events.push(AutoplayEvent::new(
            now,
            AutoplayEventKind::AvatarDisabled,
            "avatar autoplay disabled",
        ));
    }

    /// Run one pass at clock time `now`. If the slot is due, clears it,
    /// decides one directive for the avatar, hands it to the actuator,
    /// and re-arms with the decayed delay. Failed actuations re-arm at
    /// the current pace without accelerating.
    pub fn update(&mut self, now: u64, avatar: &Actor, ctx: &mut TickContext<'_>) {
        if !self.enabled {
            return;
        }
        let Some(at) = self.slot else {
            // Auto-started: the first pass arms the slot at base pace.
            self.slot = Some(now + self.delay_ms as u64);
            return;
        };
        if now < at {
            return;
        }
        self.slot = None;

        let directive = pipeline::decide(avatar, ctx.snapshot, self.config.focus);
        match ctx.actuator.apply(avatar, &directive) {
            Ok(_) => {
                let floor = self.config.speed.floor_ms() as f64;
                self.delay_ms = (self.delay_ms * self.config.speed.decay()).max(floor);
                ctx.emit(
                    now,
                    AutoplayEventKind::TickDispatched {
                        actor: avatar.id,
                        directive: directive.clone(),
                    },
                    format!("{}: {}", avatar.name, directive),
                );
            }
            Err(err) => {
                ctx.emit(
                    now,
                    AutoplayEventKind::ActuationRejected {
                        actor: avatar.id,
                        reason: err.to_string(),
                    },
                    format!("{}: rejected: {err}", avatar.name),
                );
            }
        }
        self.slot = Some(now + self.delay_ms as u64);
    }
}
