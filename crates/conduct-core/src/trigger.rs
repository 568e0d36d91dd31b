//! Conduct Triggers
//!
//! A trigger holds a pending conduct and resolves it when it goes out of
//! scope, so an action with many early exits still charges its conduct once.

use std::cell::{Ref, RefCell, RefMut};

use conduct_types::{ConductKind, Monster};

use crate::engine::GodConduct;
use crate::error::ConductError;

/// Receiver of fired conducts.
pub trait ConductSink {
    fn resolve(&self, conduct: ConductKind, level: i32, known: bool, victim: Option<&Monster>);
}

/// A fired conduct the engine has not seen yet.
#[derive(Debug, Clone, PartialEq)]
struct PendingConduct {
    conduct: ConductKind,
    level: i32,
    known: bool,
    victim: Option<Monster>,
}

/// Shared access to the engine for triggers.
///
/// A trigger that fires while the engine is borrowed is queued, and the
/// queue is resolved in firing order the next time the engine is borrowed
/// mutably, flushed, or unwrapped.
#[derive(Debug)]
pub struct EngineSink {
    engine: RefCell<GodConduct>,
    pending: RefCell<Vec<PendingConduct>>,
}

impl EngineSink {
    pub fn new(engine: GodConduct) -> Self {
        Self {
            engine: RefCell::new(engine),
            pending: RefCell::new(Vec::new()),
        }
    }

    /// Read access; queued conducts stay queued.
    pub fn borrow(&self) -> Ref<'_, GodConduct> {
        self.engine.borrow()
    }

    /// Write access, after resolving every queued conduct.
    ///
    /// Panics if the engine is already borrowed, like [`RefCell::borrow_mut`].
    pub fn borrow_mut(&self) -> RefMut<'_, GodConduct> {
        let mut engine = self.engine.borrow_mut();
        if let Err(err) = self.drain_into(&mut engine) {
            tracing::error!(error = %err, "queued conduct failed to resolve");
        }
        engine
    }

    /// Number of fired conducts waiting for the engine.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Resolves every queued conduct if the engine is free. Every conduct is
    /// attempted; the first failure is returned.
    pub fn flush(&self) -> Result<(), ConductError> {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => self.drain_into(&mut engine),
            Err(_) => {
                tracing::trace!(pending = self.pending(), "engine busy; conducts stay queued");
                Ok(())
            }
        }
    }

    /// Unwraps the engine, resolving anything still queued.
    pub fn into_inner(self) -> GodConduct {
        let mut engine = self.engine.into_inner();
        let queued = self.pending.into_inner();
        if let Err(err) = resolve_all(&mut engine, queued) {
            tracing::error!(error = %err, "queued conduct failed to resolve");
        }
        engine
    }

    fn drain_into(&self, engine: &mut GodConduct) -> Result<(), ConductError> {
        let queued = std::mem::take(&mut *self.pending.borrow_mut());
        resolve_all(engine, queued)
    }
}

fn resolve_all(engine: &mut GodConduct, queued: Vec<PendingConduct>) -> Result<(), ConductError> {
    let mut first_err = None;
    for p in queued {
        if let Err(err) = engine.did_god_conduct(p.conduct, p.level, p.known, p.victim.as_ref()) {
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), Err)
}

impl ConductSink for EngineSink {
    fn resolve(&self, conduct: ConductKind, level: i32, known: bool, victim: Option<&Monster>) {
        self.pending.borrow_mut().push(PendingConduct {
            conduct,
            level,
            known,
            victim: victim.cloned(),
        });
        if let Err(err) = self.flush() {
            tracing::error!(%conduct, error = %err, "conduct resolution failed");
        }
    }
}

/// A conduct waiting for the end of its scope.
pub struct ConductTrigger<'a> {
    sink: &'a dyn ConductSink,
    pub conduct: ConductKind,
    pub level: i32,
    pub known: bool,
    pub enabled: bool,
    victim: Option<Monster>,
}

impl<'a> ConductTrigger<'a> {
    /// Arms `conduct`, copying the victim so later changes to it are not seen.
    pub fn new(
        sink: &'a dyn ConductSink,
        conduct: ConductKind,
        level: i32,
        known: bool,
        victim: Option<&Monster>,
    ) -> Self {
        Self {
            sink,
            conduct,
            level,
            known,
            enabled: true,
            victim: victim.cloned(),
        }
    }

    /// A trigger holding no conduct yet.
    pub fn idle(sink: &'a dyn ConductSink) -> Self {
        Self::new(sink, ConductKind::Nothing, 0, true, None)
    }

    /// Replaces the pending conduct without firing the old one.
    pub fn set(&mut self, conduct: ConductKind, level: i32, known: bool, victim: Option<&Monster>) {
        self.conduct = conduct;
        self.level = level;
        self.known = known;
        self.victim = victim.cloned();
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn victim(&self) -> Option<&Monster> {
        self.victim.as_ref()
    }

    /// Whether dropping the trigger now would resolve a conduct.
    pub fn is_armed(&self) -> bool {
        self.enabled && !self.conduct.is_nothing()
    }

    /// Resolves the pending conduct now. The trigger is spent afterwards.
    pub fn fire(&mut self) {
        if !self.is_armed() {
            return;
        }
        let conduct = std::mem::take(&mut self.conduct);
        self.sink
            .resolve(conduct, self.level, self.known, self.victim.as_ref());
    }
}

impl Drop for ConductTrigger<'_> {
    fn drop(&mut self) {
        self.fire();
    }
}

impl std::fmt::Debug for ConductTrigger<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConductTrigger")
            .field("conduct", &self.conduct)
            .field("level", &self.level)
            .field("known", &self.known)
            .field("enabled", &self.enabled)
            .field("victim", &self.victim.as_ref().map(|m| m.name.as_str()))
            .finish()
    }
}

/// The three idle triggers an attack arms through
/// [`AttackConductTracker::set_attack_conducts`](crate::components::AttackConductTracker::set_attack_conducts).
pub fn attack_conduct_triggers(sink: &dyn ConductSink) -> [ConductTrigger<'_>; 3] {
    std::array::from_fn(|_| ConductTrigger::idle(sink))
}

pub fn enable_attack_conducts(conducts: &mut [ConductTrigger<'_>; 3]) {
    conducts.iter_mut().for_each(|c| c.enable());
}

pub fn disable_attack_conducts(conducts: &mut [ConductTrigger<'_>; 3]) {
    conducts.iter_mut().for_each(|c| c.disable());
}

/// Sink that remembers what fired, for tests.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub fired: RefCell<Vec<(ConductKind, i32, bool, Option<Monster>)>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn kinds(&self) -> Vec<ConductKind> {
        self.fired.borrow().iter().map(|f| f.0).collect()
    }
}

#[cfg(test)]
impl ConductSink for RecordingSink {
    fn resolve(&self, conduct: ConductKind, level: i32, known: bool, victim: Option<&Monster>) {
        self.fired
            .borrow_mut()
            .push((conduct, level, known, victim.cloned()));
    }
}
