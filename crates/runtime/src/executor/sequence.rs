//! Suspended-sequence records.

use core::fmt;
use std::sync::Arc;

use menu_core::{Action, ActionContext, SessionId, Tick};

/// Identifier of one submitted sequence, unique per executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceId(pub u64);

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq#{}", self.0)
    }
}

/// Lifecycle of a submitted sequence.
///
/// `Running` only exists inside a single executor call. `Done` and `Cancelled`
/// are terminal; the executor forgets the sequence once it reaches either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SequenceState {
    Running,
    /// Suspended at a delay until its resume tick.
    Waiting,
    /// Submitted behind another sequence of the same session.
    Queued,
    Done,
    Cancelled,
}

/// Result of submitting a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// Every action ran within the call.
    Completed,
    /// Suspended at a delay; resumes on the first tick at or after `resume_at`.
    Waiting { id: SequenceId, resume_at: Tick },
    /// Another sequence of the same session is in flight; this one starts after it.
    Queued { id: SequenceId },
}

/// Cursor into one level of (possibly nested) actions.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    pub(crate) actions: Arc<[Action]>,
    pub(crate) cursor: usize,
}

impl Frame {
    pub(crate) fn new(actions: Arc<[Action]>) -> Self {
        Self { actions, cursor: 0 }
    }
}

/// A sequence the executor is holding between calls.
///
/// The frame stack is the remaining work: the bottom frame is the submitted
/// list, frames above it are nested `sequence` actions being walked inline.
#[derive(Debug)]
pub struct PendingSequence {
    pub(crate) id: SequenceId,
    pub(crate) frames: Vec<Frame>,
    pub(crate) ctx: ActionContext,
    pub(crate) resume_at: Tick,
    pub(crate) state: SequenceState,
}

impl PendingSequence {
    pub(crate) fn new(id: SequenceId, actions: Arc<[Action]>, ctx: ActionContext) -> Self {
        Self {
            id,
            frames: vec![Frame::new(actions)],
            ctx,
            resume_at: Tick::ZERO,
            state: SequenceState::Running,
        }
    }

    pub fn id(&self) -> SequenceId {
        self.id
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Resume tick; meaningful while `Waiting`.
    pub fn resume_at(&self) -> Tick {
        self.resume_at
    }

    pub fn context(&self) -> &ActionContext {
        &self.ctx
    }

    pub fn session(&self) -> Option<SessionId> {
        self.ctx.session_id()
    }

    /// Actions not yet started, across all frames.
    pub fn remaining(&self) -> usize {
        self.frames
            .iter()
            .map(|frame| frame.actions.len().saturating_sub(frame.cursor))
            .sum()
    }
}
