//! Tick-driven action sequencing.
//!
//! [`ActionExecutor`] walks submitted action lists synchronously until it meets
//! a delay marker, then parks the rest of the list as a [`PendingSequence`]
//! and returns. The host calls [`ActionExecutor::tick`] once per host tick to
//! resume sequences whose delay has elapsed. Nothing here blocks or spawns.
//!
//! Sequences that belong to the same session form a lane: while one of them is
//! waiting, later submissions for that session queue behind it and start in
//! submission order. Sessionless sequences never queue.
mod sequence;

pub use sequence::{PendingSequence, SequenceId, SequenceOutcome, SequenceState};

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::sync::Arc;

use tracing::{debug, error, trace, warn};

use menu_core::{
    Action, ActionContext, ActionError, ActionOutcome, ErrorSeverity, MenuEnv, MenuError,
    PlayerId, SessionId, Tick,
};

use sequence::Frame;

/// What one [`ActionExecutor::tick`] call did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Sequences whose delay elapsed and that ran again.
    pub resumed: usize,
    /// Sequences that ran to the end during this tick, queued successors included.
    pub completed: usize,
    /// Sequences dropped because their session or player went away.
    pub cancelled: Vec<SequenceId>,
}

/// Cooperative scheduler for action sequences.
///
/// Must be driven from a single logical thread: the host tick callback.
pub struct ActionExecutor {
    max_depth: usize,
    next_id: u64,
    /// Waiting and queued sequences.
    sequences: HashMap<SequenceId, PendingSequence>,
    /// Waiting sequences ordered by resume tick, then submission.
    timeline: BTreeSet<(Tick, SequenceId)>,
    /// Per-session lanes. The front entry is the sequence in flight.
    lanes: HashMap<SessionId, VecDeque<SequenceId>>,
}

impl ActionExecutor {
    pub const DEFAULT_MAX_DEPTH: usize = 16;

    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            next_id: 0,
            sequences: HashMap::new(),
            timeline: BTreeSet::new(),
            lanes: HashMap::new(),
        }
    }

    /// Runs `actions` for `ctx`, starting now unless the session has a sequence
    /// in flight.
    pub fn execute_all(
        &mut self,
        actions: impl Into<Arc<[Action]>>,
        ctx: ActionContext,
        env: &MenuEnv<'_>,
        now: Tick,
    ) -> SequenceOutcome {
        let id = self.allocate_id();
        let mut sequence = PendingSequence::new(id, actions.into(), ctx);

        let Some(session) = sequence.session() else {
            return self.step(sequence, env, now);
        };

        let lane = self.lanes.entry(session).or_default();
        lane.push_back(id);
        if lane.len() > 1 {
            debug!(
                target: "menu::executor",
                sequence = %id,
                %session,
                ahead = lane.len() - 1,
                "sequence queued behind session lane"
            );
            sequence.state = SequenceState::Queued;
            self.sequences.insert(id, sequence);
            return SequenceOutcome::Queued { id };
        }

        self.run(sequence, env, now, None)
    }

    /// Resumes every waiting sequence whose resume tick is at or before `now`.
    ///
    /// A sequence whose session has closed, or whose player went offline, is
    /// cancelled instead of resumed.
    pub fn tick(&mut self, env: &MenuEnv<'_>, now: Tick) -> TickReport {
        let mut report = TickReport::default();

        let due: Vec<SequenceId> = self
            .timeline
            .iter()
            .take_while(|(resume_at, _)| *resume_at <= now)
            .map(|&(_, id)| id)
            .collect();

        for id in due {
            let Some(sequence) = self.sequences.remove(&id) else {
                continue;
            };
            self.timeline.remove(&(sequence.resume_at, id));

            if !still_live(&sequence.ctx, env) {
                self.drop_stale(sequence, &mut report);
                continue;
            }

            trace!(target: "menu::executor", sequence = %id, tick = %now, "resuming");
            report.resumed += 1;
            self.run(sequence, env, now, Some(&mut report));
        }

        report
    }

    /// Drops every waiting or queued sequence of `session`.
    ///
    /// Returns the cancelled ids in lane order.
    pub fn cancel_session(&mut self, session: SessionId) -> Vec<SequenceId> {
        let Some(lane) = self.lanes.remove(&session) else {
            return Vec::new();
        };

        let mut cancelled = Vec::with_capacity(lane.len());
        for id in lane {
            if let Some(sequence) = self.sequences.remove(&id) {
                self.timeline.remove(&(sequence.resume_at, id));
                cancelled.push(id);
            }
        }

        if !cancelled.is_empty() {
            debug!(
                target: "menu::executor",
                %session,
                count = cancelled.len(),
                "cancelled session sequences"
            );
        }
        cancelled
    }

    /// Drops every sequence started by `player`, with or without a session.
    ///
    /// Scans all pending sequences; use [`Self::cancel_session`] when the
    /// session is known.
    pub fn cancel_player(&mut self, player: PlayerId) -> Vec<SequenceId> {
        let mut sessions: Vec<SessionId> = Vec::new();
        let mut sessionless: Vec<SequenceId> = Vec::new();

        for sequence in self.sequences.values() {
            if sequence.ctx.player().id() != player {
                continue;
            }
            match sequence.session() {
                Some(session) => {
                    if !sessions.contains(&session) {
                        sessions.push(session);
                    }
                }
                None => sessionless.push(sequence.id),
            }
        }

        let mut cancelled = Vec::new();
        for session in sessions {
            cancelled.extend(self.cancel_session(session));
        }
        for id in sessionless {
            if let Some(sequence) = self.sequences.remove(&id) {
                self.timeline.remove(&(sequence.resume_at, id));
                cancelled.push(id);
            }
        }

        if !cancelled.is_empty() {
            debug!(target: "menu::executor", %player, count = cancelled.len(), "cancelled player sequences");
        }
        cancelled
    }

    /// Waiting plus queued sequences.
    pub fn pending_count(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_pending(&self, id: SequenceId) -> bool {
        self.sequences.contains_key(&id)
    }

    /// State of a held sequence; `None` once it finished or was cancelled.
    pub fn state(&self, id: SequenceId) -> Option<SequenceState> {
        self.sequences.get(&id).map(PendingSequence::state)
    }

    pub fn get(&self, id: SequenceId) -> Option<&PendingSequence> {
        self.sequences.get(&id)
    }

    /// Earliest resume tick among waiting sequences.
    pub fn next_resume(&self) -> Option<Tick> {
        self.timeline.first().map(|&(tick, _)| tick)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn allocate_id(&mut self) -> SequenceId {
        self.next_id += 1;
        SequenceId(self.next_id)
    }

    /// Steps `sequence`; when it finishes, starts queued successors in its lane.
    fn run(
        &mut self,
        sequence: PendingSequence,
        env: &MenuEnv<'_>,
        now: Tick,
        mut report: Option<&mut TickReport>,
    ) -> SequenceOutcome {
        let session = sequence.session();
        let outcome = self.step(sequence, env, now);

        if outcome == SequenceOutcome::Completed {
            if let Some(report) = report.as_deref_mut() {
                report.completed += 1;
            }
            if let Some(session) = session {
                self.start_queued(session, env, now, report);
            }
        }

        outcome
    }

    /// Pops the finished front of `session`'s lane and starts successors until
    /// one suspends or the lane drains.
    fn start_queued(
        &mut self,
        session: SessionId,
        env: &MenuEnv<'_>,
        now: Tick,
        mut report: Option<&mut TickReport>,
    ) {
        loop {
            let Some(lane) = self.lanes.get_mut(&session) else {
                return;
            };
            lane.pop_front();
            let Some(&next) = lane.front() else {
                self.lanes.remove(&session);
                return;
            };
            let Some(sequence) = self.sequences.remove(&next) else {
                continue;
            };

            if !still_live(&sequence.ctx, env) {
                self.sequences.insert(next, sequence);
                let cancelled = self.cancel_session(session);
                if let Some(report) = report.as_deref_mut() {
                    report.cancelled.extend(cancelled);
                }
                return;
            }

            debug!(target: "menu::executor", sequence = %next, %session, "starting queued sequence");
            match self.step(sequence, env, now) {
                SequenceOutcome::Completed => {
                    if let Some(report) = report.as_deref_mut() {
                        report.completed += 1;
                    }
                }
                _ => return,
            }
        }
    }

    /// Runs actions until the sequence ends or suspends. A suspended sequence
    /// is parked on the timeline; lanes are left to the caller.
    fn step(&mut self, mut sequence: PendingSequence, env: &MenuEnv<'_>, now: Tick) -> SequenceOutcome {
        let id = sequence.id;
        sequence.state = SequenceState::Running;

        match self.drive(&mut sequence, env, now) {
            Some(resume_at) => {
                sequence.state = SequenceState::Waiting;
                sequence.resume_at = resume_at;
                debug!(
                    target: "menu::executor",
                    sequence = %id,
                    resume_at = %resume_at,
                    remaining = sequence.remaining(),
                    "sequence waiting"
                );
                self.timeline.insert((resume_at, id));
                self.sequences.insert(id, sequence);
                SequenceOutcome::Waiting { id, resume_at }
            }
            None => {
                trace!(target: "menu::executor", sequence = %id, state = %SequenceState::Done, "sequence finished");
                SequenceOutcome::Completed
            }
        }
    }

    /// Executes actions in order. Returns the resume tick at the first delay,
    /// or `None` when every frame is exhausted.
    fn drive(&self, sequence: &mut PendingSequence, env: &MenuEnv<'_>, now: Tick) -> Option<Tick> {
        loop {
            let frame = sequence.frames.last_mut()?;
            let actions = Arc::clone(&frame.actions);
            let Some(action) = actions.get(frame.cursor) else {
                sequence.frames.pop();
                continue;
            };
            frame.cursor += 1;

            // A zero-tick delay still yields; `tick` picks it up at `now`.
            if let Some(ticks) = action.delay_ticks() {
                return Some(now + ticks);
            }

            match action.execute(&sequence.ctx, env) {
                Ok(ActionOutcome::Completed) => {}
                Ok(ActionOutcome::Nested(children)) => {
                    if sequence.frames.len() > self.max_depth {
                        let error = ActionError::DepthExceeded {
                            limit: self.max_depth,
                        };
                        report_failure(sequence.id, action, &error);
                    } else {
                        sequence.frames.push(Frame::new(children));
                    }
                }
                Err(error) => report_failure(sequence.id, action, &error),
            }
        }
    }

    fn drop_stale(&mut self, sequence: PendingSequence, report: &mut TickReport) {
        let id = sequence.id;
        match sequence.session() {
            Some(session) => {
                self.sequences.insert(id, sequence);
                report.cancelled.extend(self.cancel_session(session));
            }
            None => {
                debug!(target: "menu::executor", sequence = %id, state = %SequenceState::Cancelled, "player offline, dropping sequence");
                report.cancelled.push(id);
            }
        }
    }
}

impl Default for ActionExecutor {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}

/// Whether a parked sequence may still run: its player is online and its
/// session, if any, is still open.
fn still_live(ctx: &ActionContext, env: &MenuEnv<'_>) -> bool {
    if !ctx.player().is_online() {
        return false;
    }
    match (ctx.session_id(), env.sessions()) {
        (Some(session), Ok(store)) => store.is_open(session),
        _ => true,
    }
}

fn report_failure(sequence: SequenceId, action: &Action, error: &ActionError) {
    match error.severity() {
        ErrorSeverity::Configuration => warn!(
            target: "menu::executor",
            %sequence,
            action = action.type_tag(),
            code = error.error_code(),
            error = %error,
            "action skipped: configuration"
        ),
        ErrorSeverity::Collaborator => warn!(
            target: "menu::executor",
            %sequence,
            action = action.type_tag(),
            code = error.error_code(),
            error = %error,
            "action failed"
        ),
        ErrorSeverity::Internal => error!(
            target: "menu::executor",
            %sequence,
            action = action.type_tag(),
            code = error.error_code(),
            error = %error,
            "action failed"
        ),
    }
}
