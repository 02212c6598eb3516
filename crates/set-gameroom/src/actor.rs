use super::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Runs one player's selection loop in its own task.
///
/// - Consumes queued key presses while the board is ready
/// - Toggles tokens through its [`Seat`]
/// - On a full selection, waits for the dealer's [`Verdict`]
/// - Sits out the freeze, then wakes itself and its robot
pub struct Actor {
    seat: Arc<Seat>,
    table: Arc<Table>,
    claims: Arc<Claims>,
    point: Duration,
    penalty: Duration,
    tick: Duration,
    stop: CancellationToken,
    robot: Option<JoinHandle<()>>,
}

impl Actor {
    pub fn spawn(seat: Arc<Seat>, table: Arc<Table>, claims: Arc<Claims>, config: &Config) -> Worker {
        let stop = CancellationToken::new();
        let robot = match seat.is_human() {
            true => None,
            false => Some(CancellationToken::new()),
        };
        let helper = robot.clone().map(|token| {
            Robot::spawn(seat.clone(), table.clone(), config.think_delay, token)
        });
        let actor = Self {
            seat: seat.clone(),
            table,
            claims,
            point: config.point_freeze,
            penalty: config.penalty_freeze,
            tick: config.freeze_tick,
            stop: stop.clone(),
            robot: helper,
        };
        Worker {
            seat,
            stop,
            robot,
            handle: tokio::spawn(actor.run()),
        }
    }
    async fn run(mut self) {
        let id = self.seat.id();
        log::debug!("[player P{}] starting", id);
        loop {
            tokio::select! {
                biased;
                _ = self.stop.cancelled() => break,
                _ = self.table.ready() => {}
            }
            match self.seat.advance(&self.table, &self.claims) {
                Some(Step::Claimed(verdict)) => self.settle(verdict).await,
                Some(step) => log::trace!("[player P{}] {:?}", id, step),
                None => tokio::select! {
                    biased;
                    _ = self.stop.cancelled() => break,
                    _ = self.seat.pressed() => {}
                },
            }
        }
        if let Some(robot) = self.robot.take() {
            let _ = robot.await;
        }
        log::debug!("[player P{}] stopped", id);
    }
    /// Waits out the dealer's ruling and the freeze that follows it.
    async fn settle(&self, verdict: oneshot::Receiver<Verdict>) {
        let id = self.seat.id();
        log::debug!("[player P{}] claimed {:?}", id, self.seat.tokens());
        let verdict = tokio::select! {
            biased;
            _ = self.stop.cancelled() => return,
            verdict = verdict => verdict.unwrap_or_default(),
        };
        log::debug!("[player P{}] verdict {}", id, verdict);
        match verdict {
            Verdict::Point => self.freeze(self.point).await,
            Verdict::Penalty => self.freeze(self.penalty).await,
            Verdict::Irrelevant => {}
        }
        if self.stop.is_cancelled() {
            return;
        }
        self.seat.irrelevant();
        self.seat.wake();
        self.seat.release();
    }
    /// Shows a countdown for the freeze, refreshed every tick.
    async fn freeze(&self, duration: Duration) {
        let id = self.seat.id();
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            self.table.screen().freeze(id, remaining);
            if remaining.is_zero() {
                break;
            }
            tokio::select! {
                biased;
                _ = self.stop.cancelled() => break,
                _ = tokio::time::sleep(remaining.min(self.tick)) => {}
            }
        }
    }
}

/// The dealer's grip on a running player: its seat, its cancellation
/// tokens, and its task.
pub struct Worker {
    seat: Arc<Seat>,
    stop: CancellationToken,
    robot: Option<CancellationToken>,
    handle: JoinHandle<()>,
}

impl Worker {
    /// Stops the robot before the player it drives.
    pub fn cancel(&self) {
        if let Some(robot) = self.robot.as_ref() {
            robot.cancel();
        }
        self.stop.cancel();
    }
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            log::warn!("[player P{}] task failed: {}", self.seat.id(), e);
        }
    }
}
