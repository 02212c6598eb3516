use super::*;
use parking_lot::Mutex;
use set_core::*;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;
use tokio::sync::Notify;
use tokio::sync::oneshot;

/// Tokens in play, key presses not yet consumed, and the last ruling.
#[derive(Debug, Default)]
struct Selection {
    tokens: Vec<Slot>,
    pending: VecDeque<Slot>,
    verdict: Verdict,
}

/// Result of consuming one queued key press.
#[derive(Debug)]
pub enum Step {
    Selected(Slot),
    Deselected(Slot),
    /// The selection is complete and queued for the dealer.
    Claimed(oneshot::Receiver<Verdict>),
    /// The slot lost its card, or the selection was already full.
    Ignored(Slot),
}

/// One player's state as shared between its actor, its robot, and the dealer.
///
/// The selection sits behind a lock of its own, so the dealer's
/// invalidation sweep and the player's own toggling are mutually exclusive
/// without serializing unrelated players. Lock order is seat, then claims,
/// then board.
#[derive(Debug)]
pub struct Seat {
    id: PlayerId,
    human: bool,
    capacity: usize,
    selection: Mutex<Selection>,
    score: AtomicU32,
    awake: AtomicBool,
    inbox: Notify,
    release: Notify,
}

impl Seat {
    pub fn new(id: PlayerId, human: bool, capacity: usize) -> Self {
        Self {
            id,
            human,
            capacity,
            selection: Mutex::new(Selection::default()),
            score: AtomicU32::new(0),
            awake: AtomicBool::new(true),
            inbox: Notify::new(),
            release: Notify::new(),
        }
    }
    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn is_human(&self) -> bool {
        self.human
    }
    pub fn score(&self) -> Score {
        self.score.load(Ordering::Acquire)
    }
    /// False while a claim is pending or the player is frozen.
    pub fn is_awake(&self) -> bool {
        self.awake.load(Ordering::Acquire)
    }
    pub fn verdict(&self) -> Verdict {
        self.selection.lock().verdict
    }
    pub fn tokens(&self) -> Vec<Slot> {
        self.selection.lock().tokens.clone()
    }
    pub fn pending(&self) -> Vec<Slot> {
        self.selection.lock().pending.iter().copied().collect()
    }
}

/// Player side: admission and the selection state machine.
impl Seat {
    /// Queues a key press. Silently drops it unless the board is ready,
    /// the player is awake, the slot holds a card, and the queue has room.
    /// Every check runs under the seat lock, so a press either lands before
    /// the dealer's sweep of this seat or sees the emptied board.
    pub fn press(&self, table: &Table, slot: Slot) -> bool {
        let mut selection = self.selection.lock();
        if !self.is_awake() || !table.is_ready() || table.card(slot).is_none() {
            return false;
        }
        if selection.pending.len() >= self.capacity {
            return false;
        }
        selection.pending.push_back(slot);
        drop(selection);
        self.inbox.notify_one();
        true
    }
    /// Resolves after a key press has been queued.
    pub async fn pressed(&self) {
        self.inbox.notified().await
    }
    /// Consumes the oldest key press, toggling the token on that slot.
    /// Completing the selection submits a claim and puts the player to sleep.
    pub fn advance(&self, table: &Table, claims: &Claims) -> Option<Step> {
        let mut selection = self.selection.lock();
        let slot = selection.pending.pop_front()?;
        if let Some(i) = selection.tokens.iter().position(|s| *s == slot) {
            selection.tokens.remove(i);
            table.remove_token(self.id, slot);
            return Some(Step::Deselected(slot));
        }
        if selection.tokens.len() >= self.capacity || table.card(slot).is_none() {
            return Some(Step::Ignored(slot));
        }
        selection.tokens.push(slot);
        table.place_token(self.id, slot);
        if selection.tokens.len() < self.capacity {
            return Some(Step::Selected(slot));
        }
        self.awake.store(false, Ordering::Release);
        match claims.submit(self.id) {
            Some(verdict) => Some(Step::Claimed(verdict)),
            None => {
                self.awake.store(true, Ordering::Release);
                Some(Step::Selected(slot))
            }
        }
    }
    pub fn wake(&self) {
        self.awake.store(true, Ordering::Release);
    }
    /// Lets the robot, if any, resume pressing keys.
    pub fn release(&self) {
        self.release.notify_one();
    }
    pub async fn released(&self) {
        self.release.notified().await
    }
}

/// Dealer side: rulings and invalidation.
impl Seat {
    /// Awards a point and returns the new score.
    pub fn point(&self) -> Score {
        let mut selection = self.selection.lock();
        selection.verdict = Verdict::Point;
        self.score.fetch_add(1, Ordering::AcqRel) + 1
    }
    pub fn penalty(&self) {
        self.selection.lock().verdict = Verdict::Penalty;
    }
    pub fn irrelevant(&self) {
        self.selection.lock().verdict = Verdict::Irrelevant;
    }
    /// Drops tokens and queued presses on vacated slots. If a token went,
    /// a claim still waiting in the queue is cancelled and its owner woken.
    /// Returns whether any token was dropped.
    pub fn vacate(&self, slots: &[Slot], claims: &Claims) -> bool {
        let mut selection = self.selection.lock();
        let before = selection.tokens.len();
        selection.tokens.retain(|s| !slots.contains(s));
        selection.pending.retain(|s| !slots.contains(s));
        let touched = selection.tokens.len() < before;
        if touched {
            if let Some(claim) = claims.remove(self.id) {
                log::debug!("[seat P{}] claim cancelled, slots {:?} vacated", self.id, slots);
                selection.verdict = Verdict::Irrelevant;
                claim.resolve(Verdict::Irrelevant);
            }
        }
        touched
    }
    /// Forgets the whole selection and cancels any queued claim.
    pub fn clear(&self, claims: &Claims) {
        let mut selection = self.selection.lock();
        selection.tokens.clear();
        selection.pending.clear();
        selection.verdict = Verdict::Irrelevant;
        if let Some(claim) = claims.remove(self.id) {
            claim.resolve(Verdict::Irrelevant);
        }
    }
}
