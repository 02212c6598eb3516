use super::*;
use set_cards::*;
use set_core::*;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Where the dealer is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Populating,
    Running,
    Draining,
    GameOver,
}

/// Referee of the table.
///
/// The only actor that moves cards. Owns the deck, the pile of claimed
/// cards, the round countdown, and the consuming end of the claim queue.
/// Claims are judged one at a time in submission order, and every vacate
/// cascades through the seats before the next claim is looked at.
pub struct Dealer {
    config: Config,
    rules: Arc<dyn Rules>,
    table: Arc<Table>,
    claims: Arc<Claims>,
    seats: Vec<Arc<Seat>>,
    workers: Vec<Worker>,
    deck: Deck,
    claimed: Vec<Card>,
    countdown: Countdown,
    phase: Phase,
    announced: bool,
    stop: CancellationToken,
}

impl Dealer {
    pub fn new(config: Config, rules: Arc<dyn Rules>, screen: Arc<dyn Screen>) -> Self {
        let seats = (0..config.players)
            .map(|id| Arc::new(Seat::new(id, config.is_human(id), rules.size())))
            .collect();
        Self {
            table: Arc::new(Table::new(config.slots(), screen)),
            claims: Arc::new(Claims::default()),
            deck: Deck::new(rules.deck()),
            claimed: Vec::new(),
            countdown: Countdown::new(config.timer()),
            phase: Phase::Populating,
            announced: false,
            stop: CancellationToken::new(),
            workers: Vec::new(),
            seats,
            rules,
            config,
        }
    }
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }
    pub fn seats(&self) -> &[Arc<Seat>] {
        &self.seats
    }
    /// Cancelling this token ends the game after the current wait.
    pub fn stop(&self) -> CancellationToken {
        self.stop.clone()
    }
    pub fn scores(&self) -> Vec<Score> {
        self.seats.iter().map(|s| s.score()).collect()
    }
}

/// Game loop.
impl Dealer {
    pub async fn run(mut self) -> Summary {
        log::info!(
            "[dealer] starting with {} players ({} human)",
            self.seats.len(),
            self.config.humans
        );
        self.sit();
        while self.phase != Phase::GameOver {
            self.populate();
            self.play().await;
            self.drain();
            if self.stop.is_cancelled() {
                log::info!("[dealer] termination requested");
                self.phase = Phase::GameOver;
            }
        }
        let winners = self.announce_winners();
        self.dismiss().await;
        log::info!("[dealer] stopped");
        Summary::new(winners, self.scores())
    }
    /// Starts one actor per seat, plus a robot for every seat without a human.
    fn sit(&mut self) {
        self.workers = self
            .seats
            .iter()
            .map(|seat| {
                Actor::spawn(
                    seat.clone(),
                    self.table.clone(),
                    self.claims.clone(),
                    &self.config,
                )
            })
            .collect();
    }
    /// Fills the board and opens the round, or ends the game if no set is left.
    fn populate(&mut self) {
        self.phase = Phase::Populating;
        self.phase = match self.place() {
            true => Phase::Running,
            false => Phase::GameOver,
        };
    }
    /// Serves claims and ticks the countdown until the round runs out.
    async fn play(&mut self) {
        while self.phase == Phase::Running && !self.countdown.expired() {
            let wait = self.countdown.wait();
            let claim = tokio::select! {
                biased;
                _ = self.stop.cancelled() => break,
                claim = self.claims.take(wait) => claim,
            };
            self.tick();
            if let Some(claim) = claim {
                if self.judge(claim) {
                    self.populate();
                }
            }
        }
        if self.phase == Phase::Running {
            log::debug!("[dealer] round over");
            self.phase = Phase::Draining;
        }
        self.tick();
    }
    fn tick(&self) {
        self.table
            .screen()
            .countdown(self.countdown.remaining(), self.countdown.urgent());
    }
}

/// Dealing.
impl Dealer {
    /// Deals into every vacancy and decides whether the board can open.
    ///
    /// A board without a set is swept and redealt while the deck still holds
    /// one, at most `reshuffle_limit` times, after which it opens as dealt.
    /// Returns false when no set is left anywhere.
    fn place(&mut self) -> bool {
        let mut reshuffles = 0;
        loop {
            self.deal();
            let board = self.table.cards();
            if self.rules.count_sets(&board, 1) > 0 {
                break;
            }
            let everything = board
                .iter()
                .chain(self.deck.cards())
                .copied()
                .collect::<Vec<_>>();
            if self.rules.count_sets(&everything, 1) == 0 {
                log::info!("[dealer] no sets left among {} cards", everything.len());
                return false;
            }
            if !self.config.ensure_set {
                break;
            }
            if reshuffles >= self.config.reshuffle_limit {
                log::warn!("[dealer] still no set after {} reshuffles", reshuffles);
                break;
            }
            reshuffles += 1;
            log::debug!("[dealer] no set on board, reshuffling ({})", reshuffles);
            self.collect();
        }
        self.hints();
        self.open();
        true
    }
    fn deal(&mut self) {
        for slot in self.table.vacancies() {
            let Some(card) = self.deck.draw() else {
                break;
            };
            if let Err(e) = self.table.place_card(card, slot) {
                log::warn!("[dealer] {}", e);
                self.deck.push(card);
            }
        }
    }
    /// Sweeps the board back into the deck and cascades through the seats.
    fn collect(&mut self) {
        let slots = self.table.occupied();
        let cards = self.table.sweep();
        self.deck.extend(cards);
        self.vacate(&slots);
    }
    fn open(&mut self) {
        self.countdown.reset();
        self.table.screen().countdown(self.countdown.remaining(), false);
        self.table.set_ready(true);
        self.seats.iter().for_each(|seat| seat.release());
        log::debug!(
            "[dealer] board open, {} on table, {} in deck, {} claimed",
            self.table.count(),
            self.deck.len(),
            self.claimed.len()
        );
    }
    fn hints(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for set in self.rules.find_sets(&self.table.cards(), usize::MAX) {
            let slots = set
                .iter()
                .filter_map(|card| self.table.slot(*card))
                .collect::<Vec<_>>();
            log::debug!("[dealer] hint: slots {:?}", slots);
        }
    }
}

/// Judging.
impl Dealer {
    /// Rules on one dequeued claim and wakes the claimant.
    /// Returns whether cards left the board.
    fn judge(&mut self, claim: Claim) -> bool {
        let id = claim.player();
        let Some(seat) = self.seats.get(id).cloned() else {
            log::warn!("[dealer] claim from unknown player P{}", id);
            claim.resolve(Verdict::Irrelevant);
            return false;
        };
        let slots = seat.tokens();
        let cards = slots
            .iter()
            .map(|slot| self.table.card(*slot))
            .collect::<Option<Vec<_>>>()
            .filter(|cards| cards.len() == self.rules.size());
        let Some(cards) = cards else {
            log::warn!("[dealer] P{} claimed stale slots {:?}", id, slots);
            seat.irrelevant();
            claim.resolve(Verdict::Irrelevant);
            return false;
        };
        if !self.rules.is_set(&cards) {
            log::debug!("[dealer] P{} penalized for slots {:?}", id, slots);
            seat.penalty();
            claim.resolve(Verdict::Penalty);
            return false;
        }
        self.table.set_ready(false);
        for slot in slots.iter() {
            if let Some(card) = self.table.remove_card(*slot) {
                self.claimed.push(card);
            }
        }
        self.vacate(&slots);
        let score = seat.point();
        self.table.screen().score(id, score);
        log::info!("[dealer] P{} found a set at {:?}, score {}", id, slots, score);
        claim.resolve(Verdict::Point);
        true
    }
    /// Drops tokens, queued presses, and queued claims on freed slots.
    fn vacate(&self, slots: &[Slot]) {
        for seat in self.seats.iter() {
            if seat.vacate(slots, &self.claims) {
                log::trace!("[dealer] P{} lost tokens on {:?}", seat.id(), slots);
            }
        }
    }
    /// Returns every card on the board to the deck and resets every seat.
    fn drain(&mut self) {
        self.table.set_ready(false);
        let cards = self.table.sweep();
        self.deck.extend(cards);
        for seat in self.seats.iter() {
            seat.clear(&self.claims);
        }
        for claim in self.claims.clear() {
            claim.resolve(Verdict::Irrelevant);
        }
        self.countdown.clear();
        log::debug!("[dealer] board drained, {} in deck", self.deck.len());
    }
}

/// Game over.
impl Dealer {
    /// Everyone sharing the top score wins. Only the first call counts;
    /// later calls return nobody.
    pub fn announce_winners(&mut self) -> Vec<PlayerId> {
        if self.announced {
            return Vec::new();
        }
        self.announced = true;
        self.phase = Phase::GameOver;
        self.stop.cancel();
        let best = self.seats.iter().map(|s| s.score()).max().unwrap_or(0);
        let winners = self
            .seats
            .iter()
            .filter(|s| s.score() == best)
            .map(|s| s.id())
            .collect::<Vec<_>>();
        log::info!("[dealer] winners {:?} with {} points", winners, best);
        self.table.screen().winners(&winners);
        winners
    }
    /// Cancels every robot and player, last seat first, and waits for them.
    async fn dismiss(&mut self) {
        for worker in self.workers.iter().rev() {
            worker.cancel();
        }
        for worker in self.workers.drain(..).rev() {
            worker.join().await;
        }
    }
}
