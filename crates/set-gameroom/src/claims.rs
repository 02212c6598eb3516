use super::*;
use parking_lot::Mutex;
use set_core::PlayerId;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Notify;
use tokio::sync::oneshot;

/// A completed selection waiting for the dealer's ruling.
///
/// Carries the claimant's reply channel, so whoever ends up holding the
/// claim (the dealer after dequeuing, or an invalidation sweep) delivers
/// exactly one verdict by consuming it.
#[derive(Debug)]
pub struct Claim {
    player: PlayerId,
    reply: oneshot::Sender<Verdict>,
}

impl Claim {
    pub fn player(&self) -> PlayerId {
        self.player
    }
    /// Wakes the claimant with the ruling.
    pub fn resolve(self, verdict: Verdict) {
        log::trace!("[claims] P{} resolved as {}", self.player, verdict);
        let _ = self.reply.send(verdict);
    }
}

/// Unbounded FIFO of pending claims, at most one per player.
///
/// Producers are player actors; the single consumer is the dealer.
/// Invalidation removes entries by identity while they are still queued.
#[derive(Debug, Default)]
pub struct Claims {
    queue: Mutex<VecDeque<Claim>>,
    signal: Notify,
}

impl Claims {
    /// Queues a claim for the player and returns where its verdict will land.
    /// Refuses a second claim while one from the same player is pending.
    pub fn submit(&self, player: PlayerId) -> Option<oneshot::Receiver<Verdict>> {
        let mut queue = self.queue.lock();
        if queue.iter().any(|c| c.player == player) {
            log::warn!("[claims] P{} already has a claim pending", player);
            return None;
        }
        let (reply, verdict) = oneshot::channel();
        queue.push_back(Claim { player, reply });
        drop(queue);
        self.signal.notify_one();
        log::debug!("[claims] P{} submitted", player);
        Some(verdict)
    }
    /// Waits until a claim is available and dequeues it.
    pub async fn next(&self) -> Claim {
        loop {
            let head = self.queue.lock().pop_front();
            if let Some(claim) = head {
                return claim;
            }
            self.signal.notified().await;
        }
    }
    /// Dequeues the oldest claim, waiting at most `timeout` for one to arrive.
    pub async fn take(&self, timeout: Duration) -> Option<Claim> {
        tokio::time::timeout(timeout, self.next()).await.ok()
    }
    /// Pulls the player's claim out of the queue if it is still there.
    pub fn remove(&self, player: PlayerId) -> Option<Claim> {
        let mut queue = self.queue.lock();
        let index = queue.iter().position(|c| c.player == player)?;
        queue.remove(index)
    }
    /// Empties the queue, returning the claims in submission order.
    pub fn clear(&self) -> Vec<Claim> {
        self.queue.lock().drain(..).collect()
    }
    #[cfg(test)]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.queue.lock().iter().any(|c| c.player == player)
    }
    /// Pending claimants in submission order.
    pub fn pending(&self) -> Vec<PlayerId> {
        self.queue.lock().iter().map(|c| c.player).collect()
    }
    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    #[tokio::test]
    async fn serves_in_submission_order() {
        let claims = Claims::default();
        let _a = claims.submit(2).unwrap();
        let _b = claims.submit(0).unwrap();
        let _c = claims.submit(1).unwrap();
        assert_eq!(claims.pending(), vec![2, 0, 1]);
        assert_eq!(claims.next().await.player(), 2);
        assert_eq!(claims.next().await.player(), 0);
        assert_eq!(claims.next().await.player(), 1);
        assert!(claims.is_empty());
    }
    #[test]
    fn one_claim_per_player() {
        let claims = Claims::default();
        let _first = claims.submit(1).unwrap();
        assert!(claims.submit(1).is_none());
        assert_eq!(claims.len(), 1);
    }
    #[tokio::test]
    async fn take_times_out_when_empty() {
        let claims = Claims::default();
        assert!(claims.take(Duration::from_millis(5)).await.is_none());
    }
    #[tokio::test]
    async fn take_wakes_on_submit() {
        let claims = Arc::new(Claims::default());
        let submitter = tokio::spawn({
            let claims = claims.clone();
            async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                claims.submit(3)
            }
        });
        let claim = claims.take(Duration::from_secs(5)).await.expect("claim");
        assert_eq!(claim.player(), 3);
        let verdict = submitter.await.unwrap().unwrap();
        claim.resolve(Verdict::Point);
        assert_eq!(verdict.await.unwrap(), Verdict::Point);
    }
    #[tokio::test]
    async fn remove_by_identity() {
        let claims = Claims::default();
        let _a = claims.submit(0).unwrap();
        let b = claims.submit(1).unwrap();
        let _c = claims.submit(2).unwrap();
        claims.remove(1).unwrap().resolve(Verdict::Irrelevant);
        assert!(claims.remove(1).is_none());
        assert!(!claims.contains(1));
        assert_eq!(claims.pending(), vec![0, 2]);
        assert_eq!(b.await.unwrap(), Verdict::Irrelevant);
    }
    #[tokio::test]
    async fn dropped_claim_closes_reply() {
        let claims = Claims::default();
        let verdict = claims.submit(0).unwrap();
        drop(claims.clear());
        assert!(verdict.await.is_err());
    }
}
