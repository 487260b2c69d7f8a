//! Observer pattern: a publisher with two notification channels.
//! Example: newspaper/journal editions pushed to attached readers.
//!
//! Run with: cargo run --bin p1_observer_publisher

use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::rc::Rc;

/* ============================================================
 * Channels and the read-only state view
 * ============================================================
 */

/// The two independent notification channels the publisher serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Newspaper,
    Journal,
}

impl Channel {
    fn label(&self) -> &'static str {
        match self {
            Channel::Newspaper => "Newspaper",
            Channel::Journal => "Journal",
        }
    }
}

/// Snapshot of the publisher's state handed to subscribers on notify.
///
/// Subscribers only ever see this view, never the publisher itself, so a
/// reaction cannot reach back and mutate the publisher mid-notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edition {
    pub newspaper: i32,
    pub journal: i32,
}

/* ============================================================
 * Subscriber trait and the publisher
 * ============================================================
 */

/// A reader reacting to published editions. Fire-and-forget: nothing is
/// returned to the publisher.
pub trait Subscriber {
    fn name(&self) -> &str;
    fn update(&self, edition: Edition);
}

/// Owns per-channel state and per-channel subscriber lists. Subscriber
/// handles are reference-counted but non-owning with respect to the
/// publisher; there is no back-reference and no cycle.
pub struct Publisher {
    newspaper_state: i32,
    journal_state: i32,
    newspaper_subscribers: Vec<Rc<dyn Subscriber>>,
    journal_subscribers: Vec<Rc<dyn Subscriber>>,
    rng: StdRng,
}

impl Publisher {
    /// The randomness source is injected so tests can seed it.
    pub fn new(rng: StdRng) -> Self {
        Self {
            newspaper_state: 0,
            journal_state: 0,
            newspaper_subscribers: Vec::new(),
            journal_subscribers: Vec::new(),
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    fn subscribers(&self, channel: Channel) -> &Vec<Rc<dyn Subscriber>> {
        match channel {
            Channel::Newspaper => &self.newspaper_subscribers,
            Channel::Journal => &self.journal_subscribers,
        }
    }

    fn subscribers_mut(&mut self, channel: Channel) -> &mut Vec<Rc<dyn Subscriber>> {
        match channel {
            Channel::Newspaper => &mut self.newspaper_subscribers,
            Channel::Journal => &mut self.journal_subscribers,
        }
    }

    /// Appends to the channel's list. No duplicate check: attaching the
    /// same handle twice means two update calls per notify.
    pub fn attach(&mut self, channel: Channel, subscriber: Rc<dyn Subscriber>) {
        println!(
            "Publisher: attached '{}' to the {} channel.",
            subscriber.name(),
            channel.label()
        );
        self.subscribers_mut(channel).push(subscriber);
    }

    /// Removes the first matching entry, by handle identity. Detaching a
    /// handle that is not attached is a silent no-op.
    pub fn detach(&mut self, channel: Channel, subscriber: &Rc<dyn Subscriber>) {
        let list = self.subscribers_mut(channel);
        if let Some(pos) = list.iter().position(|s| Rc::ptr_eq(s, subscriber)) {
            list.remove(pos);
            println!(
                "Publisher: detached '{}' from the {} channel.",
                subscriber.name(),
                channel.label()
            );
        }
    }

    /// Invokes every subscriber on the channel, in attachment order, with a
    /// snapshot of the state as it stands right now.
    pub fn notify(&self, channel: Channel) {
        println!("Publisher: notifying {} subscribers...", channel.label());
        let edition = self.edition();
        for subscriber in self.subscribers(channel) {
            subscriber.update(edition);
        }
    }

    pub fn publish_newspaper(&mut self) {
        println!();
        println!("{}", "Newspaper: working on the next issue.".bold());
        self.newspaper_state = self.rng.gen_range(0..10);
        println!(
            "Newspaper: state has just changed to: {}",
            self.newspaper_state.to_string().yellow()
        );
        self.notify(Channel::Newspaper);
    }

    pub fn publish_journal(&mut self) {
        println!();
        println!("{}", "Journal: working on the next issue.".bold());
        self.journal_state = self.rng.gen_range(0..10);
        println!(
            "Journal: state has just changed to: {}",
            self.journal_state.to_string().yellow()
        );
        self.notify(Channel::Journal);
    }

    pub fn edition(&self) -> Edition {
        Edition {
            newspaper: self.newspaper_state,
            journal: self.journal_state,
        }
    }

    /// Subscriber names in attachment order, for display and assertions.
    pub fn subscriber_names(&self, channel: Channel) -> Vec<String> {
        self.subscribers(channel)
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }
}

/* ============================================================
 * Concrete subscribers
 * ============================================================
 */

/// Reacts to low newspaper numbers.
pub struct HeadlineReader;

impl Subscriber for HeadlineReader {
    fn name(&self) -> &str {
        "HeadlineReader"
    }

    fn update(&self, edition: Edition) {
        println!("Inside {}", self.name());
        if edition.newspaper < 3 {
            println!("{}", format!("{}: reacted to the event.", self.name()).green());
        }
    }
}

/// Reacts to anything except a newspaper state of exactly 1.
pub struct MarketWatcher;

impl Subscriber for MarketWatcher {
    fn name(&self) -> &str {
        "MarketWatcher"
    }

    fn update(&self, edition: Edition) {
        println!("Inside {}", self.name());
        if edition.newspaper == 0 || edition.newspaper >= 2 {
            println!("{}", format!("{}: reacted to the event.", self.name()).green());
        }
    }
}

/// Journal-channel reader; ignores the newspaper state entirely.
pub struct ScienceColumnist;

impl Subscriber for ScienceColumnist {
    fn name(&self) -> &str {
        "ScienceColumnist"
    }

    fn update(&self, edition: Edition) {
        println!("Inside {}", self.name());
        if edition.journal < 3 {
            println!("{}", format!("{}: reacted to the event.", self.name()).green());
        }
    }
}

/* ============================================================
 * Demo (cargo run)
 * ============================================================
 */

fn main() {
    println!("{}", "=== Observer: publisher with two channels ===".bold());

    let mut publisher = Publisher::new(StdRng::from_entropy());

    let headline: Rc<dyn Subscriber> = Rc::new(HeadlineReader);
    let market: Rc<dyn Subscriber> = Rc::new(MarketWatcher);
    let science: Rc<dyn Subscriber> = Rc::new(ScienceColumnist);

    publisher.attach(Channel::Newspaper, headline.clone());
    publisher.attach(Channel::Newspaper, market.clone());
    publisher.attach(Channel::Journal, science.clone());
    println!(
        "Newspaper roster: {:?}",
        publisher.subscriber_names(Channel::Newspaper)
    );

    publisher.publish_newspaper();
    publisher.publish_newspaper();
    publisher.publish_journal();

    println!();
    publisher.detach(Channel::Newspaper, &market);

    publisher.publish_newspaper();
}

/* ============================================================
 * Tests (cargo test)
 * ============================================================
 */

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every edition it is handed into a log shared with the test.
    struct Recorder {
        name: String,
        log: Rc<RefCell<Vec<(String, Edition)>>>,
    }

    impl Recorder {
        fn new(name: &str, log: &Rc<RefCell<Vec<(String, Edition)>>>) -> Rc<dyn Subscriber> {
            Rc::new(Self {
                name: name.to_string(),
                log: Rc::clone(log),
            })
        }
    }

    impl Subscriber for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn update(&self, edition: Edition) {
            self.log.borrow_mut().push((self.name.clone(), edition));
        }
    }

    fn shared_log() -> Rc<RefCell<Vec<(String, Edition)>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_attach_preserves_insertion_order() {
        let log = shared_log();
        let mut publisher = Publisher::seeded(1);

        publisher.attach(Channel::Newspaper, Recorder::new("a", &log));
        publisher.attach(Channel::Newspaper, Recorder::new("b", &log));
        publisher.attach(Channel::Journal, Recorder::new("c", &log));

        assert_eq!(publisher.subscriber_names(Channel::Newspaper), ["a", "b"]);
        assert_eq!(publisher.subscriber_names(Channel::Journal), ["c"]);
    }

    #[test]
    fn test_detach_removes_only_the_matching_handle() {
        let log = shared_log();
        let mut publisher = Publisher::seeded(1);

        let a = Recorder::new("a", &log);
        let b = Recorder::new("b", &log);
        publisher.attach(Channel::Newspaper, a.clone());
        publisher.attach(Channel::Newspaper, b.clone());

        publisher.detach(Channel::Newspaper, &a);
        assert_eq!(publisher.subscriber_names(Channel::Newspaper), ["b"]);
    }

    #[test]
    fn test_detach_of_absent_handle_is_a_noop() {
        let log = shared_log();
        let mut publisher = Publisher::seeded(1);

        let a = Recorder::new("a", &log);
        let stranger = Recorder::new("stranger", &log);
        publisher.attach(Channel::Newspaper, a.clone());

        publisher.detach(Channel::Newspaper, &stranger);
        publisher.detach(Channel::Newspaper, &stranger);
        assert_eq!(publisher.subscriber_names(Channel::Newspaper), ["a"]);

        // Same handle, wrong channel: also a no-op.
        publisher.detach(Channel::Journal, &a);
        assert_eq!(publisher.subscriber_names(Channel::Newspaper), ["a"]);
    }

    #[test]
    fn test_notify_reaches_each_subscriber_once_in_order() {
        let log = shared_log();
        let mut publisher = Publisher::seeded(7);

        publisher.attach(Channel::Newspaper, Recorder::new("first", &log));
        publisher.attach(Channel::Newspaper, Recorder::new("second", &log));
        publisher.attach(Channel::Journal, Recorder::new("journal-only", &log));

        publisher.publish_newspaper();

        let calls: Vec<String> = log.borrow().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(calls, ["first", "second"]);
    }

    #[test]
    fn test_notify_passes_state_at_notification_time() {
        let log = shared_log();
        let mut publisher = Publisher::seeded(7);

        publisher.attach(Channel::Newspaper, Recorder::new("r", &log));
        publisher.publish_newspaper();
        let first_edition = publisher.edition();
        publisher.publish_newspaper();

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].1, first_edition);
        assert_eq!(log[1].1, publisher.edition());
    }

    #[test]
    fn test_duplicate_attach_means_two_updates() {
        let log = shared_log();
        let mut publisher = Publisher::seeded(3);

        let twice = Recorder::new("twice", &log);
        publisher.attach(Channel::Journal, twice.clone());
        publisher.attach(Channel::Journal, twice.clone());

        publisher.publish_journal();
        assert_eq!(log.borrow().len(), 2);

        // Detach removes one entry at a time.
        publisher.detach(Channel::Journal, &twice);
        assert_eq!(publisher.subscriber_names(Channel::Journal), ["twice"]);
    }

    #[test]
    fn test_published_state_stays_in_range() {
        let mut publisher = Publisher::seeded(42);
        for _ in 0..50 {
            publisher.publish_newspaper();
            publisher.publish_journal();
            let edition = publisher.edition();
            assert!((0..10).contains(&edition.newspaper));
            assert!((0..10).contains(&edition.journal));
        }
    }

    #[test]
    fn test_seeded_publishers_are_deterministic() {
        let mut left = Publisher::seeded(9);
        let mut right = Publisher::seeded(9);
        for _ in 0..10 {
            left.publish_newspaper();
            right.publish_newspaper();
            assert_eq!(left.edition(), right.edition());
        }
    }

    #[test]
    fn test_journal_publish_leaves_newspaper_state_alone() {
        let mut publisher = Publisher::seeded(5);
        publisher.publish_newspaper();
        let before = publisher.edition().newspaper;
        publisher.publish_journal();
        assert_eq!(publisher.edition().newspaper, before);
    }
}
