//! Strategy pattern: a context delegating to a swappable algorithm.
//! Example: sorting a fixed sequence ascending or descending.
//!
//! Run with: cargo run --bin p3_strategy_sort

use colored::Colorize;
use thiserror::Error;

/* ============================================================
 * Strategy trait and the two variants
 * ============================================================
 */

/// A pure sorting algorithm over a sequence of strings. Implementations
/// never mutate their input or any shared state.
pub trait SortStrategy {
    fn name(&self) -> &'static str;

    fn apply(&self, input: &[String]) -> Vec<String>;
}

/// Stable ascending lexicographic sort.
pub struct Ascending;

impl SortStrategy for Ascending {
    fn name(&self) -> &'static str {
        "ascending"
    }

    fn apply(&self, input: &[String]) -> Vec<String> {
        let mut sorted = input.to_vec();
        sorted.sort();
        sorted
    }
}

/// Stable ascending sort followed by a full reversal, i.e. descending order.
pub struct AscendingThenReversed;

impl SortStrategy for AscendingThenReversed {
    fn name(&self) -> &'static str {
        "ascending-then-reversed"
    }

    fn apply(&self, input: &[String]) -> Vec<String> {
        let mut sorted = input.to_vec();
        sorted.sort();
        sorted.reverse();
        sorted
    }
}

/* ============================================================
 * The context
 * ============================================================
 */

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("no sorting strategy configured; call set_strategy first")]
    NotConfigured,
}

/// Holds the active strategy and the fixed input it is applied to. The
/// context never inspects the concrete strategy type.
pub struct SortContext {
    strategy: Option<Box<dyn SortStrategy>>,
    input: Vec<String>,
}

impl SortContext {
    pub fn new() -> Self {
        Self {
            strategy: None,
            input: ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
        }
    }

    pub fn with_strategy(strategy: Box<dyn SortStrategy>) -> Self {
        let mut context = Self::new();
        context.strategy = Some(strategy);
        context
    }

    /// Replaces the active strategy; allowed at any time, including between
    /// two `execute` calls.
    pub fn set_strategy(&mut self, strategy: Box<dyn SortStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Applies the active strategy to the fixed input and returns the
    /// comma-joined result. Executing without a strategy is a configuration
    /// error, not a crash.
    pub fn execute(&self) -> Result<String, StrategyError> {
        let strategy = self.strategy.as_deref().ok_or(StrategyError::NotConfigured)?;
        println!(
            "Context: sorting data with the {} strategy (not sure how it'll do it)",
            strategy.name()
        );
        let result = strategy.apply(&self.input).join(",");
        println!("{}", result.yellow());
        Ok(result)
    }
}

impl Default for SortContext {
    fn default() -> Self {
        Self::new()
    }
}

/* ============================================================
 * Demo (cargo run)
 * ============================================================
 */

fn main() {
    println!("{}", "=== Strategy: swappable sorting algorithms ===".bold());

    let context = SortContext::new();

    // No strategy yet: surfaced as an explicit error, not a crash.
    if let Err(err) = context.execute() {
        println!("{}", format!("Client: {err}").red());
    }

    println!("\nClient: strategy is set to normal sorting.");
    let mut context = SortContext::with_strategy(Box::new(Ascending));
    if let Err(err) = context.execute() {
        println!("{}", format!("Client: {err}").red());
    }

    println!("\nClient: strategy is set to reverse sorting.");
    context.set_strategy(Box::new(AscendingThenReversed));
    if let Err(err) = context.execute() {
        println!("{}", format!("Client: {err}").red());
    }
}

/* ============================================================
 * Tests (cargo test)
 * ============================================================
 */
