//! State pattern: an actor delegating to its current behavior object.
//! Example: a hero cycling through Common / Super / Hyper firing modes.
//!
//! Run with: cargo run --bin p2_state_hero

use colored::Colorize;

/* ============================================================
 * Mode trait and the three variants
 * ============================================================
 */

/// One firing mode of the hero. A mode computes the damage for the current
/// shot and decides the next mode; the transition is returned to the hero
/// rather than applied through a back-reference, so modes never hold a
/// handle to their owner.
pub trait Mode {
    fn name(&self) -> &'static str;

    fn damage(&self) -> u32;

    /// `None` means stay in the current mode.
    fn next(&self, shots_fired: u32) -> Option<Box<dyn Mode>>;
}

/// Baseline mode. Charges up into `Super` on every third shot overall.
pub struct Common;

impl Mode for Common {
    fn name(&self) -> &'static str {
        "Common"
    }

    fn damage(&self) -> u32 {
        5
    }

    fn next(&self, shots_fired: u32) -> Option<Box<dyn Mode>> {
        if shots_fired % 3 == 0 {
            Some(Box::new(Super))
        } else {
            None
        }
    }
}

/// One boosted shot, then escalates further.
pub struct Super;

impl Mode for Super {
    fn name(&self) -> &'static str {
        "Super"
    }

    fn damage(&self) -> u32 {
        10
    }

    fn next(&self, _shots_fired: u32) -> Option<Box<dyn Mode>> {
        Some(Box::new(Hyper))
    }
}

/// The peak of the cycle; always drops back to `Common`.
pub struct Hyper;

impl Mode for Hyper {
    fn name(&self) -> &'static str {
        "Hyper"
    }

    fn damage(&self) -> u32 {
        15
    }

    fn next(&self, _shots_fired: u32) -> Option<Box<dyn Mode>> {
        Some(Box::new(Common))
    }
}

/* ============================================================
 * The actor
 * ============================================================
 */

/// Holds the current mode and a monotonic shot counter. All behavior is
/// delegated to the mode; the hero only applies the returned transition.
pub struct Hero {
    mode: Box<dyn Mode>,
    shots_fired: u32,
}

impl Hero {
    pub fn new() -> Self {
        Self {
            mode: Box::new(Common),
            shots_fired: 0,
        }
    }

    /// Increment the counter, take the damage from the current mode, then
    /// apply that mode's transition. Total: every mode always produces a
    /// damage value and a (possibly identity) transition.
    pub fn shoot(&mut self) -> u32 {
        self.shots_fired += 1;
        let damage = self.mode.damage();
        if let Some(next) = self.mode.next(self.shots_fired) {
            self.mode = next;
        }
        damage
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

/* ============================================================
 * Demo (cargo run)
 * ============================================================
 */

fn main() {
    println!("{}", "=== State: hero firing modes ===".bold());

    let mut hero = Hero::new();
    for _ in 1..10 {
        let damage = hero.shoot();
        println!(
            "Hero does damage: {}  (now in {} mode)",
            damage.to_string().yellow(),
            hero.mode_name()
        );
    }
    println!("Shots fired in total: {}", hero.shots_fired());
}

/* ============================================================
 * Tests (cargo test)
 * ============================================================
 */
