// Brute force search for a coin combination that hits a target exactly.
//
//   coins = {2, 3}, target = 7, max_uses = 7 / 2 + 1 = 4:
//
//   [0,0] [1,0] [2,0] [3,0] [4,0]   sums 0 2 4 6 8
//   [0,1] [1,1] [2,1]               sums 3 5 7  ✓ stop at the first match
//
// The first counter moves fastest, so the witness is the first match in that
// order, not the one using the fewest coins.
use std::time::{Duration, Instant};

use log::debug;

use crate::error::{Error, Result};

/// Upper bound on the search time of a single problem.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The witness sums to the target.
    Satisfiable,
    /// Every bounded combination was tried and none matched.
    Exhausted,
    /// The time budget ran out first. Inconclusive: a match may still exist.
    BudgetExceeded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: Outcome,
    /// Counts per denomination. Only a solution when the outcome is
    /// `Satisfiable`, otherwise the vector the search stopped on.
    pub witness: Vec<u64>,
    pub elapsed_micros: u64,
}

impl SearchResult {
    pub fn is_satisfiable(&self) -> bool {
        self.outcome == Outcome::Satisfiable
    }
}

/// Mixed-radix counter over `[0, cap]^len`, first digit moving fastest.
#[derive(Debug)]
pub struct Odometer {
    counts: Vec<u64>,
    cap: u64,
}

impl Odometer {
    pub fn new(len: usize, cap: u64) -> Self {
        Self {
            counts: vec![0; len],
            cap,
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Step to the next vector. Returns false once every digit has been at the
    /// cap, leaving the counter wrapped back to all zeros.
    pub fn advance(&mut self) -> bool {
        for count in self.counts.iter_mut() {
            if *count < self.cap {
                *count += 1;
                return true;
            }
            *count = 0;
        }
        false
    }

    fn into_counts(self) -> Vec<u64> {
        self.counts
    }
}

/// Largest count any single denomination needs: one more than the number of
/// the smallest coin that fits in the target.
pub fn max_uses(denominations: &[u64], target: u64) -> Result<u64> {
    validate(denominations)?;
    let smallest = denominations.iter().copied().min().unwrap_or(1);
    Ok((target / smallest).saturating_add(1))
}

/// Total value of `counts` coins of each denomination.
pub fn weighted_sum(denominations: &[u64], counts: &[u64]) -> u128 {
    denominations
        .iter()
        .zip(counts)
        .fold(0u128, |acc, (&coin, &count)| {
            acc.saturating_add(coin as u128 * count as u128)
        })
}

fn validate(denominations: &[u64]) -> Result<()> {
    if denominations.is_empty() {
        return Err(Error::InvalidDenominations(
            "at least one denomination is required".to_string(),
        ));
    }
    if let Some(pos) = denominations.iter().position(|&d| d == 0) {
        return Err(Error::InvalidDenominations(format!(
            "denomination at position {} is zero",
            pos
        )));
    }
    Ok(())
}

fn micros_since(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX)
}

/// Enumerate count vectors until one sums to `target`, the bounded space runs
/// out, or `time_budget` has elapsed.
pub fn solve(denominations: &[u64], target: u64, time_budget: Duration) -> Result<SearchResult> {
    let start = Instant::now();
    let cap = max_uses(denominations, target)?;
    debug!(
        "searching {} denominations with up to {} uses each for target {}",
        denominations.len(),
        cap,
        target
    );

    let goal = target as u128;
    let mut odometer = Odometer::new(denominations.len(), cap);

    let outcome = loop {
        if weighted_sum(denominations, odometer.counts()) == goal {
            break Outcome::Satisfiable;
        }
        if start.elapsed() > time_budget {
            break Outcome::BudgetExceeded;
        }
        if !odometer.advance() {
            break Outcome::Exhausted;
        }
    };

    let elapsed_micros = micros_since(start);
    debug!("search finished as {:?} after {}us", outcome, elapsed_micros);

    Ok(SearchResult {
        outcome,
        witness: odometer.into_counts(),
        elapsed_micros,
    })
}
