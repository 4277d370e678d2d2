//! Puts results from parallel workers back into year/day/part order
//!
//! Two min-heaps: the keys still expected, and the results received
//! ahead of their turn.

use crate::executor::SolverResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Wrapper for min-heap ordering of SolverResult
struct OrderedResult(SolverResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse ordering for min-heap (smallest first)
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting to be output
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Create aggregator from list of expected keys
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));

        // Emit results while pending min matches expected min
        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) == *next_expected {
                self.expected.pop();
                if let Some(OrderedResult(result)) = self.pending.pop() {
                    ready.push(result);
                }
            } else {
                break;
            }
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}
