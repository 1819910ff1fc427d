use crate::Error;
use std::collections::VecDeque;
use types::Deposit;

/// The FIFO queue of deposits waiting to enter the validator registry.
///
/// Entries are ordered by their globally increasing deposit index; the
/// queue refuses gaps and reordering at the door so consumers can rely on
/// dequeue order equalling index order.
#[derive(Debug, Default)]
pub struct DepositQueue {
    deposits: VecDeque<Deposit>,
}

impl DepositQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// Append a deposit. Its index must continue the tail of the queue.
    pub fn push(&mut self, deposit: Deposit) -> Result<(), Error> {
        if let Some(tail) = self.deposits.back() {
            let expected = tail.index.saturating_add(1);
            if deposit.index != expected {
                return Err(Error::NonContiguousDepositIndex {
                    expected,
                    found: deposit.index,
                });
            }
        }
        self.deposits.push_back(deposit);
        Ok(())
    }

    /// Up to `n` of the oldest deposits, oldest first, without consuming
    /// them.
    pub fn peek_first_n(&self, n: u64) -> Vec<Deposit> {
        self.deposits.iter().take(n as usize).cloned().collect()
    }

    /// Remove and return up to `n` of the oldest deposits, oldest first.
    /// Returns the shorter sequence when fewer remain; never fails.
    pub fn dequeue_first_n(&mut self, n: u64) -> Vec<Deposit> {
        let count = std::cmp::min(n as usize, self.deposits.len());
        self.deposits.drain(..count).collect()
    }
}
