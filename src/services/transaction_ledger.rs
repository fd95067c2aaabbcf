//! Transaction ledger - record store for transfer attempts.
//!
//! Every transfer that passes validation ends up here exactly once, whether
//! the ledger client accepted it or not. Records are kept newest-first and
//! served in pages.
//!
//! # Storage
//!
//! [`InMemoryLedger`] lives for the process lifetime and is never persisted.
//! Anything durable can implement [`TransactionStore`] instead; the send
//! workflow and the handlers only see the trait.

use std::{
    collections::VecDeque,
    sync::{PoisonError, RwLock},
};

use crate::models::transfer::TransferRecord;

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_OFFSET: usize = 0;

/// A slice of the ledger, newest-first.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<TransferRecord>,
    /// Ledger length at the time of the read
    pub total: usize,
    /// True iff `offset + limit < total`
    pub has_more: bool,
}

/// Offset and limit of a history read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Parse raw query values. Each value is read up to its first non-digit,
    /// so `2.5` and `2abc` both mean 2. Absent, non-numeric or negative values
    /// fall back to the defaults, and so does a zero limit. Never fails.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| {
            raw.and_then(leading_integer)
                .and_then(|n| usize::try_from(n).ok())
        };

        Self {
            offset: parse(offset).unwrap_or(DEFAULT_OFFSET),
            limit: parse(limit).filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT),
        }
    }
}

/// Integer prefix of `raw`: leading whitespace, an optional sign, then
/// digits up to the first other character. `None` when there are no digits.
/// Values too large for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude = unsigned[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Append-only store of transfer records.
///
/// Both operations are synchronous: an append is never observed half-done by
/// a concurrent page read.
pub trait TransactionStore: Send + Sync {
    /// Insert at the head. No validation, no deduplication.
    fn append(&self, record: TransferRecord);

    /// Up to `limit` records starting at `offset`, newest-first. A zero
    /// limit is read as [`DEFAULT_LIMIT`].
    fn page(&self, offset: usize, limit: usize) -> Page;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local [`TransactionStore`].
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    records: RwLock<VecDeque<TransferRecord>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for InMemoryLedger {
    fn append(&self, record: TransferRecord) {
        // Records are only ever pushed whole, so a poisoned lock still holds a consistent deque
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push_front(record);
    }

    fn page(&self, offset: usize, limit: usize) -> Page {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        let total = records.len();

        Page {
            items: records.iter().skip(offset).take(limit).cloned().collect(),
            total,
            has_more: offset.saturating_add(limit) < total,
        }
    }

    fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
