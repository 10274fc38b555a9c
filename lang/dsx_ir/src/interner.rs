//! Sharded string interner.
//!
//! A page of markup carries hundreds of attribute expressions that keep
//! repeating the same handful of signal and member names, so parsing interns
//! every name once and hands out [`Name`] handles. The table is sharded
//! sixteen ways with per-shard [`RwLock`]s: lookups of already-interned
//! strings take a read lock only, and concurrent parses of different
//! attributes rarely contend on the same shard.
//!
//! Interned strings are leaked and live for the lifetime of the process.
//! The working set is bounded by the distinct names in the markup, which is
//! small and stabilizes quickly.

use core::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::name::{Name, NUM_SHARDS};

/// One shard of the interner: a map for lookups plus the slot table that
/// backs [`Name::local`] indices.
#[derive(Default)]
struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Error produced when a shard runs out of slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternError {
    /// The shard already holds [`Name::MAX_LOCAL`] strings.
    ShardOverflow { shard: usize },
}

impl fmt::Display for InternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShardOverflow { shard } => {
                write!(f, "string interner shard {shard} is full")
            }
        }
    }
}

impl std::error::Error for InternError {}

/// Thread-safe interner mapping strings to [`Name`] handles and back.
pub struct StringInterner {
    shards: [RwLock<InternShard>; NUM_SHARDS],
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Creates an interner holding only the empty string, so that
    /// [`Name::EMPTY`] resolves from the start.
    #[must_use]
    pub fn new() -> Self {
        let interner = StringInterner {
            shards: core::array::from_fn(|_| RwLock::new(InternShard::default())),
            total_count: AtomicUsize::new(0),
        };
        // Slot 0 of shard 0 is reserved for "" regardless of where the hash
        // would place it.
        {
            let mut shard = interner.shards[0].write();
            shard.map.insert("", 0);
            shard.strings.push("");
        }
        interner.total_count.store(1, Ordering::Relaxed);
        interner
    }

    /// Picks the shard for a string from its first few bytes. Short names
    /// dominate this workload, so hashing a prefix is enough to spread them.
    fn shard_for(text: &str) -> usize {
        let mut hash = 0usize;
        for &byte in text.as_bytes().iter().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(usize::from(byte));
        }
        hash & (NUM_SHARDS - 1)
    }

    /// Interns `text`, returning the existing handle if it was seen before.
    pub fn try_intern(&self, text: &str) -> Result<Name, InternError> {
        if text.is_empty() {
            return Ok(Name::EMPTY);
        }
        let shard_index = Self::shard_for(text);
        {
            let shard = self.shards[shard_index].read();
            if let Some(&local) = shard.map.get(text) {
                return Ok(Name::new(shard_index, local));
            }
        }
        let mut shard = self.shards[shard_index].write();
        // Re-check under the write lock: another thread may have interned
        // the same string between our two lock acquisitions.
        if let Some(&local) = shard.map.get(text) {
            return Ok(Name::new(shard_index, local));
        }
        let local = u32::try_from(shard.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard: shard_index })?;
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        shard.map.insert(leaked, local);
        shard.strings.push(leaked);
        self.total_count.fetch_add(1, Ordering::Relaxed);
        Ok(Name::new(shard_index, local))
    }

    /// Interns `text`, panicking if the shard is full.
    ///
    /// A shard holds 2^28 strings; attribute parsing cannot reach that, so
    /// callers that do not surface [`InternError`] use this form.
    #[must_use]
    pub fn intern(&self, text: &str) -> Name {
        self.try_intern(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Interns an owned string, reusing its buffer instead of copying.
    pub fn try_intern_owned(&self, text: String) -> Result<Name, InternError> {
        if text.is_empty() {
            return Ok(Name::EMPTY);
        }
        let shard_index = Self::shard_for(&text);
        {
            let shard = self.shards[shard_index].read();
            if let Some(&local) = shard.map.get(text.as_str()) {
                return Ok(Name::new(shard_index, local));
            }
        }
        let mut shard = self.shards[shard_index].write();
        if let Some(&local) = shard.map.get(text.as_str()) {
            return Ok(Name::new(shard_index, local));
        }
        let local = u32::try_from(shard.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard: shard_index })?;
        let leaked: &'static str = Box::leak(text.into_boxed_str());
        shard.map.insert(leaked, local);
        shard.strings.push(leaked);
        self.total_count.fetch_add(1, Ordering::Relaxed);
        Ok(Name::new(shard_index, local))
    }

    /// Owned-string counterpart of [`StringInterner::intern`].
    #[must_use]
    pub fn intern_owned(&self, text: String) -> Name {
        self.try_intern_owned(text).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Resolves a handle back to its string.
    ///
    /// Panics if `name` was not produced by this interner.
    #[must_use]
    pub fn lookup(&self, name: Name) -> &'static str {
        let shard = self.shards[name.shard()].read();
        shard.strings[name.local() as usize]
    }

    /// Number of distinct strings interned so far, including `""`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        StringInterner::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Read-only name resolution, for code that formats or reports on an AST
/// without needing the interning half.
pub trait StringLookup {
    /// Resolves a handle to the string it was interned from.
    fn resolve(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    #[inline]
    fn resolve(&self, name: Name) -> &str {
        self.lookup(name)
    }
}
