//! Single-slot conversion caches.
//!
//! Chat messages are often converted many times in a row with the same input
//! (a broadcast sent to every player, for instance). Each entry point keeps
//! the last input's hash and the output computed for it, and returns that
//! output again while the hash stays the same.
//!
//! Inputs are compared by a 64-bit hash only. Two different inputs with the
//! same hash get the first one's output.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use chat_markup::SpanTree;

/// Hashes a cache key.
///
/// Uses the standard library's SipHash with fixed keys, so the same input
/// gives the same fingerprint for the life of the process.
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Holds the output for the most recently converted input.
#[derive(Debug)]
pub struct Slot<V> {
    entry: Option<(u64, Arc<V>)>,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self { entry: None }
    }
}

impl<V> Slot<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored output if it was computed for `hash`.
    pub fn get(&self, hash: u64) -> Option<Arc<V>> {
        match &self.entry {
            Some((stored, value)) if *stored == hash => Some(Arc::clone(value)),
            _ => None,
        }
    }

    /// Returns the output stored for `hash`, or computes and stores it.
    ///
    /// A failed computation leaves the slot unchanged.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        hash: u64,
        compute: impl FnOnce() -> Result<V, E>,
    ) -> Result<Arc<V>, E> {
        if let Some(value) = self.get(hash) {
            log::trace!("conversion cache hit for {hash:#018x}");
            return Ok(value);
        }
        log::trace!("conversion cache miss for {hash:#018x}");
        let value = Arc::new(compute()?);
        self.entry = Some((hash, Arc::clone(&value)));
        Ok(value)
    }

    /// Like [`get_or_try_insert_with`](Self::get_or_try_insert_with) for
    /// computations that cannot fail.
    pub fn get_or_insert_with(&mut self, hash: u64, compute: impl FnOnce() -> V) -> Arc<V> {
        match self.get_or_try_insert_with(hash, || Ok::<V, std::convert::Infallible>(compute())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    /// The hash of the stored entry, if any.
    pub fn stored_hash(&self) -> Option<u64> {
        self.entry.as_ref().map(|(hash, _)| *hash)
    }
}

/// One slot per conversion entry point.
///
/// Access needs `&mut self`. To share a cache between threads, wrap its
/// owner in a lock or give every thread its own converter.
#[derive(Debug, Default)]
pub struct ConversionCache {
    pub strings: Slot<SpanTree>,
    pub rich: Slot<SpanTree>,
    pub plain_lines: Slot<Vec<String>>,
}

impl ConversionCache {
    pub fn new() -> Self {
        Self::default()
    }
}
