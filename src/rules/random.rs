//! Random index selection for hints and board order
//!
//! Hint generation picks uniformly among equally valid candidates, and boards
//! are shuffled on load. The source of those picks is injected so callers can
//! replay a fixed sequence.

use rand::Rng;
use rand::rngs::ThreadRng;

/// A provider of uniform random indices
pub trait IndexSource {
    /// Return an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Index source backed by a `rand` generator
pub struct RandomIndices<R = ThreadRng> {
    rng: R,
}

impl RandomIndices<ThreadRng> {
    /// Unseeded source using the thread-local generator
    #[must_use]
    pub fn thread() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomIndices<ThreadRng> {
    fn default() -> Self {
        Self::thread()
    }
}

impl<R: Rng> RandomIndices<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RandomIndices<R> {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Index source that replays a fixed script, cycling when exhausted
///
/// Each scripted value is reduced modulo the requested length.
///
/// # Examples
/// ```
/// use connections_plus::rules::{IndexSource, ScriptedIndices};
///
/// let mut indices = ScriptedIndices::new([1, 5]);
/// assert_eq!(indices.next_index(4), 1);
/// assert_eq!(indices.next_index(4), 1); // 5 % 4
/// assert_eq!(indices.next_index(3), 1); // cycled back to 1
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedIndices {
    script: Vec<usize>,
    position: usize,
}

impl ScriptedIndices {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            position: 0,
        }
    }
}

impl IndexSource for ScriptedIndices {
    fn next_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value % len
    }
}

/// Pick one element uniformly
///
/// `None` from an empty slice, or when the source answers out of range.
pub fn pick<'a, T>(source: &mut impl IndexSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(source.next_index(items.len()))
    }
}

/// Shuffle a slice in place (Fisher-Yates)
pub fn shuffle<T>(source: &mut impl IndexSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = source.next_index(i + 1).min(i);
        items.swap(i, j);
    }
}
