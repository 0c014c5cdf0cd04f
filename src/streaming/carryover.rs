//! Holding area for a line cut off at the end of a read window.

use super::buffers::DEFAULT_CARRYOVER_CAPACITY;

/// Owned copy of a partial line waiting for the rest of its bytes.
///
/// The read window is overwritten by the next read, so the fragment has to
/// be copied out. A line longer than several windows accumulates here until
/// its terminator arrives.
#[derive(Debug, Default)]
pub struct CarryoverBuffer {
    pending: Vec<u8>,
}

impl CarryoverBuffer {
    pub fn new() -> Self {
        Self {
            pending: Vec::with_capacity(DEFAULT_CARRYOVER_CAPACITY),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Store a truncated line fragment.
    #[inline]
    pub fn hold(&mut self, fragment: &[u8]) {
        self.pending.extend_from_slice(fragment);
    }

    /// Complete a line with `tail`, pass the whole line to `f` and clear.
    ///
    /// Without a pending fragment `tail` is passed through uncopied.
    #[inline]
    pub fn complete<T>(&mut self, tail: &[u8], f: impl FnOnce(&[u8]) -> T) -> T {
        if self.pending.is_empty() {
            return f(tail);
        }
        self.pending.extend_from_slice(tail);
        let result = f(&self.pending);
        self.pending.clear();
        result
    }

    /// Drop any pending fragment, returning how many bytes were discarded.
    pub fn discard(&mut self) -> usize {
        let len = self.pending.len();
        self.pending.clear();
        len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_without_pending() {
        let mut carry = CarryoverBuffer::new();
        let line = carry.complete(b"abc", |line| line.to_vec());
        assert_eq!(line, b"abc");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_complete_joins_and_clears() {
        let mut carry = CarryoverBuffer::new();
        carry.hold(b"12");
        carry.hold(b"34");
        assert_eq!(carry.len(), 4);

        let line = carry.complete(b"5\t6", |line| line.to_vec());
        assert_eq!(line, b"12345\t6");
        assert!(carry.is_empty());
    }

    #[test]
    fn test_discard() {
        let mut carry = CarryoverBuffer::new();
        carry.hold(b"tail");
        assert_eq!(carry.discard(), 4);
        assert!(carry.is_empty());
        assert_eq!(carry.discard(), 0);
    }
}
