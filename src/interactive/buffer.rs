//! Symbol-by-symbol guess entry
//!
//! The interactive UI builds a guess one key at a time. The buffer is pure
//! presentation state: it is only turned into a validated guess when the
//! player submits.

use crate::core::Symbol;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    symbols: Vec<Symbol>,
    capacity: usize,
}

impl GuessBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            symbols: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a symbol; returns `false` if the buffer is already full
    pub fn push(&mut self, symbol: Symbol) -> bool {
        if self.is_full() {
            return false;
        }
        self.symbols.push(symbol);
        true
    }

    /// Remove the most recent symbol
    pub fn pop(&mut self) -> Option<Symbol> {
        self.symbols.pop()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.symbols.len() >= self.capacity
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// One token per entered symbol, ready for submission
    #[must_use]
    pub fn tokens(&self) -> Vec<String> {
        self.symbols.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for GuessBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.capacity {
            if i > 0 {
                f.write_str(" ")?;
            }
            match self.symbols.get(i) {
                Some(symbol) => write!(f, "{symbol}")?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_stops_at_capacity() {
        let mut buffer = GuessBuffer::new(2);
        assert!(buffer.push(Symbol::new('R')));
        assert!(buffer.push(Symbol::new('G')));
        assert!(buffer.is_full());
        assert!(!buffer.push(Symbol::new('B')));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn pop_removes_last() {
        let mut buffer = GuessBuffer::new(4);
        buffer.push(Symbol::new('1'));
        buffer.push(Symbol::new('2'));
        assert_eq!(buffer.pop(), Some(Symbol::new('2')));
        assert_eq!(buffer.symbols(), &[Symbol::new('1')]);
        assert_eq!(buffer.pop(), Some(Symbol::new('1')));
        assert_eq!(buffer.pop(), None);
    }

    #[test]
    fn tokens_and_display() {
        let mut buffer = GuessBuffer::new(4);
        buffer.push(Symbol::new('r'));
        buffer.push(Symbol::new('3'));
        assert_eq!(buffer.tokens(), ["R", "3"]);
        assert_eq!(buffer.to_string(), "R 3 _ _");
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = GuessBuffer::new(3);
        buffer.push(Symbol::new('1'));
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 3);
    }
}
