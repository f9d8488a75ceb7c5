//! Code symbols and the alphabets they are drawn from
//!
//! Three fixed alphabets exist:
//! - Numeric: digits `1`-`6`
//! - Color: `R G B Y P O` (red, green, blue, yellow, purple, orange)
//! - Mixed: the union of both
//!
//! The numeric and color sets are disjoint, so a Mixed alphabet accepts a symbol
//! iff either subset does.

use std::fmt;

/// Numeric symbols, in palette order
pub const NUMERIC_SYMBOLS: [Symbol; 6] = [
    Symbol('1'),
    Symbol('2'),
    Symbol('3'),
    Symbol('4'),
    Symbol('5'),
    Symbol('6'),
];

/// Color symbols, in palette order
pub const COLOR_SYMBOLS: [Symbol; 6] = [
    Symbol('R'),
    Symbol('G'),
    Symbol('B'),
    Symbol('Y'),
    Symbol('P'),
    Symbol('O'),
];

/// A single code symbol
///
/// Symbols are opaque to scoring: only equality matters. The wrapped character
/// is always in canonical (uppercase) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(char);

impl Symbol {
    /// Create a symbol from any character, folding it to canonical case
    ///
    /// No alphabet check happens here; see [`Alphabet::contains`].
    #[inline]
    #[must_use]
    pub const fn new(ch: char) -> Self {
        Self(ch.to_ascii_uppercase())
    }

    /// The canonical character for this symbol
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Whether this symbol belongs to the numeric set
    #[must_use]
    pub fn is_numeric(self) -> bool {
        NUMERIC_SYMBOLS.contains(&self)
    }

    /// Whether this symbol belongs to the color set
    #[must_use]
    pub fn is_color(self) -> bool {
        COLOR_SYMBOLS.contains(&self)
    }

    /// Human-readable color name for color symbols
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Symbol;
    ///
    /// assert_eq!(Symbol::new('p').color_name(), Some("Purple"));
    /// assert_eq!(Symbol::new('3').color_name(), None);
    /// ```
    #[must_use]
    pub const fn color_name(self) -> Option<&'static str> {
        match self.0 {
            'R' => Some("Red"),
            'G' => Some("Green"),
            'B' => Some("Blue"),
            'Y' => Some("Yellow"),
            'P' => Some("Purple"),
            'O' => Some("Orange"),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game mode, selecting which symbols are legal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Alphabet {
    /// Digits 1-6
    #[default]
    Numeric,
    /// Six color letters
    Color,
    /// Digits and colors together
    Mixed,
}

impl Alphabet {
    /// All modes, in menu order
    pub const ALL: [Self; 3] = [Self::Numeric, Self::Color, Self::Mixed];

    /// Check whether a symbol is legal in this alphabet
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Alphabet, Symbol};
    ///
    /// assert!(Alphabet::Numeric.contains(Symbol::new('4')));
    /// assert!(!Alphabet::Numeric.contains(Symbol::new('R')));
    /// assert!(Alphabet::Mixed.contains(Symbol::new('r')));
    /// ```
    #[must_use]
    pub fn contains(self, symbol: Symbol) -> bool {
        match self {
            Self::Numeric => symbol.is_numeric(),
            Self::Color => symbol.is_color(),
            Self::Mixed => symbol.is_numeric() || symbol.is_color(),
        }
    }

    /// Every legal symbol, numeric before color
    #[must_use]
    pub fn symbols(self) -> Vec<Symbol> {
        self.subsets().iter().flat_map(|set| set.iter().copied()).collect()
    }

    /// The disjoint sub-alphabets this mode is built from
    ///
    /// Code generation flips between these before picking a symbol.
    #[must_use]
    pub const fn subsets(self) -> &'static [&'static [Symbol]] {
        match self {
            Self::Numeric => &[&NUMERIC_SYMBOLS],
            Self::Color => &[&COLOR_SYMBOLS],
            Self::Mixed => &[&NUMERIC_SYMBOLS, &COLOR_SYMBOLS],
        }
    }

    /// Short name used on the command line and in menus
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Numeric => "Numbers Only",
            Self::Color => "Colors Only",
            Self::Mixed => "Mixed (Numbers and Colors)",
        }
    }

    /// One-line description of the legal input
    #[must_use]
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Numeric => "digits 1-6",
            Self::Color => "colors R G B Y P O",
            Self::Mixed => "digits 1-6 and colors R G B Y P O",
        }
    }

    /// Map a 1-based menu choice to a mode
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Numeric),
            "2" => Some(Self::Color),
            "3" => Some(Self::Mixed),
            _ => None,
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_case_folded() {
        assert_eq!(Symbol::new('r'), Symbol::new('R'));
        assert_eq!(Symbol::new('g').as_char(), 'G');
        assert_eq!(Symbol::new('5').as_char(), '5');
    }

    #[test]
    fn numeric_alphabet_membership() {
        for ch in '1'..='6' {
            assert!(Alphabet::Numeric.contains(Symbol::new(ch)));
        }
        assert!(!Alphabet::Numeric.contains(Symbol::new('0')));
        assert!(!Alphabet::Numeric.contains(Symbol::new('7')));
        assert!(!Alphabet::Numeric.contains(Symbol::new('R')));
    }

    #[test]
    fn color_alphabet_membership() {
        for ch in ['R', 'G', 'B', 'Y', 'P', 'O'] {
            assert!(Alphabet::Color.contains(Symbol::new(ch)));
        }
        // Letters outside the palette are rejected
        assert!(!Alphabet::Color.contains(Symbol::new('A')));
        assert!(!Alphabet::Color.contains(Symbol::new('1')));
    }

    #[test]
    fn mixed_is_union_of_subsets() {
        for symbol in NUMERIC_SYMBOLS.iter().chain(COLOR_SYMBOLS.iter()) {
            assert!(Alphabet::Mixed.contains(*symbol));
        }
        assert!(!Alphabet::Mixed.contains(Symbol::new('X')));
        assert!(!Alphabet::Mixed.contains(Symbol::new('9')));
    }

    #[test]
    fn symbols_sizes() {
        assert_eq!(Alphabet::Numeric.symbols().len(), 6);
        assert_eq!(Alphabet::Color.symbols().len(), 6);
        assert_eq!(Alphabet::Mixed.symbols().len(), 12);
    }

    #[test]
    fn subsets_are_disjoint() {
        for n in NUMERIC_SYMBOLS {
            assert!(!COLOR_SYMBOLS.contains(&n));
        }
    }

    #[test]
    fn menu_choices() {
        assert_eq!(Alphabet::from_menu_choice("1"), Some(Alphabet::Numeric));
        assert_eq!(Alphabet::from_menu_choice(" 2 "), Some(Alphabet::Color));
        assert_eq!(Alphabet::from_menu_choice("3"), Some(Alphabet::Mixed));
        assert_eq!(Alphabet::from_menu_choice("4"), None);
        assert_eq!(Alphabet::from_menu_choice(""), None);
    }

    #[test]
    fn color_names() {
        let names: Vec<_> = COLOR_SYMBOLS.iter().filter_map(|s| s.color_name()).collect();
        assert_eq!(names, ["Red", "Green", "Blue", "Yellow", "Purple", "Orange"]);
    }
}
