//! Input alphabets.

use std::fmt;

/// Fixed set of input symbols.
///
/// The symbols are sorted and deduplicated on construction, which backs
/// membership tests with a binary search. The alphabet never changes after
/// it is built.
///
/// # Example
///
/// ```rust
/// use finite_automaton::Alphabet;
///
/// let alphabet = Alphabet::new("2101".chars());
/// assert_eq!(alphabet.symbols(), &['0', '1', '2']);
/// assert!(alphabet.contains('2'));
/// assert!(!alphabet.contains('3'));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from any symbols, in any order, duplicates allowed.
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut symbols: Vec<char> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// The canonical sorted symbols.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Membership test by binary search over the sorted symbols.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.binary_search(&symbol).is_ok()
    }

    /// Check that every character of `input` belongs to the alphabet.
    pub fn accepts(&self, input: &str) -> bool {
        self.first_foreign(input).is_none()
    }

    /// Find the first character of `input` outside the alphabet, with its
    /// character position.
    pub fn first_foreign(&self, input: &str) -> Option<(usize, char)> {
        input
            .chars()
            .enumerate()
            .find(|(_, symbol)| !self.contains(*symbol))
    }

    /// Iterate the symbols in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl FromIterator<char> for Alphabet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.chars())
    }
}

impl From<&[char]> for Alphabet {
    fn from(symbols: &[char]) -> Self {
        Self::new(symbols.iter().copied())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{symbol}")?;
        }
        f.write_str("}")
    }
}
