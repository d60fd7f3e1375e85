use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::error::DomainError;
use crate::error::InvariantViolation;

/// Number of distinct 3-cell neighborhoods.
pub const NBHD_COUNT: usize = 8;

/// Rule 30, the usual showcase for chaotic behavior.
pub const RULE_30: Rule = Rule::new(30);

/// # Representation
/// An elementary rule is the byte whose bit `i` is the next state of the neighborhood with index
/// `i`, where a neighborhood `(l, c, r)` has index `l << 2 | c << 1 | r`.
///
/// # Examples
/// ```notrust
/// neighborhood: 111 110 101 100 011 010 001 000
/// rule 30:        0   0   0   1   1   1   1   0
/// rule 204:       1   1   0   0   1   1   0   0
/// ```
///
/// See: https://mathworld.wolfram.com/ElementaryCellularAutomaton.html
#[repr(transparent)]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Rule {
    rule: u8,
}

impl Rule {
    pub const fn new(rule: u8) -> Self {
        Self { rule }
    }

    /// The rule as 8 binary digits, most significant bit first.
    ///
    /// `30` becomes `"00011110"` and `139` becomes `"10001011"`.
    pub fn to_binary(&self) -> String {
        format!("{:08b}", self.rule)
    }

    /// Compute the transition table for the current `Rule`.
    ///
    /// The table is built in a way that indexing into it with a neighborhood index returns the
    /// next state of that neighborhood's center cell.
    pub fn compute_rules(&self) -> TransitionTable {
        let binary = self.to_binary();
        let digits = binary.as_bytes();

        let mut table = [Cell::Dead; NBHD_COUNT];

        for (i, next) in table.iter_mut().enumerate() {
            // digits are MSB first, so neighborhood `i` reads from the right
            *next = Cell::from_bit(digits[NBHD_COUNT - 1 - i] - b'0');
        }

        TransitionTable { table }
    }
}

impl TryFrom<i64> for Rule {
    type Error = DomainError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        u8::try_from(n)
            .map(Rule::new)
            .map_err(|_| DomainError::RuleOutOfRange(n))
    }
}

impl FromStr for Rule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let n: i64 = s
            .parse()
            .map_err(|_| DomainError::NotANumber(s.to_string()))?;

        Rule::try_from(n)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rule)
    }
}

/// A 3-cell window `(left, center, right)`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Neighborhood {
    pub left: Cell,
    pub center: Cell,
    pub right: Cell,
}

impl Neighborhood {
    pub const fn new(left: Cell, center: Cell, right: Cell) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// The neighborhood whose 3-bit key is `i`, e.g. `5` is `(1, 0, 1)`.
    pub fn from_index(i: u8) -> Result<Self, DomainError> {
        if i as usize >= NBHD_COUNT {
            return Err(DomainError::NeighborhoodOutOfRange(i));
        }

        Ok(Self::from_bits(i))
    }

    /// Unpack the low 3 bits of `i`, ignoring the rest.
    const fn from_bits(i: u8) -> Self {
        Self::new(
            Cell::from_bit(i >> 2),
            Cell::from_bit(i >> 1),
            Cell::from_bit(i),
        )
    }

    pub const fn index(&self) -> u8 {
        self.left.bit() << 2 | self.center.bit() << 1 | self.right.bit()
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.center, self.right)
    }
}

/// Next state for each of the 8 neighborhoods, indexed by [`Neighborhood::index`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TransitionTable {
    table: [Cell; NBHD_COUNT],
}

impl TransitionTable {
    pub fn get(&self, nbhd: Neighborhood) -> Result<Cell, InvariantViolation> {
        let i = nbhd.index();

        self.table
            .get(i as usize)
            .copied()
            .ok_or(InvariantViolation::MissingNeighborhood(i))
    }

    /// Every `(neighborhood, next state)` pair, from `000` up to `111`.
    pub fn entries(&self) -> impl Iterator<Item = (Neighborhood, Cell)> + '_ {
        self.table
            .iter()
            .enumerate()
            .map(|(i, &next)| (Neighborhood::from_bits(i as u8), next))
    }
}
