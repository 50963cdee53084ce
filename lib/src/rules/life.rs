//! Totalistic Life-like rules.

use crate::error::Error;
use ca_rules::ParseLife;
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// The default is Conway's Game of Life, `B3/S23`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Life {
    /// `birth[n]` is whether a dead cell with `n` living neighbors
    /// becomes alive.
    birth: [bool; 9],
    /// `survival[n]` is whether a living cell with `n` living neighbors
    /// stays alive.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Numbers larger than 8 are ignored.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in b.iter().filter(|&&n| n <= 8) {
            birth[n as usize] = true;
        }
        for &n in s.iter().filter(|&&n| n <= 8) {
            survival[n as usize] = true;
        }
        Life { birth, survival }
    }

    /// Whether the rule contains `B0`.
    ///
    /// Such a rule would turn the whole unbounded background alive.
    #[inline]
    pub const fn has_b0(&self) -> bool {
        self.birth[0]
    }

    /// The state of a cell in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        let count = count as usize;
        if alive {
            count <= 8 && self.survival[count]
        } else {
            count <= 8 && self.birth[count]
        }
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::new(&[3], &[2, 3])
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        if rule.has_b0() {
            Err(Error::B0Error)
        } else {
            Ok(rule)
        }
    }
}

impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

impl Debug for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Life({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway() {
        let rule = Life::default();
        assert_eq!(rule.to_string(), "B3/S23");
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(false, 2));
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));
        for n in [0, 1, 4, 5, 8] {
            assert!(!rule.next_state(true, n));
        }
    }

    #[test]
    fn parse() -> Result<(), Error> {
        assert_eq!("B3/S23".parse::<Life>()?, Life::default());
        assert_eq!("23/3".parse::<Life>()?, Life::default());
        assert_eq!("B36/S23".parse::<Life>()?.to_string(), "B36/S23");
        assert_eq!("B01/S23".parse::<Life>(), Err(Error::B0Error));
        assert!(matches!(
            "not a rule".parse::<Life>(),
            Err(Error::ParseRuleError(_))
        ));
        Ok(())
    }
}
