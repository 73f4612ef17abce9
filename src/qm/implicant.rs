//! Implicant: the ternary product-term representation used throughout
//! the Quine-McCluskey engine

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// State of one position in an implicant
///
/// The derived order (`Zero < One < DontCare`) is the tie-breaking
/// order used everywhere a deterministic choice among implicants or
/// covers is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitState {
    Zero,
    One,
    DontCare,
}

/// A product term over the canonical variable order, MSB first
///
/// A concrete implicant (no don't-cares) denotes a single minterm; a
/// don't-care at position i stands for both assignments of variable i.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Implicant {
    bits: Vec<BitState>,
}

impl Implicant {
    pub fn new(bits: Vec<BitState>) -> Self {
        Self { bits }
    }

    /// Build the concrete implicant of a single minterm.
    pub fn from_minterm(minterm: usize, variables: usize) -> Self {
        let mut bits = Vec::with_capacity(variables);
        for i in 0..variables {
            if (minterm >> i) & 1 == 1 {
                bits.push(BitState::One);
            } else {
                bits.push(BitState::Zero);
            }
        }
        bits.reverse(); // MSB first
        Self { bits }
    }

    pub fn bits(&self) -> &[BitState] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Group key: the count of concrete `One` positions. Don't-cares do
    /// not count.
    pub fn ones(&self) -> usize {
        self.bits
            .iter()
            .filter(|&&bit| bit == BitState::One)
            .count()
    }

    /// Number of non-don't-care positions, i.e. the literal cost of the
    /// term this implicant denotes.
    pub fn literal_count(&self) -> usize {
        self.bits
            .iter()
            .filter(|&&bit| bit != BitState::DontCare)
            .count()
    }

    /// Attempt the QMC adjacency merge.
    ///
    /// Succeeds iff the two implicants differ in exactly one position
    /// and both sides are concrete there. A don't-care facing a
    /// concrete value at any position forbids the merge.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.bits.len() != other.bits.len() {
            return None;
        }

        let mut diff_count = 0;
        let mut combined = Vec::with_capacity(self.bits.len());

        for (&a, &b) in self.bits.iter().zip(&other.bits) {
            if a == b {
                combined.push(a);
            } else if a == BitState::DontCare || b == BitState::DontCare {
                return None;
            } else {
                diff_count += 1;
                if diff_count > 1 {
                    return None;
                }
                combined.push(BitState::DontCare);
            }
        }

        if diff_count == 1 {
            Some(Implicant { bits: combined })
        } else {
            None
        }
    }

    /// Position-wise compatibility test: the implicant covers a minterm
    /// iff every position agrees with the minterm's bit or holds
    /// don't-care.
    pub fn covers(&self, minterm: usize) -> bool {
        let n = self.bits.len();
        for (i, &bit) in self.bits.iter().enumerate() {
            let value = (minterm >> (n - 1 - i)) & 1 == 1;
            match bit {
                BitState::One => {
                    if !value {
                        return false;
                    }
                }
                BitState::Zero => {
                    if value {
                        return false;
                    }
                }
                BitState::DontCare => {}
            }
        }
        true
    }

    /// Expand the don't-cares into the full ascending list of covered
    /// minterms.
    pub fn covered_minterms(&self) -> Vec<usize> {
        let n = self.bits.len();
        let mut minterms = vec![0usize];
        for (i, &bit) in self.bits.iter().enumerate() {
            let weight = 1usize << (n - 1 - i);
            match bit {
                BitState::One => {
                    for minterm in &mut minterms {
                        *minterm += weight;
                    }
                }
                BitState::Zero => {}
                BitState::DontCare => {
                    let raised: Vec<usize> =
                        minterms.iter().map(|minterm| minterm + weight).collect();
                    minterms.extend(raised);
                }
            }
        }
        minterms.sort_unstable();
        minterms
    }
}

impl fmt::Display for Implicant {
    /// `1`/`0` per concrete position, `-` for don't-care, e.g. `10--`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            let ch = match bit {
                BitState::Zero => '0',
                BitState::One => '1',
                BitState::DontCare => '-',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid implicant character: {0:?}")]
pub struct ParseImplicantError(pub char);

impl FromStr for Implicant {
    type Err = ParseImplicantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for ch in s.chars() {
            bits.push(match ch {
                '0' => BitState::Zero,
                '1' => BitState::One,
                '-' => BitState::DontCare,
                other => return Err(ParseImplicantError(other)),
            });
        }
        Ok(Implicant { bits })
    }
}
