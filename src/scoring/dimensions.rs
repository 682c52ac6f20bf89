//! The eight scoring dimensions and a fixed-size vector keyed by them

use crate::catalog::ComponentWeights;
use std::fmt;
use std::ops::{AddAssign, Index, IndexMut};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    BuildSpeed,
    Complexity,
    Scalability,
    Cost,
    OpsBurden,
    LockIn,
    Reliability,
    AiReadiness,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::BuildSpeed,
        Dimension::Complexity,
        Dimension::Scalability,
        Dimension::Cost,
        Dimension::OpsBurden,
        Dimension::LockIn,
        Dimension::Reliability,
        Dimension::AiReadiness,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Name of the raw aggregate (`cost`, `lockIn`, ...)
    pub fn raw_key(self) -> &'static str {
        match self {
            Dimension::BuildSpeed => "buildSpeed",
            Dimension::Complexity => "complexity",
            Dimension::Scalability => "scalability",
            Dimension::Cost => "cost",
            Dimension::OpsBurden => "opsBurden",
            Dimension::LockIn => "lockIn",
            Dimension::Reliability => "reliability",
            Dimension::AiReadiness => "aiReadiness",
        }
    }

    /// Name of the reported score (`estimatedCost`, `lockInRisk`, ...)
    pub fn output_key(self) -> &'static str {
        match self {
            Dimension::Cost => "estimatedCost",
            Dimension::LockIn => "lockInRisk",
            other => other.raw_key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::BuildSpeed => "Build speed",
            Dimension::Complexity => "Complexity",
            Dimension::Scalability => "Scalability",
            Dimension::Cost => "Estimated cost",
            Dimension::OpsBurden => "Ops burden",
            Dimension::LockIn => "Lock-in risk",
            Dimension::Reliability => "Reliability",
            Dimension::AiReadiness => "AI readiness",
        }
    }

    /// Lower raw values are better for these, so the score is `10 - raw`
    pub fn is_inverted(self) -> bool {
        matches!(
            self,
            Dimension::Complexity | Dimension::OpsBurden | Dimension::LockIn
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.output_key())
    }
}

impl FromStr for Dimension {
    type Err = String;

    /// Accepts raw or output names in camelCase, snake_case or kebab-case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Dimension::ALL
            .iter()
            .copied()
            .find(|d| {
                d.raw_key().eq_ignore_ascii_case(&folded)
                    || d.output_key().eq_ignore_ascii_case(&folded)
            })
            .ok_or_else(|| format!("unknown dimension '{}'", s))
    }
}

/// One value per dimension
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DimensionVector([f64; 8]);

impl DimensionVector {
    pub fn splat(value: f64) -> Self {
        Self([value; 8])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        Dimension::ALL.iter().map(move |&d| (d, self[d]))
    }
}

impl From<&ComponentWeights> for DimensionVector {
    fn from(w: &ComponentWeights) -> Self {
        Self(w.as_array())
    }
}

impl Index<Dimension> for DimensionVector {
    type Output = f64;

    fn index(&self, d: Dimension) -> &f64 {
        &self.0[d.index()]
    }
}

impl IndexMut<Dimension> for DimensionVector {
    fn index_mut(&mut self, d: Dimension) -> &mut f64 {
        &mut self.0[d.index()]
    }
}

impl AddAssign for DimensionVector {
    fn add_assign(&mut self, other: Self) {
        for d in Dimension::ALL {
            self[d] += other[d];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension_names() {
        assert_eq!("lockIn".parse::<Dimension>(), Ok(Dimension::LockIn));
        assert_eq!("lock_in_risk".parse::<Dimension>(), Ok(Dimension::LockIn));
        assert_eq!("estimated-cost".parse::<Dimension>(), Ok(Dimension::Cost));
        assert_eq!("cost".parse::<Dimension>(), Ok(Dimension::Cost));
        assert!("speed".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_vector_indexing() {
        let mut v = DimensionVector::default();
        v[Dimension::Cost] += 20.0;
        v += DimensionVector::splat(1.0);
        assert_eq!(v[Dimension::Cost], 21.0);
        assert_eq!(v[Dimension::BuildSpeed], 1.0);
    }
}
