use std::str::FromStr;

use super::classify::PointClassification;
use crate::error::ParseError;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanOp {
    /// `A | B`
    Union,
    /// `A & B`
    Intersect,
    /// `A \ B`
    #[default]
    Subtract,
    /// `B \ A`
    ReverseSubtract,
}

impl BooleanOp {
    /// Traversal direction taken at entry vertices of the subject and clip
    /// rings, `true` meaning forward.
    ///
    /// | Op        | subject | clip |
    /// |-----------|---------|------|
    /// | `A \| B`  | back    | back |
    /// | `A & B`   | fwd     | fwd  |
    /// | `A \ B`   | back    | fwd  |
    ///
    /// `B \ A` runs `A \ B` with the operands swapped.
    #[must_use]
    pub fn entry_flags(self) -> (bool, bool) {
        match self {
            Self::Union => (false, false),
            Self::Intersect => (true, true),
            Self::Subtract | Self::ReverseSubtract => (false, true),
        }
    }

    /// `true` if the operands are exchanged before clipping.
    #[must_use]
    pub fn swaps_operands(self) -> bool {
        self == Self::ReverseSubtract
    }

    /// The operation actually run once operands are in clipping order.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.swaps_operands() {
            Self::Subtract
        } else {
            self
        }
    }
}

impl FromStr for BooleanOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),
            "intersection" => Ok(Self::Intersect),
            "difference" => Ok(Self::Subtract),
            "reversed-diff" => Ok(Self::ReverseSubtract),
            other => Err(ParseError::UnknownOperation(other.to_owned())),
        }
    }
}

/// Which input polygon a result is copied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Subject,
    Clip,
}

/// Picks the results of a boolean operation whose operand boundaries never
/// cross, from how each operand classifies against the other.
///
/// | Layout        | Union   | Intersect | Subtract(A-B) |
/// |---------------|---------|-----------|---------------|
/// | coincident    | A       | A         | none          |
/// | A inside B    | B       | A         | none          |
/// | B inside A    | A       | B         | A (no hole)   |
/// | disjoint      | A, B    | none      | A             |
///
/// `ReverseSubtract` is read as `Subtract` on operands already swapped.
#[allow(clippy::match_same_arms)]
#[must_use]
pub fn select_without_crossings(
    op: BooleanOp,
    a_in_b: PointClassification,
    b_in_a: PointClassification,
) -> Vec<Source> {
    use PointClassification::{Inside, OnBoundary};

    let coincident = a_in_b == OnBoundary || b_in_a == OnBoundary;
    match (op.normalized(), coincident, a_in_b, b_in_a) {
        (BooleanOp::Union, true, _, _) => vec![Source::Subject],
        (BooleanOp::Intersect, true, _, _) => vec![Source::Subject],
        (_, true, _, _) => vec![],

        (BooleanOp::Union, false, Inside, _) => vec![Source::Clip],
        (BooleanOp::Intersect, false, Inside, _) => vec![Source::Subject],
        (_, false, Inside, _) => vec![],

        (BooleanOp::Union, false, _, Inside) => vec![Source::Subject],
        (BooleanOp::Intersect, false, _, Inside) => vec![Source::Clip],
        (_, false, _, Inside) => vec![Source::Subject],

        (BooleanOp::Union, false, _, _) => vec![Source::Subject, Source::Clip],
        (BooleanOp::Intersect, false, _, _) => vec![],
        (_, false, _, _) => vec![Source::Subject],
    }
}
