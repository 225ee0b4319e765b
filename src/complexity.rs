#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;
use tabled::Tabled;

use crate::uf::Algorithm;

/// Time complexity of one operation of a union-find strategy.
#[derive(Tabled, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cost {
    #[tabled(rename = "Operation")]
    /// * `op`: the name of the operation
    pub op:      &'static str,
    #[tabled(rename = "Complexity")]
    /// * `value`: the order of growth, in terms of the number of sites N
    pub value:   &'static str,
    #[tabled(rename = "Comment")]
    /// * `comment`: notes on where the cost comes from, possibly empty
    pub comment: &'static str,
}

impl Cost {
    /// Creates a cost row without a comment.
    const fn new(op: &'static str, value: &'static str) -> Self {
        Self {
            op,
            value,
            comment: "",
        }
    }

    /// Attaches a comment to a cost row.
    const fn with_comment(self, comment: &'static str) -> Self {
        Self { comment, ..self }
    }
}

/// Costs of [`crate::uf::QuickFind`]
static QUICK_FIND: [Cost; 5] = [
    Cost::new("initialize", "O(N)"),
    Cost::new("union", "O(N)").with_comment("rewrites the id of every site in p's component"),
    Cost::new("find", "O(1)"),
    Cost::new("connected", "O(1)"),
    Cost::new("process N points", "O(N^2)"),
];

/// Costs of [`crate::uf::QuickUnion`]
static QUICK_UNION: [Cost; 5] = [
    Cost::new("initialize", "O(N)"),
    Cost::new("union", "O(N)").with_comment("includes the cost of finding the root"),
    Cost::new("find", "O(N)")
        .with_comment("worst case, trees can get tall and start to resemble a list"),
    Cost::new("connected", "O(N)"),
    Cost::new("process N points", "O(N^2)"),
];

/// Costs of [`crate::uf::WeightedQuickUnion`]
static WEIGHTED: [Cost; 5] = [
    Cost::new("initialize", "O(N)"),
    Cost::new("union", "O(lg N)").with_comment("includes finding both roots"),
    Cost::new("find", "O(lg N)").with_comment("path halving keeps trees nearly flat"),
    Cost::new("connected", "O(lg N)"),
    Cost::new("process N points", "O(N lg N)"),
];

impl Algorithm {
    /// Cost table of this strategy, one row per operation.
    pub fn costs(&self) -> &'static [Cost] {
        match self {
            Algorithm::QuickFind => &QUICK_FIND,
            Algorithm::QuickUnion => &QUICK_UNION,
            Algorithm::Weighted => &WEIGHTED,
        }
    }

    /// Looks up the cost of a single operation.
    pub fn cost_of(&self, op: &str) -> Option<&'static Cost> {
        self.costs().iter().find(|cost| cost.op == op)
    }
}
