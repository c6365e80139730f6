// Strongly-typed IR for codegen. No text here.

/// One `if constexpr (arity == k)` branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub arity: u32,
    pub bindings: Vec<String>,     // p1..pk, declaration order
}

/// Final branch rejecting every arity the cases don't cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overflow {
    pub threshold: u64,            // bound + 1, fits even for bound == u32::MAX
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub bound: u32,
    pub cases: Vec<Case>,          // arity 0..=bound, ascending
    pub overflow: Overflow,
}

impl Case {
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Dispatch {
    /// Cases plus the overflow branch.
    pub fn branch_count(&self) -> usize {
        self.cases.len() + 1
    }
}
