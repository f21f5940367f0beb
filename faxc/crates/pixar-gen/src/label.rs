//! Label allocation: a monotone counter per code-generator instance,
//! replacing the source's string-interpolated labels (`.WHILE_START`)
//! that collide once loops nest (§9 "Label and slot counters").

use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// A function's own entry label, `.name`, rather than a generated one.
    pub fn named(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.0)
    }
}

/// Hands out fresh `.L<n>` labels. A plain `Cell` counter: one `Emitter`
/// compiles one program on one thread, start to finish.
pub struct LabelAllocator {
    counter: Cell<u32>,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self { counter: Cell::new(0) }
    }

    pub fn fresh(&self) -> Label {
        let n = self.counter.get();
        self.counter.set(n + 1);
        Label(format!("L{n}"))
    }
}

impl Default for LabelAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_labels_never_repeat() {
        let labels = LabelAllocator::new();
        let a = labels.fresh();
        let b = labels.fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn function_labels_use_the_function_name_verbatim() {
        assert_eq!(Label::named("add").to_string(), ".add");
    }

    #[test]
    fn generated_labels_render_with_a_leading_dot() {
        let labels = LabelAllocator::new();
        assert_eq!(labels.fresh().to_string(), ".L0");
    }
}
