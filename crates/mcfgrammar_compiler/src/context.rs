//! Compilation context.
//!
//! Everything a compiling call needs travels through this object: the
//! read-only registry and the append-only warnings accumulator. The
//! context is returned alongside the rule set rather than living in
//! process-wide state.

use mcfgrammar_foundation::Warning;
use tracing::warn;

use crate::registry::ArgumentTypeRegistry;

/// State threaded through every compiling call.
pub struct CompileContext<'a> {
    registry: &'a ArgumentTypeRegistry,
    warnings: Vec<Warning>,
}

impl<'a> CompileContext<'a> {
    /// Creates a context over a frozen registry.
    #[must_use]
    pub fn new(registry: &'a ArgumentTypeRegistry) -> Self {
        Self {
            registry,
            warnings: Vec::new(),
        }
    }

    /// The shared argument type registry.
    #[must_use]
    pub fn registry(&self) -> &ArgumentTypeRegistry {
        self.registry
    }

    /// Records a recoverable condition. Warnings are append-only; nothing
    /// ever removes or rewrites one.
    pub fn warn(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    /// The warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the context, yielding its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}
