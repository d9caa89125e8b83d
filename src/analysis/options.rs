/// Knobs for semantic analysis. The defaults reproduce the plain two-pass
/// behavior with no optional checks enabled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Reject assignments whose target and value have different type variants.
    pub check_assignment_types: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_assignment_types(mut self, enabled: bool) -> Self {
        self.check_assignment_types = enabled;
        self
    }
}
