use crate::domain::Operation;

/// Message shown when a profile has no operations.
pub const EMPTY_PLACEHOLDER: &str = "No operations yet";

/// Presentation side of the ledger. Receives the filtered, already ordered
/// operations of the active profile after every change or profile switch.
///
/// Implementations show [`EMPTY_PLACEHOLDER`] for an empty slice, and
/// otherwise frame `income` rows as credits and the rest as debits without
/// reordering them.
pub trait Renderer {
    fn render(&mut self, profile: &str, operations: &[Operation]);
}

/// Renderer that remembers what it was last handed. Useful for embedding
/// the ledger behind another UI and for tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(String, Vec<Operation>)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&(String, Vec<Operation>)> {
        self.calls.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, profile: &str, operations: &[Operation]) {
        self.calls.push((profile.to_string(), operations.to_vec()));
    }
}
