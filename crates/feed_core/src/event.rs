/// One security observation reported by an agent.
///
/// Events are value objects: no server-assigned identity, no lifecycle.
/// A successful poll wholly replaces the previous list, never merges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Hostname of the reporting agent; not required to be unique.
    pub hostname: String,
    /// ISO-8601 timestamp as received; formatted only at presentation time.
    pub timestamp: String,
    /// Short classification string, e.g. "PROCESS_CREATION".
    pub event_type: String,
    /// Free-text description.
    pub details: String,
}
