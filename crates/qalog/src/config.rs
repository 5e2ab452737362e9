/// How [`reconciled_kills`](crate::stats::reconciled_kills_with) treats
/// players who never died to the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReconcileMode {
    /// Only players present in both the kill and environment-death maps are
    /// reported. Players who only killed other players are left out.
    #[default]
    Literal,
    /// Players without environment deaths keep their raw kill count.
    PassThrough,
}

/// Aggregation settings, built once by the caller and passed by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub reconcile: ReconcileMode,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reconcile(mut self, reconcile: ReconcileMode) -> Self {
        self.reconcile = reconcile;
        self
    }
}
