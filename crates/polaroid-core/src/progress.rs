/// Collage processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollageStage {
    Validating,
    Framing,
    Compositing,
}

impl std::fmt::Display for CollageStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validating => write!(f, "Validating input"),
            Self::Framing => write!(f, "Framing photos"),
            Self::Compositing => write!(f, "Compositing page"),
        }
    }
}

/// Progress reporting for collage composition.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage (e.g. photos to frame), if known.
    fn begin_stage(&self, _stage: CollageStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `make_collage` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
