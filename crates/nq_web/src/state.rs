use nq_core::Dataset;

/// Shared request state: just the immutable dataset handle, injected at
/// startup so the router can be exercised with fabricated datasets.
pub struct AppState {
    pub dataset: Dataset,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}
