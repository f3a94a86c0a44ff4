pub mod backoff;
pub mod estimator;
pub mod history_index;
pub mod model;
pub mod smoothing;
pub mod writer;
