mod recommender;

pub use recommender::{RecommendError, Recommender, DEFAULT_RESULT_COUNT, FEATURE_COLUMNS};
