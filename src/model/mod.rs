//! Career category model: corpus loading, vectorization, classification,
//! and the fit-once-at-start pipeline

pub mod classifier;
pub mod corpus;
pub mod pipeline;
pub mod vectorizer;
