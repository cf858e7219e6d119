//! Fit-once-at-start training pipeline and the shared inference path

use crate::config::TrainingConfig;
use crate::error::{Result, ResumeClassifierError};
use crate::model::classifier::{ClassifierParams, FittedClassifier};
use crate::model::corpus::TrainingCorpus;
use crate::model::vectorizer::FittedVectorizer;
use log::{info, warn};

/// The fitted model artifacts, constructed once and never mutated, so they
/// can be shared read-only across any number of concurrent predictions.
#[derive(Debug, Clone)]
pub struct FittedModel {
    pub vectorizer: FittedVectorizer,
    pub classifier: FittedClassifier,
}

/// Published model state. Training failures degrade to `Unavailable`
/// instead of aborting the process; skill extraction keeps working even
/// when classification is broken.
#[derive(Debug, Clone)]
pub enum ModelState {
    Ready(FittedModel),
    Unavailable { reason: String },
}

impl ModelState {
    /// Runs the whole training pipeline: load corpus, validate, fit the
    /// vectorizer, fit the classifier, publish. Call this once, before any
    /// inference traffic; every failure is caught and reported as the
    /// unavailable state.
    pub fn train(config: &TrainingConfig) -> ModelState {
        match Self::try_train(config) {
            Ok(model) => {
                info!(
                    "Model trained: {} features, {} categories",
                    model.vectorizer.vocabulary_size(),
                    model.classifier.labels().len()
                );
                ModelState::Ready(model)
            }
            Err(e) => {
                warn!("Model training failed, classification disabled: {}", e);
                ModelState::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn try_train(config: &TrainingConfig) -> Result<FittedModel> {
        let corpus = TrainingCorpus::load(&config.corpus_path, config)?;
        info!(
            "Loaded training corpus: {} rows from {}",
            corpus.len(),
            config.corpus_path.display()
        );

        let vectorizer =
            FittedVectorizer::fit(&corpus.texts, config.ngram_max, config.max_features);
        let features: Vec<Vec<f64>> = corpus
            .texts
            .iter()
            .map(|text| vectorizer.transform(text))
            .collect();

        let params = ClassifierParams {
            max_iterations: config.max_iterations,
            learning_rate: config.learning_rate,
            l2_penalty: config.l2_penalty,
            tolerance: config.tolerance,
        };
        let classifier = FittedClassifier::fit(&features, &corpus.labels, &params)?;

        Ok(FittedModel {
            vectorizer,
            classifier,
        })
    }

    /// Predicts the career category for a text. Fails fast with
    /// `ModelUnavailable` when training never succeeded; the numeric path
    /// is never touched in that case.
    pub fn predict(&self, text: &str) -> Result<String> {
        match self {
            ModelState::Ready(model) => {
                let features = model.vectorizer.transform(text);
                Ok(model.classifier.predict(&features).to_string())
            }
            ModelState::Unavailable { reason } => {
                Err(ResumeClassifierError::ModelUnavailable(reason.clone()))
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}
