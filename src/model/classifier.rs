//! One-vs-rest logistic regression over TF-IDF feature vectors

use crate::error::{Result, ResumeClassifierError};
use log::debug;

#[derive(Debug, Clone)]
pub struct ClassifierParams {
    pub max_iterations: usize,
    pub learning_rate: f64,
    pub l2_penalty: f64,
    pub tolerance: f64,
}

/// Learned coefficients for every category label. Immutable after fitting;
/// the only way to change it is a full refit over the entire corpus.
#[derive(Debug, Clone)]
pub struct FittedClassifier {
    labels: Vec<String>,
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl FittedClassifier {
    /// Trains one linear decision boundary per distinct label via batch
    /// gradient descent, bounded at `max_iterations` per label. A label
    /// whose optimizer does not reach `tolerance` within that bound fails
    /// the whole fit with `TrainingDivergence`.
    pub fn fit(features: &[Vec<f64>], labels: &[String], params: &ClassifierParams) -> Result<Self> {
        if features.len() != labels.len() {
            return Err(ResumeClassifierError::InvalidInput(format!(
                "Feature rows ({}) and labels ({}) do not match",
                features.len(),
                labels.len()
            )));
        }

        // Sorted label set makes the fit, and any argmax tie later,
        // deterministic
        let mut label_set: Vec<String> = labels.to_vec();
        label_set.sort();
        label_set.dedup();

        let n_features = features.first().map(|f| f.len()).unwrap_or(0);
        let mut weights = Vec::with_capacity(label_set.len());
        let mut biases = Vec::with_capacity(label_set.len());
        let mut diverged = Vec::new();

        for label in &label_set {
            let targets: Vec<f64> = labels
                .iter()
                .map(|l| if l == label { 1.0 } else { 0.0 })
                .collect();

            match fit_binary(features, &targets, n_features, params) {
                Some((w, b, iterations)) => {
                    debug!("Label '{}' converged after {} iterations", label, iterations);
                    weights.push(w);
                    biases.push(b);
                }
                None => diverged.push(label.clone()),
            }
        }

        if !diverged.is_empty() {
            return Err(ResumeClassifierError::TrainingDivergence(format!(
                "No convergence within {} iterations for: {}",
                params.max_iterations,
                diverged.join(", ")
            )));
        }

        Ok(Self {
            labels: label_set,
            weights,
            biases,
        })
    }

    /// Scores the vector against every label boundary and returns the
    /// highest-scoring label. Deterministic for a fixed model and input;
    /// exact ties keep the earlier label in sorted order.
    pub fn predict(&self, features: &[f64]) -> &str {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (idx, (w, b)) in self.weights.iter().zip(&self.biases).enumerate() {
            let score = dot(w, features) + b;
            if score > best_score {
                best = idx;
                best_score = score;
            }
        }
        &self.labels[best]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Regularized logistic regression for a single label. Returns the
/// coefficients and the iteration count, or None when the bound runs out
/// before the largest coefficient update drops below tolerance.
fn fit_binary(
    features: &[Vec<f64>],
    targets: &[f64],
    n_features: usize,
    params: &ClassifierParams,
) -> Option<(Vec<f64>, f64, usize)> {
    let n_samples = features.len() as f64;
    let mut weights = vec![0.0; n_features];
    let mut bias = 0.0;

    for iteration in 0..params.max_iterations {
        let mut grad_w = vec![0.0; n_features];
        let mut grad_b = 0.0;

        for (x, &t) in features.iter().zip(targets) {
            let error = sigmoid(dot(&weights, x) + bias) - t;
            for (g, &xi) in grad_w.iter_mut().zip(x) {
                *g += error * xi;
            }
            grad_b += error;
        }

        let mut max_update: f64 = 0.0;
        for (w, g) in weights.iter_mut().zip(&grad_w) {
            // L2 penalty keeps the optimum finite on separable corpora
            let update = params.learning_rate * (g / n_samples + params.l2_penalty * *w);
            *w -= update;
            max_update = max_update.max(update.abs());
        }
        let bias_update = params.learning_rate * grad_b / n_samples;
        bias -= bias_update;
        max_update = max_update.max(bias_update.abs());

        if max_update < params.tolerance {
            return Some((weights, bias, iteration + 1));
        }
    }

    None
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::vectorizer::FittedVectorizer;

    fn params() -> ClassifierParams {
        ClassifierParams {
            max_iterations: 1500,
            learning_rate: 1.0,
            l2_penalty: 0.1,
            tolerance: 1e-6,
        }
    }

    fn fitted_sample() -> (FittedVectorizer, FittedClassifier) {
        let texts = vec![
            "Python programming, machine learning, data analysis".to_string(),
            "Web development, HTML, CSS, JavaScript".to_string(),
        ];
        let labels = vec!["Data Science".to_string(), "Web Developer".to_string()];

        let vectorizer = FittedVectorizer::fit(&texts, 3, 10_000);
        let features: Vec<Vec<f64>> = texts.iter().map(|t| vectorizer.transform(t)).collect();
        let classifier = FittedClassifier::fit(&features, &labels, &params()).unwrap();
        (vectorizer, classifier)
    }

    #[test]
    fn test_two_label_separation() {
        let (vectorizer, classifier) = fitted_sample();

        let query = vectorizer.transform("I love Python and machine learning");
        assert_eq!(classifier.predict(&query), "Data Science");

        let query = vectorizer.transform("building pages with HTML and CSS");
        assert_eq!(classifier.predict(&query), "Web Developer");
    }

    #[test]
    fn test_predict_is_deterministic() {
        let (vectorizer, classifier) = fitted_sample();
        let query = vectorizer.transform("JavaScript and web development");

        let first = classifier.predict(&query).to_string();
        for _ in 0..10 {
            assert_eq!(classifier.predict(&query), first);
        }
    }

    #[test]
    fn test_labels_are_sorted_and_deduplicated() {
        let features = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.1]];
        let labels = vec!["b".to_string(), "a".to_string(), "b".to_string()];
        let classifier = FittedClassifier::fit(&features, &labels, &params()).unwrap();

        assert_eq!(classifier.labels(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_mismatched_rows_and_labels_are_rejected() {
        let features = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let labels = vec!["a".to_string()];
        let result = FittedClassifier::fit(&features, &labels, &params());

        assert!(matches!(
            result,
            Err(ResumeClassifierError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_iteration_bound_reports_divergence() {
        let tight = ClassifierParams {
            max_iterations: 1,
            learning_rate: 1.0,
            l2_penalty: 0.1,
            tolerance: 1e-12,
        };
        let features = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let labels = vec!["a".to_string(), "b".to_string()];
        let result = FittedClassifier::fit(&features, &labels, &tight);

        assert!(matches!(
            result,
            Err(ResumeClassifierError::TrainingDivergence(_))
        ));
    }
}
