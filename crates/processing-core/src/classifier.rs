//! Classifier adapter around a pretrained dense network artifact.
//!
//! The artifact is a JSON export of the trained model: an ordered label
//! list plus dense layers (row-major weights, bias, activation). Label
//! order is a convention shared with the training pipeline, so it is
//! asserted against [`Emotion::ALL`] at load time rather than trusted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use moodtune_common::error::{MoodtuneError, MoodtuneResult};
use moodtune_emotion_model::label::Emotion;

/// Anything that can turn a feature vector into a label.
///
/// The session engine depends on this seam so tests can substitute a
/// scripted classifier for the real artifact.
pub trait Classifier {
    /// Classify one feature vector into exactly one label.
    fn classify(&self, features: &[f32]) -> MoodtuneResult<Emotion>;
}

/// Activation applied after a dense layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    Softmax,
    Linear,
}

/// One dense layer: `output = activation(weights · input + bias)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    /// Row-major weight matrix, one row per output unit.
    pub weights: Vec<Vec<f32>>,
    pub bias: Vec<f32>,
    pub activation: Activation,
}

impl DenseLayer {
    fn forward(&self, input: &[f32]) -> Vec<f32> {
        let mut output: Vec<f32> = self
            .weights
            .iter()
            .zip(self.bias.iter())
            .map(|(row, b)| row.iter().zip(input.iter()).map(|(w, x)| w * x).sum::<f32>() + b)
            .collect();

        match self.activation {
            Activation::Relu => {
                for v in &mut output {
                    *v = v.max(0.0);
                }
            }
            Activation::Softmax => {
                let max = output.iter().copied().fold(f32::NEG_INFINITY, f32::max);
                let mut sum = 0.0;
                for v in &mut output {
                    *v = (*v - max).exp();
                    sum += *v;
                }
                if sum > 0.0 {
                    for v in &mut output {
                        *v /= sum;
                    }
                }
            }
            Activation::Linear => {}
        }

        output
    }

    fn output_width(&self) -> usize {
        self.weights.len()
    }

    fn input_width(&self) -> usize {
        self.weights.first().map(|row| row.len()).unwrap_or(0)
    }
}

/// A pretrained model exported as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Output labels in the model's index order.
    pub labels: Vec<String>,
    pub layers: Vec<DenseLayer>,
}

impl ModelArtifact {
    /// Load an artifact from disk. Missing files and malformed JSON are
    /// fatal startup errors; no recovery is attempted.
    pub fn load(path: &Path) -> MoodtuneResult<Self> {
        if !path.exists() {
            return Err(MoodtuneError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&content)?;
        Ok(artifact)
    }

    /// Width of the feature vector this model expects.
    pub fn input_width(&self) -> usize {
        self.layers
            .first()
            .map(DenseLayer::input_width)
            .unwrap_or(0)
    }

    /// Width of the final probability distribution.
    pub fn output_width(&self) -> usize {
        self.layers
            .last()
            .map(DenseLayer::output_width)
            .unwrap_or(0)
    }

    fn validate(&self) -> MoodtuneResult<()> {
        if self.layers.is_empty() {
            return Err(MoodtuneError::model("Model artifact has no layers"));
        }

        let mut width = self.input_width();
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.weights.is_empty() {
                return Err(MoodtuneError::model(format!("Layer {i} has no rows")));
            }
            if layer.weights.iter().any(|row| row.len() != width) {
                return Err(MoodtuneError::model(format!(
                    "Layer {i} has ragged or misaligned rows (expected width {width})"
                )));
            }
            if layer.bias.len() != layer.output_width() {
                return Err(MoodtuneError::model(format!(
                    "Layer {i} bias length {} does not match its {} rows",
                    layer.bias.len(),
                    layer.output_width()
                )));
            }
            width = layer.output_width();
        }

        // The output index space and the label vocabulary must stay in
        // lockstep; this is a hand-maintained convention, so enforce it.
        if self.output_width() != Emotion::ALL.len() {
            return Err(MoodtuneError::config(format!(
                "Model produces {} outputs but the vocabulary has {} labels",
                self.output_width(),
                Emotion::ALL.len()
            )));
        }
        if self.labels.len() != Emotion::ALL.len()
            || self
                .labels
                .iter()
                .zip(Emotion::ALL.iter())
                .any(|(raw, emotion)| raw != emotion.as_str())
        {
            return Err(MoodtuneError::config(format!(
                "Model label order {:?} does not match the vocabulary {:?}",
                self.labels,
                Emotion::ALL.map(|e| e.as_str())
            )));
        }

        Ok(())
    }
}

/// The classifier adapter: owns a validated artifact and runs the forward
/// pass one frame at a time.
#[derive(Debug)]
pub struct EmotionClassifier {
    artifact: ModelArtifact,
}

impl EmotionClassifier {
    /// Wrap a validated artifact.
    pub fn new(artifact: ModelArtifact) -> MoodtuneResult<Self> {
        artifact.validate()?;
        tracing::debug!(
            input_width = artifact.input_width(),
            layers = artifact.layers.len(),
            "Classifier artifact validated"
        );
        Ok(Self { artifact })
    }

    /// Load and validate an artifact from disk.
    pub fn load(path: &Path) -> MoodtuneResult<Self> {
        Self::new(ModelArtifact::load(path)?)
    }

    /// Width of the feature vector this classifier expects.
    pub fn input_width(&self) -> usize {
        self.artifact.input_width()
    }

    /// Assert at startup that the artifact matches the feature schema.
    pub fn ensure_input_width(&self, expected: usize) -> MoodtuneResult<()> {
        if self.input_width() != expected {
            return Err(MoodtuneError::config(format!(
                "Model expects input width {} but the feature schema produces {expected}",
                self.input_width()
            )));
        }
        Ok(())
    }

    /// Run the forward pass and return the full output distribution.
    pub fn predict(&self, features: &[f32]) -> MoodtuneResult<Vec<f32>> {
        if features.len() != self.input_width() {
            return Err(MoodtuneError::config(format!(
                "Feature vector length {} does not match model input width {}",
                features.len(),
                self.input_width()
            )));
        }

        let mut current = features.to_vec();
        for layer in &self.artifact.layers {
            current = layer.forward(&current);
        }
        Ok(current)
    }
}

impl Classifier for EmotionClassifier {
    fn classify(&self, features: &[f32]) -> MoodtuneResult<Emotion> {
        let distribution = self.predict(features)?;
        let index = argmax(&distribution);
        Emotion::from_index(index).ok_or_else(|| {
            MoodtuneError::classification(format!("Arg-max index {index} outside the vocabulary"))
        })
    }
}

/// Index of the largest value; ties resolve to the lowest index.
fn argmax(values: &[f32]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A single-layer artifact where output unit `i` fires when input `i`
    /// is hot; input width equals the vocabulary size for compactness.
    fn diagonal_artifact() -> ModelArtifact {
        let n = Emotion::ALL.len();
        let weights: Vec<Vec<f32>> = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        ModelArtifact {
            labels: Emotion::ALL.iter().map(|e| e.as_str().to_string()).collect(),
            layers: vec![DenseLayer {
                weights,
                bias: vec![0.0; n],
                activation: Activation::Softmax,
            }],
        }
    }

    fn one_hot(index: usize) -> Vec<f32> {
        let mut v = vec![0.0; Emotion::ALL.len()];
        v[index] = 1.0;
        v
    }

    #[test]
    fn test_classify_maps_argmax_to_vocabulary() {
        let classifier = EmotionClassifier::new(diagonal_artifact()).unwrap();
        assert_eq!(classifier.classify(&one_hot(0)).unwrap(), Emotion::Happy);
        assert_eq!(classifier.classify(&one_hot(3)).unwrap(), Emotion::Rock);
        assert_eq!(classifier.classify(&one_hot(5)).unwrap(), Emotion::Sad);
    }

    #[test]
    fn test_wrong_input_width_is_config_mismatch() {
        let classifier = EmotionClassifier::new(diagonal_artifact()).unwrap();
        let err = classifier.classify(&[0.0; 3]).unwrap_err();
        assert!(matches!(err, MoodtuneError::Config { .. }));
    }

    #[test]
    fn test_output_width_must_match_vocabulary() {
        let mut artifact = diagonal_artifact();
        artifact.layers[0].weights.pop();
        artifact.layers[0].bias.pop();
        artifact.labels.pop();
        let err = EmotionClassifier::new(artifact).unwrap_err();
        assert!(matches!(err, MoodtuneError::Config { .. }));
    }

    #[test]
    fn test_label_order_must_match_vocabulary() {
        let mut artifact = diagonal_artifact();
        artifact.labels.swap(0, 5);
        let err = EmotionClassifier::new(artifact).unwrap_err();
        assert!(matches!(err, MoodtuneError::Config { .. }));
    }

    #[test]
    fn test_ragged_weights_are_rejected() {
        let mut artifact = diagonal_artifact();
        artifact.layers[0].weights[2].pop();
        let err = EmotionClassifier::new(artifact).unwrap_err();
        assert!(matches!(err, MoodtuneError::Model { .. }));
    }

    #[test]
    fn test_multi_layer_forward_pass() {
        let n = Emotion::ALL.len();
        // Hidden layer doubles each input, output layer is diagonal.
        let hidden = DenseLayer {
            weights: (0..n)
                .map(|i| (0..n).map(|j| if i == j { 2.0 } else { 0.0 }).collect())
                .collect(),
            bias: vec![0.0; n],
            activation: Activation::Relu,
        };
        let output = diagonal_artifact().layers.remove(0);
        let artifact = ModelArtifact {
            labels: diagonal_artifact().labels,
            layers: vec![hidden, output],
        };
        let classifier = EmotionClassifier::new(artifact).unwrap();
        assert_eq!(classifier.classify(&one_hot(4)).unwrap(), Emotion::Angry);
    }

    #[test]
    fn test_softmax_distribution_sums_to_one() {
        let classifier = EmotionClassifier::new(diagonal_artifact()).unwrap();
        let distribution = classifier.predict(&one_hot(1)).unwrap();
        let sum: f32 = distribution.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_load_from_disk() {
        let dir = std::env::temp_dir().join("moodtune_test_model");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        let path = dir.join("model.json");
        let json = serde_json::to_string(&diagonal_artifact()).unwrap();
        std::fs::write(&path, json).unwrap();

        let classifier = EmotionClassifier::load(&path).unwrap();
        assert_eq!(classifier.input_width(), Emotion::ALL.len());
        assert!(classifier.ensure_input_width(Emotion::ALL.len()).is_ok());
        assert!(classifier.ensure_input_width(1020).is_err());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_artifact_is_file_not_found() {
        let err = ModelArtifact::load(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, MoodtuneError::FileNotFound { .. }));
    }
}
