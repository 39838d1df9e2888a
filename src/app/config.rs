//! Configuration types for agent creation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hyperparameters for creating a Q-learning agent.
///
/// This type provides a builder-style API plus a parser for the
/// `key=value` option strings the game launcher passes through from the
/// command line (e.g. `-a alpha=0.5,numTraining=50`).
///
/// # Examples
///
/// ```
/// use pacq::AgentConfig;
///
/// let config = AgentConfig::default()
///     .with_alpha(0.5)
///     .with_num_training(50)
///     .with_seed(42);
///
/// let parsed = AgentConfig::from_key_values(["alpha=0.5", "numTraining=50"]).unwrap();
/// assert_eq!(parsed.alpha, config.alpha);
/// assert_eq!(parsed.num_training, config.num_training);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate scale (alpha)
    pub alpha: f64,
    /// Exploration probability (epsilon)
    pub epsilon: f64,
    /// Discount factor (gamma)
    pub gamma: f64,
    /// Per-state-action attempt cap; accepted but not consumed by the
    /// update rule (reserved for exploration-bonus strategies)
    pub max_attempts: u32,
    /// Number of training episodes before alpha and epsilon are zeroed
    pub num_training: u32,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            epsilon: 0.3,
            gamma: 0.8,
            max_attempts: 30,
            num_training: 10,
            seed: None,
        }
    }
}

impl AgentConfig {
    /// Set the learning rate.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the exploration probability.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the discount factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the per-state-action attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the training-episode budget.
    pub fn with_num_training(mut self, num_training: u32) -> Self {
        self.num_training = num_training;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a configuration from `key=value` option strings.
    ///
    /// Unrecognized keys and unparseable values are rejected. Both the
    /// launcher's camelCase spellings (`maxAttempts`, `numTraining`) and
    /// snake_case spellings are accepted. The result is validated before
    /// being returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedOption`] for strings without a `=`,
    /// [`Error::UnknownOption`] for unrecognized keys,
    /// [`Error::InvalidOptionValue`] for values that fail to parse, and
    /// [`Error::InvalidConfiguration`] when validation fails.
    pub fn from_key_values<I, T>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut config = Self::default();

        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| Error::MalformedOption {
                input: pair.to_string(),
            })?;

            match key {
                "alpha" => config.alpha = parse_value(key, value)?,
                "epsilon" => config.epsilon = parse_value(key, value)?,
                "gamma" => config.gamma = parse_value(key, value)?,
                "maxAttempts" | "max_attempts" => {
                    config.max_attempts = parse_value(key, value)?;
                }
                "numTraining" | "num_training" => {
                    config.num_training = parse_value(key, value)?;
                }
                "seed" => config.seed = Some(parse_value(key, value)?),
                _ => {
                    return Err(Error::UnknownOption {
                        name: key.to_string(),
                    });
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the hyperparameters.
    ///
    /// Alpha, epsilon, and gamma must be finite and within `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("epsilon", self.epsilon),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidOptionValue {
        name: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AgentConfig::default();
        assert_eq!(config.alpha, 0.2);
        assert_eq!(config.epsilon, 0.3);
        assert_eq!(config.gamma, 0.8);
        assert_eq!(config.max_attempts, 30);
        assert_eq!(config.num_training, 10);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_key_value_options() {
        let config = AgentConfig::from_key_values([
            "alpha=0.5",
            "epsilon=0.1",
            "gamma=0.9",
            "maxAttempts=15",
            "numTraining=100",
            "seed=7",
        ])
        .unwrap();

        assert_eq!(config.alpha, 0.5);
        assert_eq!(config.epsilon, 0.1);
        assert_eq!(config.gamma, 0.9);
        assert_eq!(config.max_attempts, 15);
        assert_eq!(config.num_training, 100);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn accepts_snake_case_spellings() {
        let config =
            AgentConfig::from_key_values(["max_attempts=5", "num_training=20"]).unwrap();
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.num_training, 20);
    }

    #[test]
    fn unparsed_options_keep_defaults() {
        let config = AgentConfig::from_key_values(["alpha=0.5"]).unwrap();
        assert_eq!(config.epsilon, 0.3);
        assert_eq!(config.num_training, 10);
    }

    #[test]
    fn rejects_unknown_key() {
        let err = AgentConfig::from_key_values(["beta=0.5"]).unwrap_err();
        assert!(matches!(err, Error::UnknownOption { name } if name == "beta"));
    }

    #[test]
    fn rejects_unparseable_value() {
        let err = AgentConfig::from_key_values(["alpha=fast"]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOptionValue { name, .. } if name == "alpha"
        ));
    }

    #[test]
    fn rejects_missing_equals() {
        let err = AgentConfig::from_key_values(["alpha"]).unwrap_err();
        assert!(matches!(err, Error::MalformedOption { .. }));
    }

    #[test]
    fn rejects_out_of_range_epsilon() {
        let err = AgentConfig::from_key_values(["epsilon=1.5"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));

        let err = AgentConfig::default().with_gamma(-0.1).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }
}
