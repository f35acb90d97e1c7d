/// Runtime options for a game session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Seed for the computer's moves (None = fresh entropy each run)
    pub seed: Option<u64>,
    /// Emit debug diagnostics on stderr
    pub verbose: bool,
}

impl Config {
    /// Merge CLI arguments into this configuration
    /// CLI arguments take precedence over existing values
    pub fn merge_cli_args(&mut self, seed: Option<u64>, verbose: bool) {
        if seed.is_some() {
            self.seed = seed;
        }
        self.verbose |= verbose;
    }

    /// Default tracing filter for this configuration
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "rps=debug,warn"
        } else {
            "rps=warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unseeded_and_quiet() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_filter(), "rps=warn");
    }

    #[test]
    fn test_cli_args_override() {
        let mut config = Config::default();
        config.merge_cli_args(Some(9), true);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.log_filter(), "rps=debug,warn");
    }

    #[test]
    fn test_missing_seed_keeps_existing() {
        let mut config = Config {
            seed: Some(3),
            verbose: false,
        };
        config.merge_cli_args(None, false);
        assert_eq!(config.seed, Some(3));
        assert!(!config.verbose);
    }
}
