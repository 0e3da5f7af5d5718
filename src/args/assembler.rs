//! Override assembler — flag tokens that go on top of the configured flags.

/// Builder for the override half of the flag merge.
#[derive(Debug, Clone)]
pub struct FlagAssembler {
    args: Vec<String>,
}

impl FlagAssembler {
    /// Start with flag tokens from the command line, in the order and
    /// spelling the user typed them.
    pub fn from_flag_tokens(tokens: &[String]) -> Self {
        Self {
            args: tokens.to_vec(),
        }
    }

    /// Start with an empty flag list.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Add flag tokens applied after everything collected so far.
    pub fn with_extra(mut self, extra: Vec<String>) -> Self {
        self.args.extend(extra);
        self
    }

    /// Build the final override list.
    pub fn build(self) -> Vec<String> {
        self.args
    }
}

impl Default for FlagAssembler {
    fn default() -> Self {
        Self::new()
    }
}
