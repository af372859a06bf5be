#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub seed: bool,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// Defines whether the table starts out with the example people
    pub fn set_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self { seed: true }
    }
}

impl DatabaseOptions {
    pub fn new_test() -> Self {
        DatabaseOptions::default().set_seed(false)
    }
}
