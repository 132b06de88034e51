//! ErrorChain: per-record failures collected across a batch.

use std::fmt;

use super::PetitionError;

/// Collects failures keyed by record index so a batch can finish past a bad
/// record and report every problem at the end.
#[derive(Debug, Default)]
pub struct ErrorChain {
    errors: Vec<(usize, PetitionError)>,
}

impl ErrorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, error: PetitionError) {
        self.errors.push((index, error));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Indexes of the records that failed, in the order they were pushed.
    pub fn failed_indexes(&self) -> Vec<usize> {
        self.errors.iter().map(|(i, _)| *i).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, PetitionError)> {
        self.errors.iter()
    }

    /// Consume the chain; `Err` with the first failure if any were recorded.
    pub fn into_result(self) -> Result<(), PetitionError> {
        match self.errors.into_iter().next() {
            Some((_, e)) => Err(e),
            None => Ok(()),
        }
    }
}

impl fmt::Display for ErrorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error(s)", self.errors.len())?;
        for (index, error) in &self.errors {
            write!(f, "\n  [{index}] {error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_is_ok() {
        let chain = ErrorChain::new();
        assert!(chain.is_empty());
        assert!(chain.into_result().is_ok());
    }

    #[test]
    fn test_chain_keeps_indexes_in_order() {
        let mut chain = ErrorChain::new();
        chain.push(3, PetitionError::Config("a".into()));
        chain.push(1, PetitionError::Config("b".into()));
        assert_eq!(chain.failed_indexes(), vec![3, 1]);
        assert!(chain.to_string().starts_with("2 error(s)"));
        assert!(chain.into_result().is_err());
    }
}
