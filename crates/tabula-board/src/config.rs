//! Board configuration parameters.

use tabula_core::{ConfigError, Limits};

/// Configuration for a [`Board`](crate::Board).
///
/// Both values are fixed once the board is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig<const D: usize> {
    /// Human-readable name, carried by every error the board raises.
    ///
    /// Default: `"Unnamed board"`.
    pub name: String,

    /// Per-axis maximum coordinate (`0` = unbounded).
    ///
    /// Default: every axis unbounded.
    pub limits: Limits<D>,
}

impl<const D: usize> BoardConfig<D> {
    /// Name used when none is given.
    pub const DEFAULT_NAME: &'static str = "Unnamed board";

    /// Create a config with the given name and limits.
    pub fn new(name: impl Into<String>, limits: Limits<D>) -> Self {
        Self {
            name: name.into(),
            limits,
        }
    }

    /// Replace the board name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the limits.
    pub fn with_limits(mut self, limits: impl Into<Limits<D>>) -> Self {
        self.limits = limits.into();
        self
    }

    /// Check structural invariants.
    ///
    /// A zero-dimensional config is rejected here, since such a board has a
    /// single coordinate-less cell. `Board::new` itself does not check and
    /// will build one; only `validate` and `from_config` refuse it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if D == 0 {
            return Err(ConfigError::ZeroDimensions);
        }
        if self.name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(())
    }
}

impl<const D: usize> Default for BoardConfig<D> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, Limits::unbounded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unnamed_and_unbounded() {
        let config = BoardConfig::<2>::default();
        assert_eq!(config.name, "Unnamed board");
        assert_eq!(config.limits, Limits::unbounded());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = BoardConfig::<2>::default()
            .with_name("chess")
            .with_limits([8, 8]);
        assert_eq!(config.name, "chess");
        assert_eq!(config.limits, Limits::new([8, 8]));
    }

    #[test]
    fn zero_dimensions_rejected() {
        let config = BoardConfig::<0>::new("point", Limits::new([]));
        assert_eq!(config.validate(), Err(ConfigError::ZeroDimensions));
    }

    #[test]
    fn empty_name_rejected() {
        let config = BoardConfig::<1>::default().with_name("");
        assert_eq!(config.validate(), Err(ConfigError::EmptyName));
    }
}
