use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;

use crate::add;

/// The two integers the binary adds together.
///
/// Can be read from a TOML file. Keys that are left out keep their
/// default value:
///
/// ```toml
/// a = 10
/// b = 20
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Operands {
    pub a: i32,
    pub b: i32,
}

impl Default for Operands {
    fn default() -> Self {
        Self { a: 10, b: 20 }
    }
}

impl Operands {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }

    /// Read operands from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        log::debug!("reading operands from '{}'", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read operand file '{}'", path.display()))?;
        let operands = toml::from_str::<Self>(&content)
            .with_context(|| format!("failed to parse operand file '{}'", path.display()))?;
        log::trace!("loaded operands: {operands:?}");
        Ok(operands)
    }

    /// Sum of `a` and `b`, erroring instead of overflowing
    pub fn sum(&self) -> anyhow::Result<i32> {
        // checked only for the overflow test, the sum itself goes through `add`
        let Some(_) = self.a.checked_add(self.b) else {
            bail!("sum of {} and {} does not fit in an i32", self.a, self.b);
        };
        Ok(add(self.a, self.b))
    }

    /// The line printed by the binary for these operands
    pub fn message(&self) -> anyhow::Result<String> {
        let c = self.sum()?;
        log::debug!("{} + {} = {c}", self.a, self.b);
        Ok(format_sum(c))
    }
}

/// The line printed by the binary for a computed sum
pub fn format_sum(c: i32) -> String {
    format!("Sum of a and b is: {c}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_operands() {
        let operands = Operands::default();
        assert_eq!(operands, Operands::new(10, 20));
        assert_eq!(operands.sum().unwrap(), 30);
        assert_eq!(format_sum(30), "Sum of a and b is: 30");
    }

    #[test]
    fn sum_reports_overflow() {
        let err = Operands::new(i32::MAX, 1).sum().unwrap_err();
        assert!(err.to_string().contains("2147483647"), "{err}");
        assert!(Operands::new(i32::MIN, -1).sum().is_err());
        assert_eq!(Operands::new(i32::MAX, i32::MIN).sum().unwrap(), -1);
    }

    #[test]
    fn message_for_operands() {
        assert_eq!(
            Operands::default().message().unwrap(),
            "Sum of a and b is: 30"
        );
        assert_eq!(
            Operands::new(-7, 2).message().unwrap(),
            "Sum of a and b is: -5"
        );
        assert!(Operands::new(i32::MIN, -1).message().is_err());
    }

    #[test]
    fn parse_partial_file() {
        let operands: Operands = toml::from_str("a = 5").unwrap();
        assert_eq!(operands, Operands::new(5, 20));
        let operands: Operands = toml::from_str("").unwrap();
        assert_eq!(operands, Operands::default());
    }

    #[test]
    fn reject_unknown_keys() {
        assert!(toml::from_str::<Operands>("a = 1\nc = 3").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("operands.toml");
        std::fs::write(&path, "a = -4\nb = 6\n").unwrap();
        assert_eq!(Operands::load(&path).unwrap(), Operands::new(-4, 6));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Operands::load(&path).unwrap_err();
        assert!(format!("{err:?}").contains("failed to read operand file"));
    }
}
