//! Label selectors: conjunctions of requirements over object labels.
//!
//! The textual form is a comma separated list of requirements:
//!
//! ```text
//! app=web            label equals value (also `app==web`)
//! tier!=frontend     label absent or different
//! managed            label present
//! !legacy            label absent
//! ```
//!
//! The empty string selects everything.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;

/// A single label requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requirement {
    Equals { key: String, value: String },
    NotEquals { key: String, value: String },
    Exists(String),
    DoesNotExist(String),
}

impl Requirement {
    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        match self {
            Requirement::Equals { key, value } => labels.get(key) == Some(value),
            Requirement::NotEquals { key, value } => labels.get(key) != Some(value),
            Requirement::Exists(key) => labels.contains_key(key),
            Requirement::DoesNotExist(key) => !labels.contains_key(key),
        }
    }

    fn parse(raw: &str) -> Result<Self, SelectorError> {
        let (key, req) = if let Some((k, v)) = raw.split_once("!=") {
            (k, Requirement::NotEquals {
                key: k.trim().to_string(),
                value: v.trim().to_string(),
            })
        } else if let Some((k, v)) = raw.split_once("==").or_else(|| raw.split_once('=')) {
            (k, Requirement::Equals {
                key: k.trim().to_string(),
                value: v.trim().to_string(),
            })
        } else if let Some(k) = raw.strip_prefix('!') {
            (k, Requirement::DoesNotExist(k.trim().to_string()))
        } else {
            (raw, Requirement::Exists(raw.trim().to_string()))
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(SelectorError::EmptyKey(raw.to_string()));
        }
        if !key.chars().all(is_key_char) {
            return Err(SelectorError::InvalidKey(key.to_string()));
        }
        if let Requirement::Equals { value, .. } | Requirement::NotEquals { value, .. } = &req {
            if !value.chars().all(is_value_char) {
                return Err(SelectorError::InvalidValue(value.clone()));
            }
        }
        Ok(req)
    }
}

fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn is_key_char(c: char) -> bool {
    is_value_char(c) || c == '/'
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Equals { key, value } => write!(f, "{key}={value}"),
            Requirement::NotEquals { key, value } => write!(f, "{key}!={value}"),
            Requirement::Exists(key) => write!(f, "{key}"),
            Requirement::DoesNotExist(key) => write!(f, "!{key}"),
        }
    }
}

/// A conjunction of [`Requirement`]s. No requirements selects everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelSelector {
    requirements: Vec<Requirement>,
}

impl LabelSelector {
    /// Selects every object.
    pub fn everything() -> Self {
        Self::default()
    }

    /// Parse the comma separated textual form.
    pub fn parse(s: &str) -> Result<Self, SelectorError> {
        let requirements = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Requirement::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { requirements })
    }

    /// Add a requirement that `key` equals `value`.
    pub fn with_equals(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.requirements.push(Requirement::Equals {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn is_everything(&self) -> bool {
        self.requirements.is_empty()
    }

    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.requirements.iter().all(|r| r.matches(labels))
    }
}

impl FromStr for LabelSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.requirements.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{r}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_selects_everything() {
        let sel = LabelSelector::parse("").unwrap();
        assert!(sel.is_everything());
        assert!(sel.matches(&labels(&[])));
        assert!(sel.matches(&labels(&[("app", "web")])));
    }

    #[test]
    fn test_parse_all_operators() {
        let sel = LabelSelector::parse("app=web, tier==backend,env!=prod,managed,!legacy").unwrap();
        assert_eq!(sel.requirements().len(), 5);
        assert_eq!(sel.to_string(), "app=web,tier=backend,env!=prod,managed,!legacy");

        let ok = labels(&[("app", "web"), ("tier", "backend"), ("managed", "")]);
        assert!(sel.matches(&ok));

        let prod = labels(&[("app", "web"), ("tier", "backend"), ("managed", ""), ("env", "prod")]);
        assert!(!sel.matches(&prod));

        let legacy = labels(&[("app", "web"), ("tier", "backend"), ("managed", ""), ("legacy", "1")]);
        assert!(!sel.matches(&legacy));
    }

    #[test]
    fn test_not_equals_matches_absent_label() {
        let sel = LabelSelector::parse("env!=prod").unwrap();
        assert!(sel.matches(&labels(&[])));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            LabelSelector::parse("=web"),
            Err(SelectorError::EmptyKey(_))
        ));
        assert!(matches!(
            LabelSelector::parse("a b=c"),
            Err(SelectorError::InvalidKey(_))
        ));
        assert!(matches!(
            LabelSelector::parse("app=w b"),
            Err(SelectorError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_with_equals() {
        let sel = LabelSelector::everything().with_equals("cert-manager.io/owned", "true");
        assert!(sel.matches(&labels(&[("cert-manager.io/owned", "true")])));
        assert!(!sel.matches(&labels(&[("cert-manager.io/owned", "false")])));
    }
}
