use serde::{Deserialize, Serialize};

/// Chapter identifier as the cache server assigns it (index into its trace).
pub type ChapterId = u64;

/// Operation identifier, local to its chapter.
pub type OpId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Freshness {
    Fresh,
    Stale,
}

impl Freshness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Freshness::Fresh => "Fresh",
            Freshness::Stale => "Stale",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_wire_values() {
        assert_eq!(serde_json::to_string(&Freshness::Fresh).unwrap(), "\"Fresh\"");
        assert_eq!(serde_json::to_string(&Freshness::Stale).unwrap(), "\"Stale\"");

        let parsed: Freshness = serde_json::from_str("\"Stale\"").unwrap();
        assert_eq!(parsed, Freshness::Stale);
        assert!(!parsed.is_fresh());
    }

    #[test]
    fn test_freshness_rejects_other_values() {
        for bad in ["\"fresh\"", "\"STALE\"", "\"Unknown\"", "\"\"", "1", "null"] {
            assert!(
                serde_json::from_str::<Freshness>(bad).is_err(),
                "{} should not parse as Freshness",
                bad
            );
        }
    }
}
