use std::fmt;

use laavut_data::Location;

/// What a results list should show for a query.
///
/// - nothing typed yet: [`SearchOutcome::Idle`]
/// - typed, nothing found: [`SearchOutcome::NoResults`], keeping the query for the message
/// - typed and found: [`SearchOutcome::Results`]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Idle,
    NoResults { query: String },
    Results(Vec<Location>),
}

impl SearchOutcome {
    /// Classify `results` returned for `query`. Only the empty query is idle.
    #[must_use]
    pub fn new(query: &str, results: Vec<Location>) -> Self {
        if query.is_empty() {
            Self::Idle
        } else if results.is_empty() {
            Self::NoResults {
                query: query.to_string(),
            }
        } else {
            Self::Results(results)
        }
    }

    #[must_use]
    pub fn locations(&self) -> &[Location] {
        match self {
            Self::Results(locations) => locations,
            Self::Idle | Self::NoResults { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_locations(self) -> Vec<Location> {
        match self {
            Self::Results(locations) => locations,
            Self::Idle | Self::NoResults { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations().is_empty()
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The empty-state message, if the list should show one.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::NoResults { query } => Some(format!("No results for '{query}'")),
            Self::Idle | Self::Results(_) => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::NoResults { query } => write!(f, "No results for '{query}'"),
            Self::Results(locations) => {
                for (i, location) in locations.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{location}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_for_empty_query() {
        assert!(SearchOutcome::new("", Vec::new()).is_idle());
        assert_eq!(SearchOutcome::new("", Vec::new()).message(), None);
    }

    #[test]
    fn test_whitespace_query_reports_no_results() {
        let outcome = SearchOutcome::new("   ", Vec::new());
        assert!(!outcome.is_idle());
        assert_eq!(
            outcome,
            SearchOutcome::NoResults {
                query: "   ".to_string()
            }
        );
        assert_eq!(outcome.message().as_deref(), Some("No results for '   '"));
    }

    #[test]
    fn test_no_results_message() {
        let outcome = SearchOutcome::new("zzz", Vec::new());
        assert_eq!(
            outcome,
            SearchOutcome::NoResults {
                query: "zzz".to_string()
            }
        );
        assert_eq!(outcome.message().as_deref(), Some("No results for 'zzz'"));
        assert_eq!(outcome.to_string(), "No results for 'zzz'");
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_results() {
        let outcome = SearchOutcome::new("laavu", vec![Location::new("Laavu", 60.0, 24.0)]);
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.into_locations()[0].title(), Some("Laavu"));
    }
}
