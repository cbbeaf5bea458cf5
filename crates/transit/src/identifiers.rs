//! Name-based identifiers for stops and routes.
//!
//! Stops and routes are identified by their public names. Identifiers wrap an
//! `Arc<str>` so the catalogue, the routing graph labels and query results can
//! share a name without copying it.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        // Must hash exactly like `str` for the `Borrow<str>` lookups below.
        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state);
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }
    };
}

impl_identifier!(StopIdentifier);
impl_identifier!(RouteIdentifier);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_identifier_equality() {
        let id1 = StopIdentifier::new("Marushkino");
        let id2 = StopIdentifier::new("Marushkino");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_identifier_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(StopIdentifier::new("Tolstopaltsevo"), 42);

        assert_eq!(map.get("Tolstopaltsevo"), Some(&42));
        assert_eq!(map.get(&StopIdentifier::new("Tolstopaltsevo")), Some(&42));
        assert_eq!(map.get("Rasskazovka"), None);
    }

    #[test]
    fn test_identifier_ordering() {
        let routes: BTreeSet<RouteIdentifier> =
            ["828", "256", "750", "256"].into_iter().map(RouteIdentifier::from).collect();
        let names: Vec<&str> = routes.iter().map(|r| r.as_str()).collect();
        assert_eq!(names, vec!["256", "750", "828"]);
    }

    #[test]
    fn test_identifier_display() {
        let id = RouteIdentifier::new("750");
        assert_eq!(format!("{}", id), "750");
    }
}
