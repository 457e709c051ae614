//! Named, ordered entities: criteria and alternatives.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::AhpError;

/// An entity identified by name and its position in an ordered set.
pub trait NamedEntity: Clone {
    /// Label used in error messages ("criterion", "alternative").
    const KIND: &'static str;

    /// Creates the entity at a given position.
    fn at(name: String, index: usize) -> Self;

    fn name(&self) -> &str;

    fn index(&self) -> usize;
}

/// A decision criterion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub index: usize,
}

/// A decision alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub index: usize,
}

macro_rules! named_entity {
    ($ty:ident, $kind:literal) => {
        impl NamedEntity for $ty {
            const KIND: &'static str = $kind;

            fn at(name: String, index: usize) -> Self {
                Self { name, index }
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn index(&self) -> usize {
                self.index
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.name)
            }
        }
    };
}

named_entity!(Criterion, "criterion");
named_entity!(Alternative, "alternative");

/// Builds an ordered entity set, rejecting empty and duplicate names.
pub fn entity_set<T, S>(names: impl IntoIterator<Item = S>) -> Result<Vec<T>, AhpError>
where
    T: NamedEntity,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    for (index, name) in names.into_iter().enumerate() {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AhpError::EmptyName { kind: T::KIND });
        }
        if !seen.insert(name.clone()) {
            return Err(AhpError::DuplicateName {
                kind: T::KIND,
                name,
            });
        }
        entities.push(T::at(name, index));
    }

    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_set_assigns_positions_in_order() {
        let criteria: Vec<Criterion> = entity_set(vec!["cost", "quality", "speed"]).unwrap();
        assert_eq!(criteria.len(), 3);
        assert_eq!(criteria[0].name, "cost");
        assert_eq!(criteria[2].index, 2);
    }

    #[test]
    fn entity_set_rejects_duplicates() {
        let result: Result<Vec<Alternative>, _> = entity_set(vec!["a", "b", "a"]);
        assert_eq!(
            result.unwrap_err(),
            AhpError::DuplicateName {
                kind: "alternative",
                name: "a".to_string()
            }
        );
    }

    #[test]
    fn entity_set_rejects_blank_names() {
        let result: Result<Vec<Criterion>, _> = entity_set(vec!["cost", "  "]);
        assert_eq!(result.unwrap_err(), AhpError::EmptyName { kind: "criterion" });
    }

    #[test]
    fn entity_displays_name() {
        let c = Criterion::at("budget".to_string(), 0);
        assert_eq!(format!("{}", c), "budget");
    }
}
