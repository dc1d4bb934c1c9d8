use super::UnknownValue;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe key for People, stored as a plain string (`p_<uuid>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonKey(pub String);

impl PersonKey {
    /// A fresh random key.
    pub fn generate() -> Self {
        Self(format!("p_{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl Display for PersonKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a person relates to the user of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Me,
    Family,
    Friend,
    Coworker,
    Other,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::Me,
        Relationship::Family,
        Relationship::Friend,
        Relationship::Coworker,
        Relationship::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Me => "me",
            Relationship::Family => "family",
            Relationship::Friend => "friend",
            Relationship::Coworker => "coworker",
            Relationship::Other => "other",
        }
    }
}

impl FromStr for Relationship {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relationship::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownValue::new("relationship", s))
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person who can take part in choosing a restaurant.
///
/// Managed by the people catalog; see [`CatalogEntity`](catalog_actor::CatalogEntity) for
/// how records are validated and stored. Immutable once saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub key: PersonKey,
    pub first_name: String,
    pub last_name: String,
    pub relationship: Relationship,
}

impl Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.relationship
        )
    }
}

/// Raw form for adding a person. Fields hold exactly what was entered.
#[derive(Debug, Clone, Default)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
}

impl PersonForm {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            relationship: relationship.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_json_uses_camel_case() {
        let person = Person {
            key: PersonKey::from("p_1"),
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            relationship: Relationship::Coworker,
        };

        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "key": "p_1",
                "firstName": "Alice",
                "lastName": "Smith",
                "relationship": "coworker"
            })
        );
        assert_eq!(person.to_string(), "Alice Smith (coworker)");
    }

    #[test]
    fn test_relationship_parse() {
        assert_eq!("family".parse::<Relationship>(), Ok(Relationship::Family));
        assert!("Family".parse::<Relationship>().is_err());
        assert!("".parse::<Relationship>().is_err());
    }

    #[test]
    fn test_generated_keys_are_prefixed_and_unique() {
        let a = PersonKey::generate();
        let b = PersonKey::generate();
        assert!(a.as_str().starts_with("p_"));
        assert_ne!(a, b);
    }
}
