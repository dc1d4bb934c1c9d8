use super::UnknownValue;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe key for Restaurants, stored as a plain string (`r_<uuid>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestaurantKey(pub String);

impl RestaurantKey {
    /// A fresh random key.
    pub fn generate() -> Self {
        Self(format!("r_{}", uuid::Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RestaurantKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl Display for RestaurantKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every cuisine a restaurant can be filed under.
pub const CUISINES: [&str; 48] = [
    "Algerian",
    "American",
    "BBQ",
    "Belgian",
    "Brazilian",
    "British",
    "Cajun",
    "Canadian",
    "Chinese",
    "Cuban",
    "Egyptian",
    "Filipino",
    "French",
    "German",
    "Greek",
    "Haitian",
    "Hawaiian",
    "Indian",
    "Irish",
    "Italian",
    "Japanese",
    "Jewish",
    "Kenyan",
    "Korean",
    "Latvian",
    "Libyan",
    "Mediterranean",
    "Mexican",
    "Mormon",
    "Nigerian",
    "Other",
    "Peruvian",
    "Polish",
    "Portuguese",
    "Russian",
    "Salvadorian",
    "Sandwiche Shop",
    "Scottish",
    "Seafood",
    "Spanish",
    "Steak House",
    "Sushi",
    "Swedish",
    "Tahitian",
    "Thai",
    "Tibetan",
    "Turkish",
    "Welsh",
];

/// One entry of [`CUISINES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cuisine(String);

impl Cuisine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cuisine {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if CUISINES.contains(&s) {
            Ok(Self(s.to_string()))
        } else {
            Err(UnknownValue::new("cuisine", s))
        }
    }
}

impl Display for Cuisine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A 1-5 level, used for both price and rating. Stored as the strings `"1"`..`"5"`.
///
/// Variants are declared in ascending order, so the derived `Ord` is numeric order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
}

impl Level {
    pub const ALL: [Level; 5] = [Level::One, Level::Two, Level::Three, Level::Four, Level::Five];

    pub fn value(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
            Level::Four => 4,
            Level::Five => 5,
        }
    }

    /// `$` repeated `value` times.
    pub fn dollars(self) -> String {
        "$".repeat(self.value() as usize)
    }

    /// `★` repeated `value` times.
    pub fn stars(self) -> String {
        "\u{2605}".repeat(self.value() as usize)
    }
}

impl FromStr for Level {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.to_string() == s)
            .ok_or_else(|| UnknownValue::new("level", s))
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delivery {
    Yes,
    No,
}

impl Delivery {
    pub fn as_str(self) -> &'static str {
        match self {
            Delivery::Yes => "Yes",
            Delivery::No => "No",
        }
    }
}

impl FromStr for Delivery {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Delivery::Yes),
            "No" => Ok(Delivery::No),
            other => Err(UnknownValue::new("delivery option", other)),
        }
    }
}

impl Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A restaurant in the catalog.
///
/// Managed by the restaurant catalog; see [`CatalogEntity`](catalog_actor::CatalogEntity) for
/// how records are validated and stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub key: RestaurantKey,
    pub name: String,
    pub cuisine: Cuisine,
    pub price: Level,
    pub rating: Level,
    pub phone: String,
    pub address: String,
    #[serde(alias = "webSite")]
    pub website: String,
    pub delivery: Delivery,
}

impl Restaurant {
    /// One-line description shown while a choice waits for vetoes, e.g.
    /// `★★★★ star Italian restaurant with a price rating of $$ that DOES deliver.`
    pub fn summary(&self) -> String {
        let delivers = match self.delivery {
            Delivery::Yes => "DOES",
            Delivery::No => "DOES NOT",
        };
        format!(
            "{} star {} restaurant with a price rating of {} that {} deliver.",
            self.rating.stars(),
            self.cuisine,
            self.price.dollars(),
            delivers
        )
    }

    /// Labeled detail lines shown once a restaurant is accepted.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Cuisine", self.cuisine.to_string()),
            ("Price", self.price.dollars()),
            ("Rating", self.rating.stars()),
            ("Phone", self.phone.clone()),
            ("Address", self.address.clone()),
            ("Web Site", self.website.clone()),
            ("Delivery", self.delivery.to_string()),
        ]
    }
}

impl Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Raw form for adding a restaurant. Fields hold exactly what was entered; the fixed-set
/// fields (cuisine, price, rating, delivery) are the selected value or empty.
#[derive(Debug, Clone, Default)]
pub struct RestaurantForm {
    pub name: String,
    pub cuisine: String,
    pub price: String,
    pub rating: String,
    pub phone: String,
    pub address: String,
    pub website: String,
    pub delivery: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> Restaurant {
        Restaurant {
            key: RestaurantKey::from("r_1"),
            name: "Pizza Place".to_string(),
            cuisine: "Italian".parse().unwrap(),
            price: Level::Two,
            rating: Level::Four,
            phone: "5551234567".to_string(),
            address: "1 Main St".to_string(),
            website: "http://pizza.com".to_string(),
            delivery: Delivery::Yes,
        }
    }

    #[test]
    fn test_restaurant_json_format() {
        let json = serde_json::to_value(pizza()).unwrap();
        assert_eq!(json["price"], "2");
        assert_eq!(json["rating"], "4");
        assert_eq!(json["delivery"], "Yes");
        assert_eq!(json["website"], "http://pizza.com");
    }

    #[test]
    fn test_restaurant_reads_legacy_web_site_field() {
        let raw = r#"{"key":"r_1","name":"Pizza Place","cuisine":"Italian","price":"2",
            "rating":"4","phone":"5551234567","address":"1 Main St",
            "webSite":"http://pizza.com","delivery":"Yes"}"#;
        let restaurant: Restaurant = serde_json::from_str(raw).unwrap();
        assert_eq!(restaurant, pizza());
    }

    #[test]
    fn test_summary_and_details() {
        let mut restaurant = pizza();
        assert_eq!(
            restaurant.summary(),
            "\u{2605}\u{2605}\u{2605}\u{2605} star Italian restaurant \
             with a price rating of $$ that DOES deliver."
        );

        restaurant.delivery = Delivery::No;
        assert!(restaurant.summary().ends_with("that DOES NOT deliver."));

        let details = restaurant.details();
        let labels: Vec<&str> = details.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Name", "Cuisine", "Price", "Rating", "Phone", "Address", "Web Site", "Delivery"]
        );
        assert_eq!(details[2].1, "$$");
        assert_eq!(details[7].1, "No");
    }

    #[test]
    fn test_level_order_and_parse() {
        assert!(Level::One < Level::Five);
        assert_eq!("3".parse::<Level>(), Ok(Level::Three));
        assert!("6".parse::<Level>().is_err());
        assert!("03".parse::<Level>().is_err());
    }

    #[test]
    fn test_cuisine_must_be_listed() {
        assert!("Sandwiche Shop".parse::<Cuisine>().is_ok());
        assert!("Klingon".parse::<Cuisine>().is_err());
        assert!("italian".parse::<Cuisine>().is_err());
    }
}
