//! Restaurant filter applied when a session moves from filtering to choosing.

use crate::model::{Cuisine, Delivery, Level, Restaurant};
use crate::validation::{check_cuisine, check_delivery, check_level, Field, ValidationError};
use std::fmt::Display;

/// The criteria a session can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Cuisine,
    Price,
    Rating,
    Delivery,
}

impl Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FilterField::Cuisine => "cuisine",
            FilterField::Price => "price",
            FilterField::Rating => "rating",
            FilterField::Delivery => "delivery",
        })
    }
}

/// Active criteria. Unset criteria match everything.
///
/// - cuisine: equal
/// - price: restaurant price at most the chosen level
/// - rating: restaurant rating at least the chosen level
/// - delivery: equal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantFilter {
    pub cuisine: Option<Cuisine>,
    pub max_price: Option<Level>,
    pub min_rating: Option<Level>,
    pub delivery: Option<Delivery>,
}

impl RestaurantFilter {
    /// Set one criterion from its raw selection. A blank value clears it.
    /// An invalid value is rejected and the filter is left unchanged.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), ValidationError> {
        let clear = value.trim().is_empty();
        match field {
            FilterField::Cuisine => {
                self.cuisine = if clear { None } else { Some(check_cuisine(value)?) };
            }
            FilterField::Price => {
                self.max_price = if clear {
                    None
                } else {
                    Some(check_level(Field::Price, value)?)
                };
            }
            FilterField::Rating => {
                self.min_rating = if clear {
                    None
                } else {
                    Some(check_level(Field::Rating, value)?)
                };
            }
            FilterField::Delivery => {
                self.delivery = if clear { None } else { Some(check_delivery(value)?) };
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.cuisine
            .as_ref()
            .is_none_or(|cuisine| restaurant.cuisine == *cuisine)
            && self.max_price.is_none_or(|max| restaurant.price <= max)
            && self.min_rating.is_none_or(|min| restaurant.rating >= min)
            && self
                .delivery
                .is_none_or(|delivery| restaurant.delivery == delivery)
    }

    /// Keep the matching restaurants, in catalog order.
    pub fn apply(&self, restaurants: Vec<Restaurant>) -> Vec<Restaurant> {
        restaurants.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RestaurantKey;

    fn restaurant(
        name: &str,
        cuisine: &str,
        price: Level,
        rating: Level,
        delivery: Delivery,
    ) -> Restaurant {
        Restaurant {
            key: RestaurantKey::from(name),
            name: name.to_string(),
            cuisine: cuisine.parse().unwrap(),
            price,
            rating,
            phone: "5551234567".to_string(),
            address: "1 Main St".to_string(),
            website: "http://example.com".to_string(),
            delivery,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RestaurantFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&restaurant("A", "Thai", Level::Five, Level::One, Delivery::No)));
    }

    #[test]
    fn test_price_is_a_ceiling_and_rating_a_floor() {
        let mut filter = RestaurantFilter::default();
        filter.set(FilterField::Price, "3").unwrap();
        filter.set(FilterField::Rating, "4").unwrap();

        assert!(filter.matches(&restaurant("A", "Thai", Level::Three, Level::Four, Delivery::No)));
        assert!(filter.matches(&restaurant("B", "Thai", Level::One, Level::Five, Delivery::No)));
        assert!(!filter.matches(&restaurant("C", "Thai", Level::Four, Level::Five, Delivery::No)));
        assert!(!filter.matches(&restaurant("D", "Thai", Level::Two, Level::Three, Delivery::No)));
    }

    #[test]
    fn test_cuisine_and_delivery_are_exact() {
        let mut filter = RestaurantFilter::default();
        filter.set(FilterField::Cuisine, "Italian").unwrap();
        filter.set(FilterField::Delivery, "Yes").unwrap();

        let kept = filter.apply(vec![
            restaurant("A", "Italian", Level::Two, Level::Four, Delivery::Yes),
            restaurant("B", "Italian", Level::Two, Level::Four, Delivery::No),
            restaurant("C", "Sushi", Level::Two, Level::Four, Delivery::Yes),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "A");
    }

    #[test]
    fn test_blank_value_clears_and_invalid_value_is_rejected() {
        let mut filter = RestaurantFilter::default();
        filter.set(FilterField::Delivery, "No").unwrap();
        assert!(!filter.is_empty());

        let err = filter.set(FilterField::Delivery, "Maybe").unwrap_err();
        assert_eq!(err.field, Field::Delivery);
        assert_eq!(filter.delivery, Some(Delivery::No));

        filter.set(FilterField::Delivery, "").unwrap();
        assert!(filter.is_empty());
    }
}
