//! # Form Validation
//!
//! Field rules for the add-person and add-restaurant forms.
//!
//! Every rule runs on submit. [`PersonForm::errors`] / [`RestaurantForm::errors`] report
//! every failing field for inline display, in form order. Building the record
//! ([`PersonForm::into_person`], [`RestaurantForm::into_restaurant`]) stops at the first
//! failing field, in the same order.
//!
//! Values are kept exactly as entered; only the "required" check looks at the trimmed value.

use crate::model::{
    Cuisine, Delivery, Level, Person, PersonForm, PersonKey, Relationship, Restaurant,
    RestaurantForm, RestaurantKey,
};
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\s,'-]+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$").unwrap()
});

const NAME_MIN_LEN: usize = 2;
const ADDRESS_MIN_LEN: usize = 5;

/// A form field, named as in the stored JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Relationship,
    Name,
    Cuisine,
    Price,
    Rating,
    Phone,
    Address,
    Website,
    Delivery,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Relationship => "relationship",
            Field::Name => "name",
            Field::Cuisine => "cuisine",
            Field::Price => "price",
            Field::Rating => "rating",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Website => "website",
            Field::Delivery => "delivery",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected field value and the message to show next to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

type Checked<T> = Result<T, ValidationError>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_name(field: Field, value: &str) -> Checked<String> {
    let (required, label) = match field {
        Field::FirstName => ("First Name is required", "First Name"),
        Field::LastName => ("Last Name is required", "Last Name"),
        _ => ("Restaurant name is required", "Name"),
    };
    if is_blank(value) {
        return Err(ValidationError::new(field, required));
    }
    if value.chars().count() < NAME_MIN_LEN {
        return Err(ValidationError::new(
            field,
            format!("{label} must be at least {NAME_MIN_LEN} characters"),
        ));
    }
    if !NAME_RE.is_match(value) {
        return Err(ValidationError::new(
            field,
            format!("{label} contains invalid characters"),
        ));
    }
    Ok(value.to_string())
}

fn check_phone(value: &str) -> Checked<String> {
    if is_blank(value) {
        return Err(ValidationError::new(Field::Phone, "Phone number is required"));
    }
    if !PHONE_RE.is_match(value) {
        return Err(ValidationError::new(
            Field::Phone,
            "Please enter a valid phone number",
        ));
    }
    Ok(value.to_string())
}

fn check_address(value: &str) -> Checked<String> {
    if is_blank(value) {
        return Err(ValidationError::new(Field::Address, "Address is required"));
    }
    if value.chars().count() < ADDRESS_MIN_LEN {
        return Err(ValidationError::new(Field::Address, "Address is too short"));
    }
    Ok(value.to_string())
}

fn check_website(value: &str) -> Checked<String> {
    if is_blank(value) {
        return Err(ValidationError::new(Field::Website, "Website is required"));
    }
    if !URL_RE.is_match(value) {
        return Err(ValidationError::new(
            Field::Website,
            "Please enter a valid website URL (e.g., http://example.com)",
        ));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ValidationError::new(
            Field::Website,
            "URL must start with http:// or https://",
        ));
    }
    Ok(value.to_string())
}

fn check_relationship(value: &str) -> Checked<Relationship> {
    if is_blank(value) {
        return Err(ValidationError::new(
            Field::Relationship,
            "Relationship is required",
        ));
    }
    value.parse().map_err(|_| {
        ValidationError::new(Field::Relationship, "Please select a valid relationship")
    })
}

/// Parse a cuisine selection. Also used for the selection filter.
pub fn check_cuisine(value: &str) -> Checked<Cuisine> {
    if is_blank(value) {
        return Err(ValidationError::new(Field::Cuisine, "Cuisine is required"));
    }
    value
        .parse()
        .map_err(|_| ValidationError::new(Field::Cuisine, "Please select a valid cuisine"))
}

/// Parse a price (`field = Price`) or rating (`field = Rating`) selection.
pub fn check_level(field: Field, value: &str) -> Checked<Level> {
    let label = match field {
        Field::Price => "Price",
        _ => "Rating",
    };
    if is_blank(value) {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    value
        .parse()
        .map_err(|_| ValidationError::new(field, format!("{label} must be between 1 and 5")))
}

/// Parse a delivery selection.
pub fn check_delivery(value: &str) -> Checked<Delivery> {
    if is_blank(value) {
        return Err(ValidationError::new(
            Field::Delivery,
            "Please specify delivery option",
        ));
    }
    value
        .parse()
        .map_err(|_| ValidationError::new(Field::Delivery, "Delivery must be Yes or No"))
}

impl PersonForm {
    /// Every failing field, in form order.
    pub fn errors(&self) -> Vec<ValidationError> {
        [
            check_name(Field::FirstName, &self.first_name).err(),
            check_name(Field::LastName, &self.last_name).err(),
            check_relationship(&self.relationship).err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Build the record, or the first failing field.
    pub fn into_person(self, key: PersonKey) -> Result<Person, ValidationError> {
        Ok(Person {
            key,
            first_name: check_name(Field::FirstName, &self.first_name)?,
            last_name: check_name(Field::LastName, &self.last_name)?,
            relationship: check_relationship(&self.relationship)?,
        })
    }
}

impl RestaurantForm {
    /// Every failing field, in form order.
    pub fn errors(&self) -> Vec<ValidationError> {
        [
            check_name(Field::Name, &self.name).err(),
            check_cuisine(&self.cuisine).err(),
            check_level(Field::Price, &self.price).err(),
            check_level(Field::Rating, &self.rating).err(),
            check_phone(&self.phone).err(),
            check_address(&self.address).err(),
            check_website(&self.website).err(),
            check_delivery(&self.delivery).err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Build the record, or the first failing field.
    pub fn into_restaurant(self, key: RestaurantKey) -> Result<Restaurant, ValidationError> {
        Ok(Restaurant {
            key,
            name: check_name(Field::Name, &self.name)?,
            cuisine: check_cuisine(&self.cuisine)?,
            price: check_level(Field::Price, &self.price)?,
            rating: check_level(Field::Rating, &self.rating)?,
            phone: check_phone(&self.phone)?,
            address: check_address(&self.address)?,
            website: check_website(&self.website)?,
            delivery: check_delivery(&self.delivery)?,
        })
    }
}
