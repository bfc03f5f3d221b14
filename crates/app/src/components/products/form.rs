//! Product edit form.
//!
//! Holds the raw field values of the product being added or edited and checks
//! them against the product rules before anything is written.

use std::{borrow::Cow, collections::BTreeMap};

use rust_decimal::Decimal;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::products::{
    data::{NewProduct, ProductUpdate},
    records::{ProductId, ProductRecord},
};

/// Whether the form creates a new product or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    #[default]
    Draft,
    Existing(ProductId),
}

/// Field-scoped validation messages, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid product fields: {}", self.fields().join(", "))]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Names of the rejected fields, in order.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    /// A missing value is reported ahead of any other rule on the same field.
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                let error = errors
                    .iter()
                    .find(|error| error.code == "required")
                    .or_else(|| errors.first())?;

                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);

                Some((field.to_string(), message))
            })
            .collect();

        Self(fields)
    }
}

/// The add/edit form bound to the product modal.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProductForm {
    target: EditTarget,

    #[validate(
        custom(function = "validate_required"),
        length(min = 4, message = "The name must be at least 4 characters.")
    )]
    name: String,

    #[validate(custom(function = "validate_price"))]
    price: String,

    active: Option<bool>,
}

/// A form that passed validation, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    pub name: String,
    pub price: Decimal,
    pub active: Option<bool>,
}

impl ValidProduct {
    #[must_use]
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            price: self.price,
            active: self.active,
        }
    }

    /// An unchecked box on an existing product means inactive.
    #[must_use]
    pub fn into_update(self) -> ProductUpdate {
        ProductUpdate {
            name: self.name,
            price: self.price,
            active: self.active.unwrap_or(false),
        }
    }
}

impl ProductForm {
    /// An empty form for a new product.
    #[must_use]
    pub fn draft() -> Self {
        Self::default()
    }

    /// An empty form targeting an existing product, to be filled from input.
    #[must_use]
    pub fn existing(product: ProductId) -> Self {
        Self {
            target: EditTarget::Existing(product),
            ..Self::default()
        }
    }

    /// A form pre-filled with a stored product.
    #[must_use]
    pub fn from_record(product: &ProductRecord) -> Self {
        Self {
            target: EditTarget::Existing(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            active: Some(product.active),
        }
    }

    #[must_use]
    pub fn target(&self) -> EditTarget {
        self.target
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into().trim().to_string();
    }

    #[must_use]
    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into().trim().to_string();
    }

    /// `None` when the flag was never set.
    #[must_use]
    pub fn active(&self) -> Option<bool> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = Some(active);
    }

    /// Check the fields against the product rules.
    ///
    /// # Errors
    ///
    /// Returns the field-scoped messages when any rule fails.
    pub fn check(&self) -> Result<ValidProduct, FieldErrors> {
        self.validate().map_err(|errors| FieldErrors::from(&errors))?;

        let price = parse_price(&self.price).map_err(|error| {
            let mut errors = ValidationErrors::new();

            errors.add("price", error);

            FieldErrors::from(&errors)
        })?;

        Ok(ValidProduct {
            name: self.name.clone(),
            price,
            active: self.active,
        })
    }
}

fn message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);

    error.message = Some(Cow::Borrowed(message));

    error
}

fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(message("required", "The name field is required."));
    }

    Ok(())
}

fn validate_price(value: &str) -> Result<(), ValidationError> {
    parse_price(value).map(|_price| ())
}

fn parse_price(value: &str) -> Result<Decimal, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(message("required", "The price field is required."));
    }

    let price = value
        .parse::<Decimal>()
        .or_else(|_error| Decimal::from_scientific(value))
        .map_err(|_error| message("numeric", "The price must be a number."))?;

    if price < Decimal::ONE || price > Decimal::ONE_HUNDRED {
        return Err(message("between", "The price must be between 1 and 100."));
    }

    Ok(price)
}
