//! Draft shipping and payment form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields of the checkout form, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckoutField {
    FullName,
    Address,
    City,
    ZipCode,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl CheckoutField {
    /// Every field, in form order.
    pub const ALL: [CheckoutField; 7] = [
        CheckoutField::FullName,
        CheckoutField::Address,
        CheckoutField::City,
        CheckoutField::ZipCode,
        CheckoutField::CardNumber,
        CheckoutField::ExpiryDate,
        CheckoutField::Cvv,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutField::FullName => "fullName",
            CheckoutField::Address => "address",
            CheckoutField::City => "city",
            CheckoutField::ZipCode => "zipCode",
            CheckoutField::CardNumber => "cardNumber",
            CheckoutField::ExpiryDate => "expiryDate",
            CheckoutField::Cvv => "cvv",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::FullName => "Full Name",
            CheckoutField::Address => "Address",
            CheckoutField::City => "City",
            CheckoutField::ZipCode => "ZIP Code",
            CheckoutField::CardNumber => "Card Number",
            CheckoutField::ExpiryDate => "Expiry Date",
            CheckoutField::Cvv => "CVV",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown checkout field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for CheckoutField {
    type Err = UnknownField;

    /// Accepts `zipCode`, `zip_code` and `zipcode` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        CheckoutField::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == normalized)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Draft checkout form.
///
/// All fields are free text. The form is ready once every field is
/// non-empty; whitespace counts as content and no format checks are made.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a field.
    pub fn update(&mut self, field: CheckoutField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Read a field.
    pub fn get(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FullName => &self.full_name,
            CheckoutField::Address => &self.address,
            CheckoutField::City => &self.city,
            CheckoutField::ZipCode => &self.zip_code,
            CheckoutField::CardNumber => &self.card_number,
            CheckoutField::ExpiryDate => &self.expiry_date,
            CheckoutField::Cvv => &self.cvv,
        }
    }

    /// Check if every field is filled in.
    pub fn is_ready_to_submit(&self) -> bool {
        CheckoutField::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Empty fields, in form order.
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        CheckoutField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Card number with all but the last four characters masked.
    pub fn masked_card_number(&self) -> String {
        let chars: Vec<char> = self.card_number.chars().filter(|c| !c.is_whitespace()).collect();
        let visible = chars.len().saturating_sub(4);
        chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }

    fn slot_mut(&mut self, field: CheckoutField) -> &mut String {
        match field {
            CheckoutField::FullName => &mut self.full_name,
            CheckoutField::Address => &mut self.address,
            CheckoutField::City => &mut self.city,
            CheckoutField::ZipCode => &mut self.zip_code,
            CheckoutField::CardNumber => &mut self.card_number,
            CheckoutField::ExpiryDate => &mut self.expiry_date,
            CheckoutField::Cvv => &mut self.cvv,
        }
    }
}
