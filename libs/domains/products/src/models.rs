use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const NAME_REQUIRED: &str = "El nombre de Producto no puede ir vacio";
pub const PRICE_NOT_NUMERIC: &str = "El precio debe ser Numerico";
pub const PRICE_REQUIRED: &str = "El precio de Producto no puede ir vacio";
pub const PRICE_NOT_POSITIVE: &str = "El precio no puede ser menor a 0";
pub const AVAILABILITY_INVALID: &str = "valor para disponibilidad no valido";

/// A product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by storage, never changes
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    /// Always greater than zero
    #[schema(example = 300)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}

/// Checked values written by create and update
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

/// Body for creating a product.
///
/// Fields are kept as raw JSON so that every rule violation, including a
/// wrong type, is reported in one response. `availability` defaults to `true`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    #[schema(value_type = String, example = "Monitor Curvo de 49 Pulgadas")]
    pub name: Value,

    /// A JSON number or a numeric string
    #[serde(default)]
    #[schema(value_type = f64, example = 300)]
    pub price: Value,

    #[serde(default)]
    #[schema(value_type = Option<bool>, example = true)]
    pub availability: Option<Value>,
}

/// Body for replacing all mutable fields of a product
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    #[schema(value_type = String, example = "Monitor Curvo de 49 Pulgadas")]
    pub name: Value,

    #[serde(default)]
    #[schema(value_type = f64, example = 399)]
    pub price: Value,

    #[serde(default)]
    #[schema(value_type = bool, example = true)]
    pub availability: Value,
}

impl CreateProduct {
    /// Checks every field and returns the typed values, or all violations.
    pub fn parse(&self) -> Result<ProductFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = collect(&mut errors, "name", parse_name(&self.name));
        let price = collect(&mut errors, "price", parse_price(&self.price));
        let availability = match &self.availability {
            None => Some(true),
            Some(value) => collect(&mut errors, "availability", parse_availability(value)),
        };

        match (name, price, availability) {
            (Some(name), Some(price), Some(availability)) => Ok(ProductFields {
                name,
                price,
                availability,
            }),
            _ => Err(errors),
        }
    }
}

impl UpdateProduct {
    /// Checks every field and returns the typed values, or all violations.
    pub fn parse(&self) -> Result<ProductFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = collect(&mut errors, "name", parse_name(&self.name));
        let price = collect(&mut errors, "price", parse_price(&self.price));
        let availability = collect(
            &mut errors,
            "availability",
            parse_availability(&self.availability),
        );

        match (name, price, availability) {
            (Some(name), Some(price), Some(availability)) => Ok(ProductFields {
                name,
                price,
                availability,
            }),
            _ => Err(errors),
        }
    }
}

impl Validate for CreateProduct {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }
}

impl Validate for UpdateProduct {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.parse().map(|_| ())
    }
}

fn collect<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    result: Result<T, Vec<ValidationError>>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(failures) => {
            for failure in failures {
                errors.add(field, failure);
            }
            None
        }
    }
}

fn rule(code: &'static str, message: &'static str, value: &Value) -> ValidationError {
    let mut error = ValidationError::new(code).with_message(Cow::Borrowed(message));
    if !value.is_null() {
        error.add_param(Cow::Borrowed("value"), value);
    }
    error
}

/// Strings must be non-empty; numbers and booleans are stored as their text.
fn parse_name(value: &Value) -> Result<String, Vec<ValidationError>> {
    match value {
        Value::String(name) if !name.is_empty() => Ok(name.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(vec![rule("required", NAME_REQUIRED, value)]),
    }
}

/// Numeric check, emptiness check and positivity check, each reported
/// separately when it fails.
fn parse_price(value: &Value) -> Result<f64, Vec<ValidationError>> {
    let empty = match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    };
    let numeric = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) if is_numeric(text) => text.parse::<f64>().ok(),
        _ => None,
    };

    let mut failures = Vec::new();
    if numeric.is_none() {
        failures.push(rule("numeric", PRICE_NOT_NUMERIC, value));
    }
    if empty {
        failures.push(rule("required", PRICE_REQUIRED, value));
    }

    match numeric {
        Some(price) if price > 0.0 => Ok(price),
        _ => {
            failures.push(rule("positive", PRICE_NOT_POSITIVE, value));
            Err(failures)
        }
    }
}

/// Accepts JSON booleans and the loose forms `"true"`, `"false"`, `"1"`, `"0"`, `1`, `0`.
fn parse_availability(value: &Value) -> Result<bool, Vec<ValidationError>> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::String(text) if text == "true" || text == "1" => Ok(true),
        Value::String(text) if text == "false" || text == "0" => Ok(false),
        Value::Number(number) if number.as_u64() == Some(1) => Ok(true),
        Value::Number(number) if number.as_u64() == Some(0) => Ok(false),
        _ => Err(vec![rule("boolean", AVAILABILITY_INVALID, value)]),
    }
}

/// Optional sign, optional integer part, optional `.`, then at least one digit.
fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or(("", unsigned));

    !fraction.is_empty()
        && integer.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

impl Product {
    pub fn new(id: i32, fields: ProductFields) -> Self {
        Self {
            id,
            name: fields.name,
            price: fields.price,
            availability: fields.availability,
        }
    }

    pub fn apply_update(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.availability = fields.availability;
    }
}

/// `{"data": Product}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub data: Product,
}

/// `{"data": [Product]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductListResponse {
    pub data: Vec<Product>,
}

/// `{"data": "<message>"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Producto Eliminado")]
    pub data: String,
}
