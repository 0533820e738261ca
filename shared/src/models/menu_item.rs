//! Menu Item Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::util::DEFAULT_TIMESTAMP_MS;

const ITEM_ID: &str = "itemId";
const NAME: &str = "name";
const PRICE: &str = "price";
const MODIFIER_IDS: &str = "modifierIds";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// Menu item entity
///
/// Stored as the record's own ordered JSON object so an item written back
/// keeps every key, value and key position it was read with. The fields the
/// catalog tooling needs are read through accessors that apply defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItem {
    fields: Map<String, Value>,
}

impl MenuItem {
    pub fn new(item_id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        let mut fields = Map::new();
        fields.insert(ITEM_ID.to_string(), Value::String(item_id.into()));
        fields.insert(NAME.to_string(), Value::String(name.into()));
        if let Some(price) = Number::from_f64(price) {
            fields.insert(PRICE.to_string(), Value::Number(price));
        }
        Self { fields }
    }

    /// Raw record
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.fields
    }

    /// `itemId`, empty when absent or not a string
    pub fn item_id(&self) -> &str {
        self.str_field(ITEM_ID)
    }

    /// `name`, empty when absent or not a string
    pub fn name(&self) -> &str {
        self.str_field(NAME)
    }

    /// Price, 0 when absent or not a number
    pub fn price(&self) -> f64 {
        self.price_if_set().unwrap_or(0.0)
    }

    /// Price, `None` when absent or not a number
    pub fn price_if_set(&self) -> Option<f64> {
        self.fields.get(PRICE).and_then(Value::as_f64)
    }

    /// Write a price of 0 if the record has no `price` key; an existing
    /// value (even `null`) is left as it is
    pub fn ensure_price(&mut self) {
        if !self.fields.contains_key(PRICE) {
            self.fields.insert(PRICE.to_string(), Value::Number(Number::from(0)));
        }
    }

    pub fn modifier_ids(&self) -> Option<Vec<&str>> {
        self.fields
            .get(MODIFIER_IDS)?
            .as_array()
            .map(|ids| ids.iter().filter_map(Value::as_str).collect())
    }

    /// Replace `modifierIds`; a new key goes after the existing ones
    pub fn set_modifier_ids(&mut self, ids: Vec<String>) {
        let ids = ids.into_iter().map(Value::String).collect();
        self.fields.insert(MODIFIER_IDS.to_string(), Value::Array(ids));
    }

    /// `createdAt` as written (integer or not), default when absent
    pub fn created_at_or_default(&self) -> Number {
        self.timestamp_field(CREATED_AT)
    }

    pub fn updated_at_or_default(&self) -> Number {
        self.timestamp_field(UPDATED_AT)
    }

    fn str_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn timestamp_field(&self, key: &str) -> Number {
        match self.fields.get(key) {
            Some(Value::Number(n)) => n.clone(),
            _ => Number::from(DEFAULT_TIMESTAMP_MS),
        }
    }
}
