use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Decimal amount, carried as the backend's canonical string form.
///
/// The backend serializes decimals as JSON strings while forms produce plain
/// numbers; both deserialize. Serialization always emits the string form,
/// which the backend's decimal parsing accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money(String);

impl Money {
    pub fn new(raw: impl Into<String>) -> Self {
        Money(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, `None` when the text is not a finite number.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Money(value.to_string())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Money(s)),
            Value::Number(n) => Ok(Money(n.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected string or number for money amount, got {}",
                other
            ))),
        }
    }
}

/// Tri-state PATCH field: leave unchanged, clear to null, or set a value.
///
/// `Keep` fields are omitted from the request body (pair with
/// `skip_serializing_if = "Patch::is_keep"`), which is how the backend tells
/// "not provided" apart from "set to null".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Keep | Patch::Clear => serializer.serialize_none(),
            Patch::Set(value) => value.serialize(serializer),
        }
    }
}

// Auth

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// `{"status": "ok"}` acknowledgement body (logout, deletes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOk {
    pub status: String,
}

// Store profile

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMe {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub allow_pickup: Option<bool>,
    #[serde(default)]
    pub allow_delivery: Option<bool>,
    #[serde(default)]
    pub min_order_amount: Option<Money>,
    pub email: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreMeUpdate {
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub phone: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub address_line1: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub address_line2: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub city: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub state: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub postal_code: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub country: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub timezone: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub allow_pickup: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub allow_delivery: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub min_order_amount: Patch<Money>,
}

// Menus

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuOut {
    pub id: Uuid,
    pub store_id: Uuid,
    pub name: String,
    pub active: bool,
    pub version: i64,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuCreate {
    pub name: String,
    pub active: bool,
}

impl MenuCreate {
    /// New menu with the backend's default `active = true`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemOut {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub availability: bool,
    #[serde(default)]
    pub modifiers: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: Money,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub availability: bool,
    pub modifiers: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuItemUpdate {
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub name: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub price: Patch<Money>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub tags: Patch<Vec<String>>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub availability: Patch<bool>,
    #[serde(skip_serializing_if = "Patch::is_keep")]
    pub modifiers: Patch<Map<String, Value>>,
}

// Orders

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderOut {
    pub id: Uuid,
    pub store_id: Uuid,
    #[serde(default)]
    pub user_id: Option<Uuid>,
    pub status: String,
    pub channel: String,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemOut {
    pub id: Uuid,
    pub order_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: u32,
    pub price_snapshot: Money,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_deserializes_from_string_and_number() {
        let from_string: Money = serde_json::from_value(json!("12.50")).unwrap();
        assert_eq!(from_string.as_str(), "12.50");
        assert_eq!(from_string.to_f64(), Some(12.5));

        let from_number: Money = serde_json::from_value(json!(9.99)).unwrap();
        assert_eq!(from_number.to_f64(), Some(9.99));

        let err = serde_json::from_value::<Money>(json!(true));
        assert!(err.is_err());
    }

    #[test]
    fn test_money_serializes_as_string() {
        let value = serde_json::to_value(Money::new("4.20")).unwrap();
        assert_eq!(value, json!("4.20"));
    }

    #[test]
    fn test_money_rejects_non_numeric_text_on_read() {
        let money = Money::new("not-a-price");
        assert_eq!(money.to_f64(), None);
    }

    #[test]
    fn test_patch_fields_distinguish_keep_clear_set() {
        let update = StoreMeUpdate {
            phone: Patch::Clear,
            city: Patch::Set("Lisbon".to_string()),
            allow_pickup: Patch::Set(true),
            ..StoreMeUpdate::default()
        };
        let body = serde_json::to_value(&update).unwrap();

        assert_eq!(
            body,
            json!({
                "phone": null,
                "city": "Lisbon",
                "allow_pickup": true,
            })
        );
    }

    #[test]
    fn test_signup_request_omits_blank_phone() {
        let body = serde_json::to_value(SignupRequest {
            email: "owner@example.com".to_string(),
            password: "password123".to_string(),
            name: "Corner Deli".to_string(),
            phone: None,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({
                "email": "owner@example.com",
                "password": "password123",
                "name": "Corner Deli",
            })
        );
    }

    #[test]
    fn test_token_type_defaults_to_bearer() {
        let parsed: AccessTokenResponse =
            serde_json::from_value(json!({"access_token": "abc"})).unwrap();
        assert_eq!(parsed.token_type, "bearer");
    }

    #[test]
    fn test_menu_item_out_tolerates_missing_optionals() {
        let parsed: MenuItemOut = serde_json::from_value(json!({
            "id": "4b4b3a43-9c5c-4f3e-9b80-1a55dcd9b368",
            "menu_id": "c9dd2c75-6f29-4bcd-9a9e-52b4a31db848",
            "name": "Espresso",
            "price": "2.50",
            "availability": true,
        }))
        .unwrap();

        assert!(parsed.description.is_none());
        assert!(parsed.tags.is_none());
        assert!(parsed.modifiers.is_none());
        assert_eq!(parsed.price.as_str(), "2.50");
    }

    #[test]
    fn test_naive_timestamps_parse() {
        let parsed: MenuOut = serde_json::from_value(json!({
            "id": "4b4b3a43-9c5c-4f3e-9b80-1a55dcd9b368",
            "store_id": "c9dd2c75-6f29-4bcd-9a9e-52b4a31db848",
            "name": "Lunch",
            "active": true,
            "version": 3,
            "updated_at": "2026-02-11T09:30:00.123456",
        }))
        .unwrap();
        assert_eq!(parsed.version, 3);
    }
}
