//! Profile screen: the store's own record as an editable settings form.
//!
//! Blank text fields clear the stored value, except the store name, which
//! is required by the backend and is simply left out of the update when
//! blank.

use tracing::warn;

use crate::api::types::{Money, Patch, StoreMe, StoreMeUpdate};
use crate::api::PortalClient;

fn clear_when_blank(text: &str) -> Patch<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Patch::Clear
    } else {
        Patch::Set(trimmed.to_string())
    }
}

/// Controller for the profile route.
pub struct ProfileScreen {
    client: PortalClient,
    me: Option<StoreMe>,
    pub name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub timezone: String,
    pub allow_pickup: bool,
    pub allow_delivery: bool,
    pub min_order: String,
    error: Option<String>,
    message: Option<String>,
}

impl ProfileScreen {
    pub fn new(client: PortalClient) -> Self {
        Self {
            client,
            me: None,
            name: String::new(),
            phone: String::new(),
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            country: String::new(),
            timezone: String::new(),
            allow_pickup: true,
            allow_delivery: true,
            min_order: String::new(),
            error: None,
            message: None,
        }
    }

    pub fn me(&self) -> Option<&StoreMe> {
        self.me.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Fetches the profile and fills the form. Missing optionals become
    /// blanks; missing flags default to enabled.
    pub async fn load(&mut self) {
        self.error = None;
        let me = match self.client.get_me().await {
            Ok(me) => me,
            Err(err) => {
                warn!("Profile load failed: {err}");
                self.error = Some("Failed to load profile".to_string());
                return;
            }
        };
        self.name = me.name.clone();
        self.phone = me.phone.clone().unwrap_or_default();
        self.address_line1 = me.address_line1.clone().unwrap_or_default();
        self.address_line2 = me.address_line2.clone().unwrap_or_default();
        self.city = me.city.clone().unwrap_or_default();
        self.state = me.state.clone().unwrap_or_default();
        self.postal_code = me.postal_code.clone().unwrap_or_default();
        self.country = me.country.clone().unwrap_or_default();
        self.timezone = me.timezone.clone().unwrap_or_default();
        self.allow_pickup = me.allow_pickup.unwrap_or(true);
        self.allow_delivery = me.allow_delivery.unwrap_or(true);
        self.min_order = me
            .min_order_amount
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_default();
        self.me = Some(me);
    }

    /// Sends the form as a partial update.
    ///
    /// A malformed minimum order amount reports an error with nothing sent.
    pub async fn save(&mut self) {
        self.error = None;
        self.message = None;

        let min_order = {
            let trimmed = self.min_order.trim();
            if trimmed.is_empty() {
                Patch::Clear
            } else {
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() && value >= 0.0 => Patch::Set(Money::from(value)),
                    _ => {
                        self.error =
                            Some("Min order amount must be a non-negative number".to_string());
                        return;
                    }
                }
            }
        };

        let name = {
            let trimmed = self.name.trim();
            if trimmed.is_empty() {
                Patch::Keep
            } else {
                Patch::Set(trimmed.to_string())
            }
        };

        let payload = StoreMeUpdate {
            name,
            phone: clear_when_blank(&self.phone),
            address_line1: clear_when_blank(&self.address_line1),
            address_line2: clear_when_blank(&self.address_line2),
            city: clear_when_blank(&self.city),
            state: clear_when_blank(&self.state),
            postal_code: clear_when_blank(&self.postal_code),
            country: clear_when_blank(&self.country),
            timezone: clear_when_blank(&self.timezone),
            allow_pickup: Patch::Set(self.allow_pickup),
            allow_delivery: Patch::Set(self.allow_delivery),
            min_order_amount: min_order,
        };

        match self.client.update_me(&payload).await {
            Ok(updated) => {
                self.me = Some(updated);
                self.message = Some("Saved.".to_string());
            }
            Err(err) => {
                warn!("Profile save failed: {err}");
                self.error = Some("Failed to save profile".to_string());
            }
        }
    }
}
