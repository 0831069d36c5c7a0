//! Menu management screen: a menu list beside an item editor.
//!
//! The item form doubles for create and edit. Price and modifier text are
//! validated locally; a failed validation reports an error without sending
//! anything.

use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::api::types::{
    MenuCreate, MenuItemCreate, MenuItemOut, MenuItemUpdate, MenuOut, MenuUpdate, Money, Patch,
};
use crate::api::PortalClient;

fn set_or_clear<T>(value: Option<T>) -> Patch<T> {
    match value {
        Some(value) => Patch::Set(value),
        None => Patch::Clear,
    }
}

/// Controller for the menus route.
pub struct MenuScreen {
    client: PortalClient,
    menus: Vec<MenuOut>,
    selected_menu_id: Option<Uuid>,
    items: Vec<MenuItemOut>,
    pub new_menu_name: String,
    editing_item_id: Option<Uuid>,
    pub item_name: String,
    pub item_price: String,
    pub item_description: String,
    pub item_available: bool,
    pub item_tags: String,
    pub item_modifiers_json: String,
    error: Option<String>,
}

impl MenuScreen {
    pub fn new(client: PortalClient) -> Self {
        Self {
            client,
            menus: Vec::new(),
            selected_menu_id: None,
            items: Vec::new(),
            new_menu_name: String::new(),
            editing_item_id: None,
            item_name: String::new(),
            item_price: String::new(),
            item_description: String::new(),
            item_available: true,
            item_tags: String::new(),
            item_modifiers_json: String::new(),
            error: None,
        }
    }

    pub fn menus(&self) -> &[MenuOut] {
        &self.menus
    }

    pub fn items(&self) -> &[MenuItemOut] {
        &self.items
    }

    pub fn selected_menu_id(&self) -> Option<Uuid> {
        self.selected_menu_id
    }

    pub fn selected_menu(&self) -> Option<&MenuOut> {
        self.selected_menu_id
            .and_then(|id| self.menus.iter().find(|m| m.id == id))
    }

    pub fn editing_item_id(&self) -> Option<Uuid> {
        self.editing_item_id
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Initial fetch. Keeps the current selection when still possible,
    /// otherwise falls back to the first menu.
    pub async fn load(&mut self) {
        self.error = None;
        match self.client.list_menus().await {
            Ok(menus) => {
                self.menus = menus;
                let next = self
                    .selected_menu_id
                    .or_else(|| self.menus.first().map(|m| m.id));
                self.select_menu(next).await;
            }
            Err(err) => {
                warn!("Menu list failed: {err}");
                self.error = Some("Failed to load menus".to_string());
            }
        }
    }

    /// Changes the highlighted menu and loads its items.
    pub async fn select_menu(&mut self, menu_id: Option<Uuid>) {
        self.selected_menu_id = menu_id;
        match menu_id {
            Some(id) => match self.client.list_menu_items(id).await {
                Ok(items) => self.items = items,
                Err(err) => {
                    warn!("Item list failed for menu {id}: {err}");
                    self.error = Some("Failed to load menu items".to_string());
                }
            },
            None => self.items.clear(),
        }
    }

    /// Creates a menu from the name field and selects it. Blank input is
    /// ignored.
    pub async fn create_menu(&mut self) {
        let name = self.new_menu_name.trim().to_string();
        if name.is_empty() {
            return;
        }
        self.error = None;
        let created = match self.client.create_menu(&MenuCreate::new(name)).await {
            Ok(created) => created,
            Err(err) => {
                warn!("Menu create failed: {err}");
                self.error = Some("Failed to create menu".to_string());
                return;
            }
        };
        self.new_menu_name.clear();
        match self.client.list_menus().await {
            Ok(menus) => {
                self.menus = menus;
                self.select_menu(Some(created.id)).await;
            }
            Err(err) => {
                warn!("Menu reload failed: {err}");
                self.error = Some("Failed to create menu".to_string());
            }
        }
    }

    pub async fn toggle_menu_active(&mut self, menu_id: Uuid) {
        let Some(active) = self.menus.iter().find(|m| m.id == menu_id).map(|m| m.active) else {
            return;
        };
        self.error = None;
        let payload = MenuUpdate {
            active: Some(!active),
            ..MenuUpdate::default()
        };
        match self.client.update_menu(menu_id, &payload).await {
            Ok(updated) => {
                if let Some(slot) = self.menus.iter_mut().find(|m| m.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(err) => {
                warn!("Menu update failed: {err}");
                self.error = Some("Failed to update menu".to_string());
            }
        }
    }

    /// Deletes a menu and moves the selection to the first remaining one.
    pub async fn delete_menu(&mut self, menu_id: Uuid) {
        self.error = None;
        match self.client.delete_menu(menu_id).await {
            Ok(_) => {
                self.menus.retain(|m| m.id != menu_id);
                let next = self.menus.first().map(|m| m.id);
                self.select_menu(next).await;
            }
            Err(err) => {
                warn!("Menu delete failed: {err}");
                self.error = Some("Failed to delete menu".to_string());
            }
        }
    }

    /// Loads an item into the form for editing.
    pub fn edit_item(&mut self, item_id: Uuid) {
        let Some(item) = self.items.iter().find(|i| i.id == item_id) else {
            return;
        };
        self.editing_item_id = Some(item.id);
        self.item_name = item.name.clone();
        self.item_price = item.price.to_string();
        self.item_description = item.description.clone().unwrap_or_default();
        self.item_available = item.availability;
        self.item_tags = item.tags.as_deref().unwrap_or_default().join(", ");
        self.item_modifiers_json = item
            .modifiers
            .as_ref()
            .and_then(|m| serde_json::to_string_pretty(m).ok())
            .unwrap_or_default();
    }

    pub fn reset_item_form(&mut self) {
        self.editing_item_id = None;
        self.item_name.clear();
        self.item_price.clear();
        self.item_description.clear();
        self.item_available = true;
        self.item_tags.clear();
        self.item_modifiers_json.clear();
    }

    /// Creates or updates an item from the form.
    ///
    /// Validation failures set an error and leave the form untouched, with
    /// nothing sent. A new item is prepended to the list; an edited one
    /// replaces itself in place. Both paths reset the form on success.
    pub async fn submit_item(&mut self) {
        let Some(menu_id) = self.selected_menu_id else {
            return;
        };
        let name = self.item_name.trim().to_string();
        if name.is_empty() {
            return;
        }

        let price = match self.item_price.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Money::from(value),
            _ => {
                self.error = Some("Invalid price".to_string());
                return;
            }
        };

        let modifiers_text = self.item_modifiers_json.trim();
        let modifiers = if modifiers_text.is_empty() {
            None
        } else {
            match serde_json::from_str::<Value>(modifiers_text) {
                Ok(Value::Object(map)) => Some(map),
                _ => {
                    self.error = Some("Modifiers must be valid JSON".to_string());
                    return;
                }
            }
        };

        let description = {
            let trimmed = self.item_description.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        let tags: Vec<String> = self
            .item_tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let tags = (!tags.is_empty()).then_some(tags);
        let availability = self.item_available;

        self.error = None;

        let outcome = if let Some(item_id) = self.editing_item_id {
            let payload = MenuItemUpdate {
                name: Patch::Set(name),
                price: Patch::Set(price),
                description: set_or_clear(description),
                tags: set_or_clear(tags),
                availability: Patch::Set(availability),
                modifiers: set_or_clear(modifiers),
            };
            self.client
                .update_menu_item(menu_id, item_id, &payload)
                .await
                .map(|updated| {
                    if let Some(slot) = self.items.iter_mut().find(|i| i.id == updated.id) {
                        *slot = updated;
                    }
                })
        } else {
            let payload = MenuItemCreate {
                name,
                price,
                description,
                tags,
                availability,
                modifiers,
            };
            self.client
                .create_menu_item(menu_id, &payload)
                .await
                .map(|created| self.items.insert(0, created))
        };

        match outcome {
            Ok(()) => self.reset_item_form(),
            Err(err) => {
                warn!("Item save failed: {err}");
                self.error = Some("Failed to save menu item".to_string());
            }
        }
    }

    pub async fn delete_item(&mut self, item_id: Uuid) {
        let Some(menu_id) = self.selected_menu_id else {
            return;
        };
        self.error = None;
        match self.client.delete_menu_item(menu_id, item_id).await {
            Ok(_) => {
                self.items.retain(|i| i.id != item_id);
                if self.editing_item_id == Some(item_id) {
                    self.reset_item_form();
                }
            }
            Err(err) => {
                warn!("Item delete failed: {err}");
                self.error = Some("Failed to delete item".to_string());
            }
        }
    }
}
