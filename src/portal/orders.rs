//! Orders screen: order list with a detail pane and a status picker.

use tracing::warn;
use uuid::Uuid;

use crate::api::types::{OrderItemOut, OrderOut};
use crate::api::PortalClient;

/// Statuses offered by the picker alongside the order's current one.
pub const COMMON_STATUSES: [&str; 6] = [
    "draft",
    "confirmed",
    "preparing",
    "ready",
    "completed",
    "cancelled",
];

/// Controller for the orders route.
pub struct OrdersScreen {
    client: PortalClient,
    orders: Vec<OrderOut>,
    selected_order_id: Option<Uuid>,
    items: Vec<OrderItemOut>,
    error: Option<String>,
}

impl OrdersScreen {
    pub fn new(client: PortalClient) -> Self {
        Self {
            client,
            orders: Vec::new(),
            selected_order_id: None,
            items: Vec::new(),
            error: None,
        }
    }

    pub fn orders(&self) -> &[OrderOut] {
        &self.orders
    }

    pub fn items(&self) -> &[OrderItemOut] {
        &self.items
    }

    pub fn selected_order(&self) -> Option<&OrderOut> {
        self.selected_order_id
            .and_then(|id| self.orders.iter().find(|o| o.id == id))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetches the order list, keeping the current selection when still
    /// present and falling back to the first order. Also used by the
    /// Refresh button.
    pub async fn load(&mut self) {
        self.error = None;
        match self.client.list_orders().await {
            Ok(orders) => {
                self.orders = orders;
                let next = self
                    .selected_order_id
                    .or_else(|| self.orders.first().map(|o| o.id));
                self.select_order(next).await;
            }
            Err(err) => {
                warn!("Order list failed: {err}");
                self.error = Some("Failed to load orders".to_string());
            }
        }
    }

    pub async fn select_order(&mut self, order_id: Option<Uuid>) {
        self.selected_order_id = order_id;
        match order_id {
            Some(id) => {
                self.error = None;
                match self.client.list_order_items(id).await {
                    Ok(items) => self.items = items,
                    Err(err) => {
                        warn!("Order item list failed for {id}: {err}");
                        self.error = Some("Failed to load order items".to_string());
                    }
                }
            }
            None => self.items.clear(),
        }
    }

    /// Picker entries: the order's current status first, then the common
    /// ones, without duplicates.
    pub fn status_options(&self) -> Vec<String> {
        let mut options = Vec::with_capacity(COMMON_STATUSES.len() + 1);
        if let Some(order) = self.selected_order() {
            options.push(order.status.clone());
        }
        for status in COMMON_STATUSES {
            if !options.iter().any(|s| s == status) {
                options.push(status.to_string());
            }
        }
        options
    }

    /// Moves the selected order to `status`, replacing it in the list.
    pub async fn set_status(&mut self, status: &str) {
        let Some(order_id) = self.selected_order().map(|o| o.id) else {
            return;
        };
        self.error = None;
        match self.client.update_order_status(order_id, status).await {
            Ok(updated) => {
                if let Some(slot) = self.orders.iter_mut().find(|o| o.id == updated.id) {
                    *slot = updated;
                }
            }
            Err(err) => {
                warn!("Order update failed for {order_id}: {err}");
                self.error = Some("Failed to update order".to_string());
            }
        }
    }
}
