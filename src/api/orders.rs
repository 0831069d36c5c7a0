//! Order endpoints

use crate::api::client::PortalClient;
use crate::api::error::ApiResult;
use crate::api::types::{OrderItemOut, OrderOut, OrderStatusUpdate};
use uuid::Uuid;

impl PortalClient {
    pub async fn list_orders(&self) -> ApiResult<Vec<OrderOut>> {
        self.get("/store/orders").await
    }

    pub async fn get_order(&self, order_id: Uuid) -> ApiResult<OrderOut> {
        self.get(&format!("/store/orders/{}", order_id)).await
    }

    pub async fn list_order_items(&self, order_id: Uuid) -> ApiResult<Vec<OrderItemOut>> {
        self.get(&format!("/store/orders/{}/items", order_id)).await
    }

    pub async fn update_order_status(&self, order_id: Uuid, status: &str) -> ApiResult<OrderOut> {
        let payload = OrderStatusUpdate {
            status: status.to_string(),
        };
        self.patch(&format!("/store/orders/{}", order_id), &payload)
            .await
    }
}
