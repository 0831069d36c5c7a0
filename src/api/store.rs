//! Store profile endpoints

use crate::api::client::PortalClient;
use crate::api::error::ApiResult;
use crate::api::types::{StoreMe, StoreMeUpdate};

impl PortalClient {
    pub async fn get_me(&self) -> ApiResult<StoreMe> {
        self.get("/store/me").await
    }

    pub async fn update_me(&self, payload: &StoreMeUpdate) -> ApiResult<StoreMe> {
        self.patch("/store/me", payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{json_reply, ScriptedTransport};
    use crate::api::types::Patch;
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_update_me_sends_only_provided_fields() {
        let store_id = Uuid::new_v4();

        let transport = Arc::new(ScriptedTransport::new());
        transport.route("/store/me", move |request, _| {
            assert_eq!(
                request.body.clone().unwrap(),
                json!({"name": "Corner Deli", "phone": null})
            );
            json_reply(
                200,
                json!({
                    "id": store_id,
                    "name": "Corner Deli",
                    "phone": null,
                    "address_line1": null,
                    "address_line2": null,
                    "city": null,
                    "state": null,
                    "postal_code": null,
                    "country": null,
                    "timezone": null,
                    "allow_pickup": true,
                    "allow_delivery": true,
                    "min_order_amount": null,
                    "email": "owner@example.com",
                    "created_at": "2026-02-11T09:30:00",
                }),
            )
        });

        let client = PortalClient::new(transport);
        let me = client
            .update_me(&StoreMeUpdate {
                name: Patch::Set("Corner Deli".to_string()),
                phone: Patch::Clear,
                ..StoreMeUpdate::default()
            })
            .await
            .unwrap();

        assert_eq!(me.name, "Corner Deli");
        assert!(me.phone.is_none());
    }
}
