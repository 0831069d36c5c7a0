//! Menu and menu-item endpoints

use crate::api::client::PortalClient;
use crate::api::error::ApiResult;
use crate::api::types::{
    MenuCreate, MenuItemCreate, MenuItemOut, MenuItemUpdate, MenuOut, MenuUpdate, StatusOk,
};
use uuid::Uuid;

impl PortalClient {
    pub async fn list_menus(&self) -> ApiResult<Vec<MenuOut>> {
        self.get("/store/menus").await
    }

    pub async fn create_menu(&self, payload: &MenuCreate) -> ApiResult<MenuOut> {
        self.post("/store/menus", payload).await
    }

    pub async fn get_menu(&self, menu_id: Uuid) -> ApiResult<MenuOut> {
        self.get(&format!("/store/menus/{}", menu_id)).await
    }

    pub async fn update_menu(&self, menu_id: Uuid, payload: &MenuUpdate) -> ApiResult<MenuOut> {
        self.patch(&format!("/store/menus/{}", menu_id), payload)
            .await
    }

    pub async fn delete_menu(&self, menu_id: Uuid) -> ApiResult<StatusOk> {
        self.delete(&format!("/store/menus/{}", menu_id)).await
    }

    pub async fn list_menu_items(&self, menu_id: Uuid) -> ApiResult<Vec<MenuItemOut>> {
        self.get(&format!("/store/menus/{}/items", menu_id)).await
    }

    pub async fn create_menu_item(
        &self,
        menu_id: Uuid,
        payload: &MenuItemCreate,
    ) -> ApiResult<MenuItemOut> {
        self.post(&format!("/store/menus/{}/items", menu_id), payload)
            .await
    }

    pub async fn update_menu_item(
        &self,
        menu_id: Uuid,
        item_id: Uuid,
        payload: &MenuItemUpdate,
    ) -> ApiResult<MenuItemOut> {
        self.patch(
            &format!("/store/menus/{}/items/{}", menu_id, item_id),
            payload,
        )
        .await
    }

    pub async fn delete_menu_item(&self, menu_id: Uuid, item_id: Uuid) -> ApiResult<StatusOk> {
        self.delete(&format!("/store/menus/{}/items/{}", menu_id, item_id))
            .await
    }
}
