//! Group endpoints, including membership, admin and collection relationships

use serde_json::{json, Value};

use super::AgentMonitorClient;
use crate::error::ClientResult;
use crate::query::id_filter_pairs;

impl AgentMonitorClient {
    /// List groups, optionally restricted to the given ids
    ///
    /// GET /group
    pub fn get_groups<S: AsRef<str>>(&self, ids: &[S]) -> ClientResult<Value> {
        self.get(&["group"], id_filter_pairs(ids))
    }

    /// GET /group/{id}
    pub fn get_group(&self, group_id: &str) -> ClientResult<Value> {
        self.get(&["group", group_id], Vec::new())
    }

    /// POST /group
    pub fn create_group(&self, group: &Value) -> ClientResult<Value> {
        self.post(&["group"], Some(group))
    }

    /// PUT /group/{id}
    pub fn update_group(&self, group_id: &str, group: &Value) -> ClientResult<Value> {
        self.put(&["group", group_id], group)
    }

    /// DELETE /group/{id}
    pub fn delete_group(&self, group_id: &str) -> ClientResult<Value> {
        self.delete(&["group", group_id])
    }

    /// Groups where the user is an admin
    ///
    /// GET /user/{id}/admin-group
    pub fn get_groups_by_admin_user(&self, user_id: &str) -> ClientResult<Value> {
        self.get(&["user", user_id, "admin-group"], Vec::new())
    }

    /// Groups the user belongs to
    ///
    /// GET /user/{id}/group
    pub fn get_groups_by_user(&self, user_id: &str) -> ClientResult<Value> {
        self.get(&["user", user_id, "group"], Vec::new())
    }

    /// GET /collection/{id}/group
    pub fn get_groups_by_collection(&self, collection_id: &str) -> ClientResult<Value> {
        self.get(&["collection", collection_id, "group"], Vec::new())
    }

    /// Groups with a given purpose (e.g. `evaluation`, `security`, `efficiency`)
    ///
    /// GET /group/purpose/{purpose}
    pub fn get_groups_by_purpose(&self, purpose: &str) -> ClientResult<Value> {
        self.get(&["group", "purpose", purpose], Vec::new())
    }

    /// Add a user to a group with a permission level
    ///
    /// POST /group/{id}/users
    ///
    /// Returns the updated group.
    pub fn add_user_to_group(
        &self,
        group_id: &str,
        user_id: &str,
        permission_level: &str,
    ) -> ClientResult<Value> {
        let body = json!({
            "user_id": user_id,
            "permission_level": permission_level,
        });
        self.post(&["group", group_id, "users"], Some(&body))
    }

    /// DELETE /group/{id}/users/{user_id}
    pub fn remove_user_from_group(&self, group_id: &str, user_id: &str) -> ClientResult<Value> {
        self.delete(&["group", group_id, "users", user_id])
    }

    /// POST /group/{id}/admins
    pub fn add_admin_to_group(&self, group_id: &str, user_id: &str) -> ClientResult<Value> {
        let body = json!({ "user_id": user_id });
        self.post(&["group", group_id, "admins"], Some(&body))
    }

    /// POST /group/{id}/collections
    pub fn add_collection_to_group(
        &self,
        group_id: &str,
        collection_id: &str,
    ) -> ClientResult<Value> {
        let body = json!({ "collection_id": collection_id });
        self.post(&["group", group_id, "collections"], Some(&body))
    }

    /// DELETE /group/{id}/collections/{collection_id}
    pub fn remove_collection_from_group(
        &self,
        group_id: &str,
        collection_id: &str,
    ) -> ClientResult<Value> {
        self.delete(&["group", group_id, "collections", collection_id])
    }

    /// A user's permission level inside a group
    ///
    /// GET /group/{id}/users/{user_id}/permission
    pub fn get_user_permission_level(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> ClientResult<Value> {
        self.get(
            &["group", group_id, "users", user_id, "permission"],
            Vec::new(),
        )
    }

    /// Ids of users holding a permission level inside a group
    ///
    /// GET /group/{id}/permissions/{level}/users
    pub fn get_users_with_permission_level(
        &self,
        group_id: &str,
        permission_level: &str,
    ) -> ClientResult<Value> {
        self.get(
            &["group", group_id, "permissions", permission_level, "users"],
            Vec::new(),
        )
    }
}
