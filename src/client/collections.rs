//! Collection endpoints

use serde_json::Value;

use super::AgentMonitorClient;
use crate::error::ClientResult;
use crate::query::id_filter_pairs;

impl AgentMonitorClient {
    /// List collections, optionally restricted to the given ids
    ///
    /// GET /collection
    pub fn get_collections<S: AsRef<str>>(&self, ids: &[S]) -> ClientResult<Value> {
        self.get(&["collection"], id_filter_pairs(ids))
    }

    /// GET /collection/{id}
    pub fn get_collection(&self, collection_id: &str) -> ClientResult<Value> {
        self.get(&["collection", collection_id], Vec::new())
    }

    /// POST /collection
    pub fn create_collection(&self, collection: &Value) -> ClientResult<Value> {
        self.post(&["collection"], Some(collection))
    }

    /// PUT /collection/{id}
    pub fn update_collection(
        &self,
        collection_id: &str,
        collection: &Value,
    ) -> ClientResult<Value> {
        self.put(&["collection", collection_id], collection)
    }

    /// DELETE /collection/{id}
    pub fn delete_collection(&self, collection_id: &str) -> ClientResult<Value> {
        self.delete(&["collection", collection_id])
    }

    /// Collections shared with a group
    ///
    /// GET /group/{id}/collection
    pub fn get_collections_by_group(&self, group_id: &str) -> ClientResult<Value> {
        self.get(&["group", group_id, "collection"], Vec::new())
    }

    /// Collections created by a user
    ///
    /// GET /user/{id}/collection
    pub fn get_collections_by_creator(&self, creator_id: &str) -> ClientResult<Value> {
        self.get(&["user", creator_id, "collection"], Vec::new())
    }
}
