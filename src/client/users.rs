//! User endpoints

use serde_json::Value;

use super::AgentMonitorClient;
use crate::error::ClientResult;
use crate::query::id_filter_pairs;

impl AgentMonitorClient {
    /// GET /user
    pub fn get_users<S: AsRef<str>>(&self, ids: &[S]) -> ClientResult<Value> {
        self.get(&["user"], id_filter_pairs(ids))
    }

    /// GET /user/{id}
    pub fn get_user(&self, user_id: &str) -> ClientResult<Value> {
        self.get(&["user", user_id], Vec::new())
    }

    /// The user the current credentials belong to
    ///
    /// GET /user/current
    pub fn get_current_user(&self) -> ClientResult<Value> {
        self.get(&["user", "current"], Vec::new())
    }

    /// POST /user
    pub fn create_user(&self, user: &Value) -> ClientResult<Value> {
        self.post(&["user"], Some(user))
    }

    /// PUT /user/{id}
    pub fn update_user(&self, user_id: &str, user: &Value) -> ClientResult<Value> {
        self.put(&["user", user_id], user)
    }

    /// DELETE /user/{id}
    pub fn delete_user(&self, user_id: &str) -> ClientResult<Value> {
        self.delete(&["user", user_id])
    }

    /// GET /user/role/{role}
    pub fn get_users_by_role(&self, role: &str) -> ClientResult<Value> {
        self.get(&["user", "role", role], Vec::new())
    }
}
