//! AI agent endpoints

use serde_json::Value;

use super::AgentMonitorClient;
use crate::error::ClientResult;
use crate::query::id_filter_pairs;

impl AgentMonitorClient {
    /// List AI agents, optionally restricted to the given ids
    ///
    /// GET /aiagent
    ///
    /// The server currently answers with a mapping keyed by agent id.
    pub fn get_ai_agents<S: AsRef<str>>(&self, ids: &[S]) -> ClientResult<Value> {
        self.get(&["aiagent"], id_filter_pairs(ids))
    }

    /// GET /aiagent/{id}
    pub fn get_ai_agent(&self, agent_id: &str) -> ClientResult<Value> {
        self.get(&["aiagent", agent_id], Vec::new())
    }

    /// POST /aiagent
    pub fn create_ai_agent(&self, agent: &Value) -> ClientResult<Value> {
        self.post(&["aiagent"], Some(agent))
    }

    /// PUT /aiagent/{id}
    pub fn update_ai_agent(&self, agent_id: &str, agent: &Value) -> ClientResult<Value> {
        self.put(&["aiagent", agent_id], agent)
    }

    /// DELETE /aiagent/{id}
    pub fn delete_ai_agent(&self, agent_id: &str) -> ClientResult<Value> {
        self.delete(&["aiagent", agent_id])
    }

    /// Agents in a given status (`active`, `inactive` or `training`)
    ///
    /// GET /aiagent/status/{status}
    pub fn get_ai_agents_by_status(&self, status: &str) -> ClientResult<Value> {
        self.get(&["aiagent", "status", status], Vec::new())
    }
}
