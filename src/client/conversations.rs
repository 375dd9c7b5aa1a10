//! Conversation endpoints
//!
//! Messages are no longer a separate resource; they live inside each conversation's
//! `values` field and the server decodes them on request via `include_messages`.

use serde_json::Value;

use super::AgentMonitorClient;
use crate::error::ClientResult;
use crate::query::{ConversationQuery, ListOptions};

impl AgentMonitorClient {
    /// List conversations
    ///
    /// GET /conversation
    ///
    /// The response shape follows the flags that were sent: an id filter yields a mapping
    /// keyed by conversation id, `include_pagination=true` yields `{items, page_info}`,
    /// and otherwise a plain list comes back.
    pub fn get_conversations(&self, query: &ConversationQuery) -> ClientResult<Value> {
        self.get(&["conversation"], query.query_pairs())
    }

    /// Get a single conversation
    ///
    /// GET /conversation/{id}
    pub fn get_conversation(
        &self,
        conversation_id: &str,
        include_messages: Option<bool>,
    ) -> ClientResult<Value> {
        let query = include_messages
            .map(|include| vec![("include_messages", include.to_string())])
            .unwrap_or_default();
        self.get(&["conversation", conversation_id], query)
    }

    /// POST /conversation
    pub fn create_conversation(&self, conversation: &Value) -> ClientResult<Value> {
        self.post(&["conversation"], Some(conversation))
    }

    /// PUT /conversation/{id}
    pub fn update_conversation(
        &self,
        conversation_id: &str,
        conversation: &Value,
    ) -> ClientResult<Value> {
        self.put(&["conversation", conversation_id], conversation)
    }

    /// DELETE /conversation/{id}
    pub fn delete_conversation(&self, conversation_id: &str) -> ClientResult<Value> {
        self.delete(&["conversation", conversation_id])
    }

    /// Filter conversations by complex criteria
    ///
    /// POST /conversation/filter
    ///
    /// The server answers with the ids of matching conversations.
    pub fn filter_conversations(&self, criteria: &Value) -> ClientResult<Value> {
        self.post(&["conversation", "filter"], Some(criteria))
    }

    /// GET /collection/{id}/conversation
    pub fn get_conversations_by_collection(
        &self,
        collection_id: &str,
        options: &ListOptions,
    ) -> ClientResult<Value> {
        self.get(
            &["collection", collection_id, "conversation"],
            options.query_pairs(),
        )
    }

    /// GET /aiagent/{id}/conversation
    pub fn get_conversations_by_ai_agent(
        &self,
        ai_agent_id: &str,
        options: &ListOptions,
    ) -> ClientResult<Value> {
        self.get(
            &["aiagent", ai_agent_id, "conversation"],
            options.query_pairs(),
        )
    }

    /// GET /user/{id}/conversation
    pub fn get_conversations_by_user(
        &self,
        user_id: &str,
        options: &ListOptions,
    ) -> ClientResult<Value> {
        self.get(&["user", user_id, "conversation"], options.query_pairs())
    }
}
