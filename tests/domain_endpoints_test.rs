//! Integration tests for the per-resource endpoint wrappers

mod common;

use agent_monitor_client::{AgentMonitorClient, SampleDataSize};
use common::FixtureServer;
use serde_json::json;

fn client_for(server: &FixtureServer) -> AgentMonitorClient {
    AgentMonitorClient::builder()
        .base_url(server.base_url())
        .token("tok")
        .build()
        .unwrap()
}

#[test]
fn test_conversation_crud() {
    let server = FixtureServer::start();
    server.respond("POST", "/conversation", 200, r#"{"id": "c-1"}"#);
    let client = client_for(&server);
    let payload = json!({"userId": "u-1", "aiAgentId": "agent-1"});

    let created = client.create_conversation(&payload).unwrap();
    assert_eq!(created["id"], "c-1");
    let request = server.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.json(), payload);

    client
        .update_conversation("c-1", &json!({"status": "closed"}))
        .unwrap();
    let request = server.last_request();
    assert_eq!((request.method.as_str(), request.path.as_str()), ("PUT", "/conversation/c-1"));
    assert_eq!(request.json(), json!({"status": "closed"}));

    client.delete_conversation("c-1").unwrap();
    let request = server.last_request();
    assert_eq!((request.method.as_str(), request.path.as_str()), ("DELETE", "/conversation/c-1"));
    assert!(request.body.is_empty());
}

#[test]
fn test_filter_conversations_posts_criteria() {
    let server = FixtureServer::start();
    server.respond("POST", "/conversation/filter", 200, r#"["c-1", "c-2"]"#);
    let client = client_for(&server);
    let criteria = json!({"status": "open", "priority": ["high"]});

    let ids = client.filter_conversations(&criteria).unwrap();

    assert_eq!(ids, json!(["c-1", "c-2"]));
    assert_eq!(server.last_request().json(), criteria);
}

#[test]
fn test_collection_paths() {
    let server = FixtureServer::start();
    let client = client_for(&server);

    client.get_collection("col-1").unwrap();
    assert_eq!(server.last_request().path, "/collection/col-1");

    client.get_collections_by_group("g-1").unwrap();
    assert_eq!(server.last_request().path, "/group/g-1/collection");

    client.get_collections_by_creator("u-1").unwrap();
    assert_eq!(server.last_request().path, "/user/u-1/collection");

    client.delete_collection("col-1").unwrap();
    assert_eq!(server.last_request().method, "DELETE");
}

#[test]
fn test_group_lookup_paths() {
    let server = FixtureServer::start();
    let client = client_for(&server);

    client.get_groups_by_admin_user("u-1").unwrap();
    assert_eq!(server.last_request().path, "/user/u-1/admin-group");

    client.get_groups_by_user("u-1").unwrap();
    assert_eq!(server.last_request().path, "/user/u-1/group");

    client.get_groups_by_collection("col-1").unwrap();
    assert_eq!(server.last_request().path, "/collection/col-1/group");

    client.get_groups_by_purpose("evaluation").unwrap();
    assert_eq!(server.last_request().path, "/group/purpose/evaluation");
}

#[test]
fn test_group_membership_bodies() {
    let server = FixtureServer::start();
    server.respond("POST", "/group/g-1/users", 200, r#"{"id": "g-1", "users": ["u-1"]}"#);
    let client = client_for(&server);

    let group = client.add_user_to_group("g-1", "u-1", "write").unwrap();
    assert_eq!(group["users"], json!(["u-1"]));
    assert_eq!(
        server.last_request().json(),
        json!({"user_id": "u-1", "permission_level": "write"})
    );

    client.add_admin_to_group("g-1", "u-2").unwrap();
    let request = server.last_request();
    assert_eq!(request.path, "/group/g-1/admins");
    assert_eq!(request.json(), json!({"user_id": "u-2"}));

    client.add_collection_to_group("g-1", "col-9").unwrap();
    let request = server.last_request();
    assert_eq!(request.path, "/group/g-1/collections");
    assert_eq!(request.json(), json!({"collection_id": "col-9"}));

    client.remove_user_from_group("g-1", "u-1").unwrap();
    let request = server.last_request();
    assert_eq!((request.method.as_str(), request.path.as_str()), ("DELETE", "/group/g-1/users/u-1"));

    client.remove_collection_from_group("g-1", "col-9").unwrap();
    assert_eq!(server.last_request().path, "/group/g-1/collections/col-9");
}

#[test]
fn test_group_permission_queries() {
    let server = FixtureServer::start();
    server.respond("GET", "/group/g-1/users/u-1/permission", 200, r#""admin""#);
    server.respond("GET", "/group/g-1/permissions/read/users", 200, r#"["u-3"]"#);
    let client = client_for(&server);

    assert_eq!(client.get_user_permission_level("g-1", "u-1").unwrap(), json!("admin"));
    assert_eq!(
        client.get_users_with_permission_level("g-1", "read").unwrap(),
        json!(["u-3"])
    );
}

#[test]
fn test_ai_agent_and_user_lookups() {
    let server = FixtureServer::start();
    server.respond(
        "GET",
        "/aiagent",
        200,
        r#"{"agent-1": {"name": "Helper"}, "agent-2": {"name": "Router"}}"#,
    );
    let client = client_for(&server);

    let agents = client.get_ai_agents(&["agent-1", "agent-2"]).unwrap();
    assert_eq!(agents["agent-2"]["name"], "Router");

    client.get_ai_agents_by_status("training").unwrap();
    assert_eq!(server.last_request().path, "/aiagent/status/training");

    client.update_ai_agent("agent-1", &json!({"status": "inactive"})).unwrap();
    assert_eq!(server.last_request().method, "PUT");

    client.get_users_by_role("supervisor").unwrap();
    assert_eq!(server.last_request().path, "/user/role/supervisor");

    client.create_user(&json!({"name": "Ada"})).unwrap();
    let request = server.last_request();
    assert_eq!((request.method.as_str(), request.path.as_str()), ("POST", "/user"));
}

#[test]
fn test_system_operations_send_no_body() {
    let server = FixtureServer::start();
    let client = client_for(&server);

    client.initialize_system().unwrap();
    assert_eq!(server.last_request().path, "/system/initialize");
    client.save_data().unwrap();
    assert_eq!(server.last_request().path, "/system/save");
    client.clear_cache().unwrap();
    assert_eq!(server.last_request().path, "/system/cache/clear");
    client.generate_static_sample_data().unwrap();
    assert_eq!(server.last_request().path, "/system/sample-data/generate-static");

    for request in server.requests() {
        assert_eq!(request.method, "POST");
        assert!(request.body.is_empty(), "unexpected body on {}", request.path);
    }
}

#[test]
fn test_sample_data_size_body() {
    let server = FixtureServer::start();
    let client = client_for(&server);

    client.generate_sample_data(None).unwrap();
    assert!(server.last_request().body.is_empty());

    client.generate_sample_data(Some(SampleDataSize::Large)).unwrap();
    assert_eq!(server.last_request().json(), json!({"size": "large"}));

    client.load_static_sample_data(Some(SampleDataSize::Small)).unwrap();
    let request = server.last_request();
    assert_eq!(request.path, "/system/sample-data/load-static");
    assert_eq!(request.json(), json!({"size": "small"}));

    client.save_current_as_static(SampleDataSize::Medium).unwrap();
    let request = server.last_request();
    assert_eq!(request.path, "/system/sample-data/save-current");
    assert_eq!(request.json(), json!({"size": "medium"}));
}

#[test]
fn test_auth_status() {
    let server = FixtureServer::start();
    server.respond("GET", "/system/auth/status", 200, r#"{"authenticated": true}"#);
    let client = client_for(&server);

    let status = client.get_auth_status().unwrap();

    assert_eq!(status["authenticated"], true);
    assert_eq!(server.last_request().header("authorization"), Some("Bearer tok"));
}
