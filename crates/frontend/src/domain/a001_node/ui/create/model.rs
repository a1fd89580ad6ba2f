use crate::shared::api_utils::api_url;
use contracts::domain::a001_node::aggregate::{
    NodeCreateRequest, NodeCreateResponse, NodeTemplateList,
};
use gloo_net::http::Request;

const TEMPLATES_PATH: &str = "/api/node/templates";
const CREATE_PATH: &str = "/api/node";

pub async fn fetch_templates() -> Result<Vec<String>, String> {
    let response = Request::get(&api_url(TEMPLATES_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to fetch: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let list = NodeTemplateList::from_json(&text).map_err(|e| format!("{:#}", e))?;
    Ok(list.names())
}

pub async fn create_node(request: &NodeCreateRequest) -> Result<NodeCreateResponse, String> {
    request.validate()?;

    let response = Request::post(&api_url(CREATE_PATH))
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("Failed to send: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    NodeCreateResponse::from_json(&text).map_err(|e| format!("{:#}", e))
}
