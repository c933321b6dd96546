use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Wire shape of a todo item. `description` serializes as `null` when unset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update. A field left out of the request is left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TodoPathParams {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults_description_to_none() {
        let req: CreateTodoRequest = serde_json::from_str(r#"{"title":"Study"}"#).unwrap();
        assert_eq!(req.title, "Study");
        assert!(req.description.is_none());
    }

    #[test]
    fn create_request_rejects_missing_title() {
        let result: Result<CreateTodoRequest, _> =
            serde_json::from_str(r#"{"description":"no title here"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_all_fields_optional() {
        let req: UpdateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.description.is_none());
        assert!(req.completed.is_none());
    }

    #[test]
    fn todo_serializes_null_description() {
        let todo = Todo {
            id: 1,
            title: "Buy milk".into(),
            description: None,
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["description"], serde_json::Value::Null);
        assert_eq!(json["completed"], false);
    }
}
