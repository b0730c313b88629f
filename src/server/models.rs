use serde::{Deserialize, Serialize};

/// Body of `POST /ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

/// Reply of `POST /ask`: either `answer` or `error` is set
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AskResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AskResponse {
    pub fn answer(answer: impl Into<String>) -> Self {
        Self {
            success: true,
            answer: Some(answer.into()),
            error: None,
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            success: false,
            answer: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_shapes() {
        assert_eq!(
            serde_json::to_value(AskResponse::answer("Total: 2")).unwrap(),
            json!({ "success": true, "answer": "Total: 2" })
        );
        assert_eq!(
            serde_json::to_value(AskResponse::error("Pergunta vazia")).unwrap(),
            json!({ "success": false, "error": "Pergunta vazia" })
        );
    }

    #[test]
    fn test_request_defaults_question() {
        let request: AskRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.question, "");
    }
}
