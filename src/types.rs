use serde::{Deserialize, Serialize};

/// Body of `POST /DevOps`. Only `to` is read; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub to: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn greeting(to: &str) -> Self {
        Self {
            message: format!("Hello {} your message will be send", to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_wraps_recipient() {
        let resp = MessageResponse::greeting("Juan Perez");
        assert_eq!(resp.message, "Hello Juan Perez your message will be send");
    }

    #[test]
    fn greeting_keeps_empty_recipient() {
        let resp = MessageResponse::greeting("");
        assert_eq!(resp.message, "Hello  your message will be send");
    }

    #[test]
    fn request_ignores_extra_fields() {
        let req: MessageRequest = serde_json::from_str(
            r#"{"message":"This is a test","to":"Juan Perez","from":"Rita Asturia","timeToLifeSec":45}"#,
        )
        .unwrap();
        assert_eq!(req.to, "Juan Perez");
    }
}
