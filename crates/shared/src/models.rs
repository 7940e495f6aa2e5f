//! Shared data models for the chat client and the auth API.

use serde::{Deserialize, Serialize};

// --- Chat ---

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single role-tagged chat message. Never mutated once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Observable state of the realtime chat connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    #[default]
    Disconnected,
    Error,
}

impl ConnectionStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Error => "Connection error",
        }
    }
}

// --- Identity ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
}

impl User {
    /// Local part of the e-mail address, used as a greeting name.
    pub fn display_name(&self) -> &str {
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => "there",
        }
    }
}

/// An authenticated session: the bearer token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

// --- Auth API ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    /// Builds a request, dropping a blank phone number.
    pub fn new(email: impl Into<String>, password: impl Into<String>, phone: Option<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            phone: phone.filter(|p| !p.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub email: String,
}

impl From<AuthResponse> for Session {
    fn from(res: AuthResponse) -> Self {
        Session {
            token: res.token,
            user: User {
                id: res.user_id,
                email: res.email,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterResponse {
    pub id: String,
    pub email: String,
    pub token: String,
}

impl From<RegisterResponse> for Session {
    fn from(res: RegisterResponse) -> Self {
        Session {
            token: res.token,
            user: User {
                id: res.id,
                email: res.email,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_is_local_part() {
        let user = User {
            id: "1".into(),
            email: "jane.doe@example.com".into(),
        };
        assert_eq!(user.display_name(), "jane.doe");

        let odd = User {
            id: "2".into(),
            email: "@example.com".into(),
        };
        assert_eq!(odd.display_name(), "there");
    }

    #[test]
    fn register_request_omits_blank_phone() {
        let req = RegisterRequest::new("a@b.c", "password1", Some("   ".into()));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "email": "a@b.c", "password": "password1" })
        );

        let req = RegisterRequest::new("a@b.c", "password1", Some("+1 555".into()));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "email": "a@b.c", "password": "password1", "phone": "+1 555" })
        );
    }

    #[test]
    fn auth_responses_become_sessions() {
        let login: AuthResponse = serde_json::from_value(json!({
            "token": "t1", "user_id": "u1", "email": "x@y.z"
        }))
        .unwrap();
        let session = Session::from(login);
        assert_eq!(session.token, "t1");
        assert_eq!(session.user.id, "u1");

        let register: RegisterResponse = serde_json::from_value(json!({
            "id": "u2", "email": "p@q.r", "token": "t2"
        }))
        .unwrap();
        let session = Session::from(register);
        assert_eq!(session.user, User { id: "u2".into(), email: "p@q.r".into() });
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Message::assistant("hi")).unwrap(),
            json!({ "role": "assistant", "content": "hi" })
        );
    }
}
