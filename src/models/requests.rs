//! Request DTOs for the games API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the contact form (POST /api/contact)
///
/// # Fields
/// - `name`: Sender name
/// - `email`: Sender email, used as reply-to
/// - `game_link`: Optional link to a game on the platform
/// - `message`: Free-form message body
/// - `age_confirm`: Sender confirms being over 13
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub game_link: Option<String>,
    pub message: String,
    #[serde(default)]
    pub age_confirm: bool,
}

impl ContactRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let name = self.name.trim();
        if name.len() < 2 || name.len() > 100 {
            return Some("Name must be between 2 and 100 characters".to_string());
        }
        if !name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
        {
            return Some("Name contains invalid characters".to_string());
        }

        let email = self.email.trim();
        if email.is_empty() || email.len() > 255 {
            return Some("Email must be between 1 and 255 characters".to_string());
        }
        let (local, domain) = match email.split_once('@') {
            Some(parts) => parts,
            None => return Some("Email is invalid".to_string()),
        };
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Some("Email is invalid".to_string());
        }

        if let Some(link) = self.game_link.as_deref().map(str::trim) {
            if !link.is_empty() {
                if link.len() > 500 {
                    return Some("Game link is too long".to_string());
                }
                if !is_platform_game_url(link) {
                    return Some("Game link must be a valid Roblox URL".to_string());
                }
            }
        }

        let message = self.message.trim();
        if message.len() < 10 || message.len() > 2000 {
            return Some("Message must be between 10 and 2000 characters".to_string());
        }
        let lowered = message.to_lowercase();
        if ["<script", "javascript:", "onerror=", "onclick="]
            .iter()
            .any(|pattern| lowered.contains(pattern))
        {
            return Some("Message contains disallowed content".to_string());
        }

        if !self.age_confirm {
            return Some("You must confirm you are over 13".to_string());
        }

        None
    }
}

/// Accepts `http(s)://[www.]roblox.com/games/<id>` and `/discover/<id>` links.
fn is_platform_game_url(link: &str) -> bool {
    let rest = match link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    let path = match rest.strip_prefix("roblox.com/") {
        Some(path) => path,
        None => return false,
    };
    let path = match path
        .strip_prefix("games/")
        .or_else(|| path.strip_prefix("discover/"))
    {
        Some(path) => path,
        None => return false,
    };

    path.chars().next().is_some_and(|c| c.is_ascii_digit())
}
