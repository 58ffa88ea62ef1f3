// src/models/user.rs
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// Credenciais enviadas como JSON para POST /admin/login/
#[derive(Clone, Serialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

// A password nunca vai parar aos logs
impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

// Dados do formulário `adminLoginForm` (application/x-www-form-urlencoded)
#[derive(Deserialize)]
pub struct AdminLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for AdminLoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminLoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Um utilizador tal como o backend o devolve na lista do admin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    #[serde(deserialize_with = "deserialize_registered_on")]
    pub registered_on: DateTime<Utc>,
}

impl UserRecord {
    /// Data de registo legível, sempre em UTC.
    pub fn registered_on_display(&self) -> String {
        self.registered_on.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

// O backend grava `registered_on` umas vezes com offset e outras sem
// (datetime "naive"); sem offset assume-se UTC.
fn deserialize_registered_on<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| serde::de::Error::custom(format!("timestamp inválido: {raw}")))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_list_with_offset_and_naive_timestamps() {
        let users: Vec<UserRecord> = serde_json::from_str(
            r#"[
                {"id": 1, "email": "a@x.com", "registered_on": "2024-01-01T00:00:00Z"},
                {"id": 2, "email": "b@x.com", "registered_on": "2024-03-05T14:30:00.123456"},
                {"id": 3, "email": "c@x.com", "registered_on": "2024-06-01T12:00:00+02:00"}
            ]"#,
        )
        .unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(users[0].registered_on_display(), "2024-01-01 00:00:00 UTC");
        assert_eq!(users[1].registered_on_display(), "2024-03-05 14:30:00 UTC");
        assert_eq!(users[2].registered_on_display(), "2024-06-01 10:00:00 UTC");
    }

    #[test]
    fn rejects_unparseable_timestamp() {
        let parsed = serde_json::from_str::<UserRecord>(r#"{"id": 1, "email": "a@x.com", "registered_on": "yesterday"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn credentials_serialize_as_flat_json_and_hide_password_in_debug() {
        let creds = AdminCredentials { email: "admin@x.com".into(), password: "hunter2".into() };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"email": "admin@x.com", "password": "hunter2"}));
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn login_form_hides_password_in_debug() {
        let form = AdminLoginForm { email: "admin@x.com".into(), password: "hunter2".into() };
        let debug = format!("{form:?}");
        assert!(debug.contains("admin@x.com"));
        assert!(!debug.contains("hunter2"));
    }
}
