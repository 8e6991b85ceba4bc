use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub number: String,
}

/// Request body for create and update. The server owns the id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub number: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self { name: name.into(), number: number.into() }
    }
}

// json-server hands out numeric ids for seeded records and strings for new ones.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_become_strings() {
        let json = r#"[{"id": 3, "name": "Ada", "number": "040-123"}, {"id": "a1f3", "name": "Bob", "number": "12"}]"#;
        let contacts: Vec<Contact> = serde_json::from_str(json).unwrap();
        assert_eq!(contacts[0].id, "3");
        assert_eq!(contacts[1].id, "a1f3");
    }

    #[test]
    fn draft_body_has_no_id() {
        let body = serde_json::to_value(ContactDraft::new("Ada", "040-123")).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Ada", "number": "040-123"}));
    }
}
