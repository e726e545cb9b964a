use serde::{Deserialize, Serialize};

/// Lightweight reference to another catalog object.
///
/// Carried inside aggregates wherever one object points at another
/// (e.g. a custom property pointing at its type descriptor). Only the
/// fields needed to display and resolve the target are included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityReference {
    /// Target id (string form of the target's UUID)
    pub id: String,
    /// Machine name of the target
    pub name: String,
    /// Human-facing name, optional
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// What kind of object the reference points at (e.g. "type")
    pub kind: String,
    #[serde(rename = "fullyQualifiedName")]
    pub fully_qualified_name: Option<String>,
}

impl EntityReference {
    /// Title to render for the referenced object: the display name when
    /// present and non-blank, otherwise the machine name.
    pub fn display_title(&self) -> String {
        match &self.display_name {
            Some(title) if !title.trim().is_empty() => title.clone(),
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(name: &str, display_name: Option<&str>) -> EntityReference {
        EntityReference {
            id: "00000000-0000-0000-0000-000000000001".to_string(),
            name: name.to_string(),
            display_name: display_name.map(|s| s.to_string()),
            kind: "type".to_string(),
            fully_qualified_name: None,
        }
    }

    #[test]
    fn test_display_title_prefers_display_name() {
        assert_eq!(reference("string", Some("String")).display_title(), "String");
    }

    #[test]
    fn test_display_title_falls_back_to_name() {
        assert_eq!(reference("string", None).display_title(), "string");
        assert_eq!(reference("string", Some("   ")).display_title(), "string");
    }
}
