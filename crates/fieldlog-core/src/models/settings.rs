//! User settings model

use serde::{Deserialize, Serialize};

/// Per-user preferences persisted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    /// Last-used enumerator name, used to prefill new observations
    #[serde(default)]
    pub enumerator: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_is_empty() {
        assert_eq!(UserSettings::default().enumerator, "");
    }

    #[test]
    fn settings_tolerate_missing_fields() {
        let settings: UserSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.enumerator, "");
    }
}
