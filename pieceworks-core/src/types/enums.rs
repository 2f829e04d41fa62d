//! Fixed enumerations: auth schemes, categories, trigger delivery kinds.

use serde::{Deserialize, Serialize};

/// Authentication scheme a piece declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    #[serde(rename = "none")]
    None,
    #[serde(rename = "oauth2")]
    OAuth2,
    #[serde(rename = "secret_text")]
    SecretText,
    #[serde(rename = "basic_auth")]
    BasicAuth,
    #[serde(rename = "custom")]
    Custom,
}

impl AuthType {
    /// The wire code used in piece documents.
    pub fn code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::OAuth2 => "oauth2",
            Self::SecretText => "secret_text",
            Self::BasicAuth => "basic_auth",
            Self::Custom => "custom",
        }
    }

    /// Parse a wire code back into an auth type.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(Self::None),
            "oauth2" => Some(Self::OAuth2),
            "secret_text" => Some(Self::SecretText),
            "basic_auth" => Some(Self::BasicAuth),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The 13 fixed piece categories. Variant order matches code order, so the
/// derived `Ord` gives the (category, id) registry sort for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "A_essential")]
    Essential,
    #[serde(rename = "B_google")]
    Google,
    #[serde(rename = "C_communication")]
    Communication,
    #[serde(rename = "D_ai")]
    Ai,
    #[serde(rename = "E_crm")]
    Crm,
    #[serde(rename = "F_ecommerce")]
    Ecommerce,
    #[serde(rename = "G_productivity")]
    Productivity,
    #[serde(rename = "H_marketing")]
    Marketing,
    #[serde(rename = "I_content")]
    Content,
    #[serde(rename = "J_database")]
    Database,
    #[serde(rename = "K_dev")]
    Dev,
    #[serde(rename = "L_microsoft")]
    Microsoft,
    #[serde(rename = "M_finance")]
    Finance,
}

impl Category {
    /// All categories in code order.
    pub const ALL: [Category; 13] = [
        Self::Essential,
        Self::Google,
        Self::Communication,
        Self::Ai,
        Self::Crm,
        Self::Ecommerce,
        Self::Productivity,
        Self::Marketing,
        Self::Content,
        Self::Database,
        Self::Dev,
        Self::Microsoft,
        Self::Finance,
    ];

    /// The wire code used in piece documents.
    pub fn code(self) -> &'static str {
        match self {
            Self::Essential => "A_essential",
            Self::Google => "B_google",
            Self::Communication => "C_communication",
            Self::Ai => "D_ai",
            Self::Crm => "E_crm",
            Self::Ecommerce => "F_ecommerce",
            Self::Productivity => "G_productivity",
            Self::Marketing => "H_marketing",
            Self::Content => "I_content",
            Self::Database => "J_database",
            Self::Dev => "K_dev",
            Self::Microsoft => "L_microsoft",
            Self::Finance => "M_finance",
        }
    }

    /// Parse a wire code back into a category.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Delivery kind of a trigger: push (webhook) or pull (polling).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    #[serde(rename = "instant")]
    Instant,
    #[default]
    #[serde(rename = "scheduled")]
    Scheduled,
}

impl TriggerKind {
    /// The wire code used in piece documents.
    pub fn code(self) -> &'static str {
        match self {
            Self::Instant => "instant",
            Self::Scheduled => "scheduled",
        }
    }

    /// Parse a wire code back into a trigger kind.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "instant" => Some(Self::Instant),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }

    /// The detail-document wire form: `WEBHOOK` or `POLLING`.
    pub fn wire_code(self) -> &'static str {
        match self {
            Self::Instant => "WEBHOOK",
            Self::Scheduled => "POLLING",
        }
    }

    /// Parse the detail-document wire form. Unknown tokens fall back to
    /// scheduled, mirroring the fallback-merge boundary default.
    pub fn from_wire_code(code: &str) -> Self {
        match code {
            "WEBHOOK" => Self::Instant,
            _ => Self::Scheduled,
        }
    }
}

impl std::fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_matches_code_order() {
        let mut sorted = Category::ALL;
        sorted.sort();
        assert_eq!(sorted, Category::ALL);
        for pair in Category::ALL.windows(2) {
            assert!(pair[0].code() < pair[1].code());
        }
    }

    #[test]
    fn codes_round_trip() {
        for c in Category::ALL {
            assert_eq!(Category::from_code(c.code()), Some(c));
        }
        for a in ["none", "oauth2", "secret_text", "basic_auth", "custom"] {
            assert_eq!(AuthType::from_code(a).map(|t| t.code()), Some(a));
        }
        assert_eq!(TriggerKind::from_wire_code("WEBHOOK"), TriggerKind::Instant);
        assert_eq!(TriggerKind::from_wire_code("POLLING"), TriggerKind::Scheduled);
        assert_eq!(TriggerKind::from_wire_code("???"), TriggerKind::Scheduled);
    }

    #[test]
    fn serde_uses_wire_codes() {
        let json = serde_json::to_string(&Category::Google).unwrap();
        assert_eq!(json, "\"B_google\"");
        let back: AuthType = serde_json::from_str("\"secret_text\"").unwrap();
        assert_eq!(back, AuthType::SecretText);
    }
}
