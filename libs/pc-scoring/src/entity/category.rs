use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Usage profile selecting weight emphasis and normalization shape.
///
/// Parsing never fails: any string other than `mobile`, `cafe` or `home`
/// becomes [`UsageCategory::Unrecognized`], which scores with the default
/// weights and default (larger-is-better) screen normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum UsageCategory {
    /// Carried around all day
    Mobile,
    /// Portable, used at a table
    Cafe,
    /// Stationary desktop replacement
    Home,
    #[default]
    Unrecognized,
}

impl UsageCategory {
    /// The categories a caller can select explicitly
    pub const ALL: [UsageCategory; 3] = [Self::Mobile, Self::Cafe, Self::Home];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Cafe => "cafe",
            Self::Home => "home",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<&str> for UsageCategory {
    fn from(value: &str) -> Self {
        match value {
            "mobile" => Self::Mobile,
            "cafe" => Self::Cafe,
            "home" => Self::Home,
            _ => Self::Unrecognized,
        }
    }
}

impl From<String> for UsageCategory {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl FromStr for UsageCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for UsageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UsageCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
