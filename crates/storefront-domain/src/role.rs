//! Administrator role types.

use serde::{Deserialize, Serialize};

/// Administrator role.
///
/// Wire format: the legacy role strings `"sAdmin"` and `"yAdmin"`. Routes
/// look their required role up in an authorization table instead of comparing
/// these strings inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    #[serde(rename = "sAdmin")]
    SAdmin,
    #[serde(rename = "yAdmin")]
    YAdmin,
}

impl AdminRole {
    /// Convert from the stored wire string. Returns `None` for unknown values.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "sAdmin" => Some(Self::SAdmin),
            "yAdmin" => Some(Self::YAdmin),
            _ => None,
        }
    }

    /// Convert to the stored wire string.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::SAdmin => "sAdmin",
            Self::YAdmin => "yAdmin",
        }
    }
}
