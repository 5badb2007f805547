use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mental,
    Physical,
    Experimental,
    Nature,
    Adventurous,
    Nutrition,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Mental,
        Self::Physical,
        Self::Experimental,
        Self::Nature,
        Self::Adventurous,
        Self::Nutrition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Physical => "physical",
            Self::Experimental => "experimental",
            Self::Nature => "nature",
            Self::Adventurous => "adventurous",
            Self::Nutrition => "nutrition",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mental" => Some(Self::Mental),
            "physical" => Some(Self::Physical),
            "experimental" => Some(Self::Experimental),
            "nature" => Some(Self::Nature),
            "adventurous" => Some(Self::Adventurous),
            "nutrition" => Some(Self::Nutrition),
            _ => None,
        }
    }
}

/// An entry in the minimal item list.
///
/// Items carry no identity: they are addressed by their current position, so
/// deleting an item shifts every later item down by one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Item {
    pub category: Category,
    pub description: String,
}

impl Item {
    pub fn new(category: Category, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
        }
    }
}
