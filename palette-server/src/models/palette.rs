//! Palettes - five colors under a name, optionally filed under a project

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use super::RequestSchema;

/// Palette row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Palette {
    pub id: i32,
    pub project_id: Option<i32>,
    pub palette_name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
}

/// POST /api/v1/palettes body
///
/// `project_id` is stored when given but never required. Form and select
/// values arrive as strings, so numeric text is accepted as well.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPalette {
    #[serde(default, deserialize_with = "lenient_project_id")]
    pub project_id: Option<i32>,
    pub palette_name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
}

fn lenient_project_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdOrText {
        Id(i32),
        Text(String),
    }

    match Option::<IdOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdOrText::Id(id)) => Ok(Some(id)),
        Some(IdOrText::Text(text)) => text.trim().parse().map(Some).map_err(|_| {
            D::Error::custom(format!("invalid project_id \"{}\", expected an integer", text))
        }),
    }
}

impl RequestSchema for NewPalette {
    const REQUIRED: &'static [&'static str] = &[
        "palette_name",
        "color1",
        "color2",
        "color3",
        "color4",
        "color5",
    ];
    const EXPECTED_FORMAT: &'static str = "{ palette_name: <String>, color1: <String>, color2: <String>, color3: <String>, color4: <String>, color5: <String>}";
}

/// Response body for a created palette. Leaves out `project_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedPalette {
    pub id: i32,
    pub palette_name: String,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color4: String,
    pub color5: String,
}

impl NewPalette {
    pub fn into_created(self, id: i32) -> CreatedPalette {
        CreatedPalette {
            id,
            palette_name: self.palette_name,
            color1: self.color1,
            color2: self.color2,
            color3: self.color3,
            color4: self.color4,
            color5: self.color5,
        }
    }

    /// Full row as it will read back after insert.
    pub fn into_palette(self, id: i32) -> Palette {
        Palette {
            id,
            project_id: self.project_id,
            palette_name: self.palette_name,
            color1: self.color1,
            color2: self.color2,
            color3: self.color3,
            color4: self.color4,
            color5: self.color5,
        }
    }
}
