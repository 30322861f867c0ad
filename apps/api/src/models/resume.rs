#![allow(dead_code)]

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::theme::ThemeColor;

/// Resume content submitted by the builder front-end.
///
/// Every string here is user-controlled and must be escaped before it reaches
/// markup. Only `theme_color` carries trusted style values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_position: String,
    #[serde(default)]
    pub about_me: Option<String>,
    /// Image URL or data URI.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(rename = "themeColor")]
    pub theme_color: ThemeColor,
    #[serde(default)]
    pub skills: Option<Vec<Skill>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experiences: Vec<TimelineEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub educations: Vec<TimelineEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub references: Vec<TimelineEntry>,
}

/// The builder sends `null` for fields the user never filled in; treat it like absence.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl UserData {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, nominally 0-100. Not range-checked.
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years: f64,
}

/// One experience, education or reference row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_present: bool,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}
