use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[schema(example = "api-event-0")]
    pub id: String,
    #[schema(example = "All Parent Meeting")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(example = "2025-08-04")]
    pub start_date: String,
    #[schema(example = "2025-08-04")]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "10:00 AM")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "12:00 PM")]
    pub end_time: Option<String>,
    pub is_all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Contact form as entered on the home page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub child_age: String,
    #[serde(default)]
    pub message: String,
}

/// Body accepted by the upstream contact endpoint.
///
/// The receiving service reads the child's age from `phone`; the field name is
/// part of its contract and must not be renamed here.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl From<&ContactForm> for ContactPayload {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: format!("{} {}", form.first_name, form.last_name)
                .trim()
                .to_string(),
            email: form.email.clone(),
            phone: form.child_age.clone(),
            message: form.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ContactResponse {
    pub status: ContactStatus,
    pub message: String,
}
