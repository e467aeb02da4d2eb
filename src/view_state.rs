//! Home page state as a plain record updated by actions.

use serde::{Deserialize, Serialize};

use crate::contact::{ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::models::ContactForm;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Admissions,
    Calendar,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Admissions,
        Section::Calendar,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Admissions => "admissions",
            Section::Calendar => "calendar",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Admissions => "Admissions",
            Section::Calendar => "Calendar",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    ChildAge,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::ChildAge,
        ContactField::Message,
    ];

    pub fn value_in(self, form: &ContactForm) -> &str {
        match self {
            ContactField::FirstName => &form.first_name,
            ContactField::LastName => &form.last_name,
            ContactField::Email => &form.email,
            ContactField::ChildAge => &form.child_age,
            ContactField::Message => &form.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmitStatus {
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmitStatus::Failed => Some(ERROR_MESSAGE),
            SubmitStatus::Idle | SubmitStatus::Pending => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    ToggleMenu,
    Navigate(Section),
    ToggleTuition,
    EditField(ContactField, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageState {
    pub mobile_menu_open: bool,
    pub tuition_open: bool,
    pub contact: ContactForm,
    pub submission: SubmitStatus,
}

impl PageState {
    pub fn can_submit(&self) -> bool {
        self.submission != SubmitStatus::Pending
    }

    /// Applies `action`; returns false when it was ignored.
    pub fn apply(&mut self, action: PageAction) -> bool {
        match action {
            PageAction::ToggleMenu => self.mobile_menu_open = !self.mobile_menu_open,
            PageAction::Navigate(_) => self.mobile_menu_open = false,
            PageAction::ToggleTuition => self.tuition_open = !self.tuition_open,
            PageAction::EditField(field, value) => {
                let slot = match field {
                    ContactField::FirstName => &mut self.contact.first_name,
                    ContactField::LastName => &mut self.contact.last_name,
                    ContactField::Email => &mut self.contact.email,
                    ContactField::ChildAge => &mut self.contact.child_age,
                    ContactField::Message => &mut self.contact.message,
                };
                *slot = value;
            }
            PageAction::SubmitStarted => {
                if !self.can_submit() {
                    return false;
                }
                self.submission = SubmitStatus::Pending;
            }
            PageAction::SubmitSucceeded => {
                self.submission = SubmitStatus::Succeeded;
                self.contact = ContactForm::default();
            }
            PageAction::SubmitFailed => self.submission = SubmitStatus::Failed,
        }
        true
    }
}
