use serde::{Deserialize, Serialize};

/// The five user-editable contact fields. Serialized with the camelCase key
/// names the submit endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::Message => &mut self.message,
        }
    }
}

/// Addresses a form field by name, for keystroke editing and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email Address",
            FieldId::Phone => "Phone Number",
            FieldId::Message => "Message",
        }
    }
}
