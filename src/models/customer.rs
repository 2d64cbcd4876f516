use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer profile as the backend returns it, with the contact list nested.
/// Only ever replaced wholesale from a server response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub customer_name: String,
    #[serde(rename = "CNPJ")]
    pub cnpj: u64,
    pub email: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
