use serde::{Deserialize, Serialize};

/// Registration form payload, sent as-is to `POST /customers`.
/// Field validation happens in the form layer; the CNPJ stays a string here
/// because that is what the input produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterFormData {
    pub customer_name: String,
    #[serde(rename = "CNPJ")]
    pub cnpj: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
}

/// Body of a successful `POST /login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub token: String,
}

/// Contact create/edit form payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub phone: String,
    pub email: String,
}
