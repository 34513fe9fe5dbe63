//! Wire model for user records returned by `GET <base>/user/`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub local_address: String,
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub certificate_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profession {
    pub profession: String,
}

/// One user record. Immutable once fetched; the whole row set is replaced on
/// every page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub profession: Vec<Profession>,
}

impl UserRow {
    /// Street address, empty when the record carries none.
    pub fn local_address(&self) -> &str {
        self.address
            .as_ref()
            .map(|a| a.local_address.as_str())
            .unwrap_or("")
    }

    /// City, empty when the record carries none.
    pub fn city(&self) -> &str {
        self.address.as_ref().map(|a| a.city.as_str()).unwrap_or("")
    }

    pub fn certification_count(&self) -> usize {
        self.certifications.len()
    }

    /// Comma-joined certificate names for the list cell.
    pub fn certificate_names(&self) -> String {
        self.certifications
            .iter()
            .map(|c| c.certificate_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First profession is the significant one.
    pub fn primary_profession(&self) -> Option<&str> {
        self.profession.first().map(|p| p.profession.as_str())
    }
}

/// Raw response shape: `{ count, results }`.
///
/// `count` and `results` are required on purpose; a body missing either is a
/// decode failure, not an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListResponse {
    pub count: u64,
    pub results: Vec<UserRow>,
}

/// The most recently fetched page of rows plus the server-reported total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultPage {
    pub rows: Vec<UserRow>,
    pub total_count: u64,
}

impl From<UserListResponse> for ResultPage {
    fn from(response: UserListResponse) -> Self {
        Self {
            rows: response.results,
            total_count: response.count,
        }
    }
}
