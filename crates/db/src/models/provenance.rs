use serde::{Deserialize, Serialize};

/// Who created a row: a user (`Internal`) or the catalog sync
/// (`External`).
///
/// External rows belong exclusively to the sync coordinator: it creates
/// them, reads them back, and destroys them wholesale each run. User
/// mutation paths never touch them beyond plain reads.
///
/// Maps to the PostgreSQL enum type `provenance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "provenance", rename_all = "lowercase")]
pub enum Provenance {
    Internal,
    External,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
