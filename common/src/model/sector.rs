use serde::{Deserialize, Serialize};

/// The service area that attended the respondent.
///
/// The set is closed: the form renders exactly these options and the
/// spreadsheet rows carry the Portuguese label as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Contábil")]
    Contabil,
    #[serde(rename = "Fiscal")]
    Fiscal,
    #[serde(rename = "RH / Pessoal")]
    RhPessoal,
    #[serde(rename = "Legal / Societário")]
    LegalSocietario,
    #[serde(rename = "Diretoria")]
    Diretoria,
    #[serde(rename = "Outros")]
    Outros,
}

impl Sector {
    /// All sectors, in the order the form presents them.
    pub const ALL: [Sector; 6] = [
        Sector::Contabil,
        Sector::Fiscal,
        Sector::RhPessoal,
        Sector::LegalSocietario,
        Sector::Diretoria,
        Sector::Outros,
    ];

    /// The label shown to the user and written to the sheet.
    pub fn label(&self) -> &'static str {
        match self {
            Sector::Contabil => "Contábil",
            Sector::Fiscal => "Fiscal",
            Sector::RhPessoal => "RH / Pessoal",
            Sector::LegalSocietario => "Legal / Societário",
            Sector::Diretoria => "Diretoria",
            Sector::Outros => "Outros",
        }
    }

    /// Resolves a label back to its sector. Used by the form's `<select>`.
    pub fn from_label(label: &str) -> Option<Sector> {
        Sector::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl Default for Sector {
    fn default() -> Self {
        Sector::Contabil
    }
}
