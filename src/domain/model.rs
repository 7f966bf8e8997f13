use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A raw contribution as published in the datasets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contribution {
    #[serde(default)]
    pub contributor_first_name: Option<String>,
    #[serde(default)]
    pub contributor_middle_name: Option<String>,
    #[serde(default)]
    pub contributor_last_name: Option<String>,
    #[serde(default)]
    pub contributor_suffix: Option<String>,
    #[serde(default)]
    pub contributor_name: Option<String>,
    #[serde(default)]
    pub contributor_employer: Option<String>,
    #[serde(default)]
    pub contributor_occupation: Option<String>,
    #[serde(default)]
    pub claimed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DonorIdentity {
    Individual {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        occupation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        company: Option<Company>,
    },
    Organization {
        #[serde(skip_serializing_if = "Option::is_none")]
        company: Option<Company>,
    },
}

impl DonorIdentity {
    pub fn is_individual(&self) -> bool {
        matches!(self, DonorIdentity::Individual { .. })
    }

    pub fn company(&self) -> Option<&Company> {
        match self {
            DonorIdentity::Individual { company, .. } | DonorIdentity::Organization { company } => {
                company.as_ref()
            }
        }
    }

    /// The name to lead with when listing this donor.
    pub fn display_name(&self) -> &str {
        match self {
            DonorIdentity::Individual { name, .. } => name,
            DonorIdentity::Organization { company } => {
                company.as_ref().map(|c| c.name.as_str()).unwrap_or("")
            }
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} ({})", alias, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for DonorIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DonorIdentity::Individual {
                name,
                occupation,
                company,
            } => {
                write!(f, "{}", name)?;
                match (occupation, company) {
                    (Some(occupation), Some(company)) => write!(f, ", {} at {}", occupation, company),
                    (Some(occupation), None) => write!(f, ", {}", occupation),
                    (None, Some(company)) => write!(f, ", {}", company),
                    (None, None) => Ok(()),
                }
            }
            DonorIdentity::Organization { company: Some(company) } if !company.name.is_empty() => {
                write!(f, "{}", company)
            }
            DonorIdentity::Organization { .. } => write!(f, "Unknown contributor"),
        }
    }
}

/// Candidate name fields come in two shapes depending on the filing source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateName {
    /// Processed filings carry first/middle/last columns.
    Structured {
        first: Option<String>,
        middle: Option<String>,
        last: Option<String>,
        suffix: Option<String>,
    },
    /// E-filed reports carry a first name plus a free-text full name.
    Efiled {
        first: Option<String>,
        full_name: Option<String>,
        suffix: Option<String>,
    },
}

impl CandidateName {
    pub fn suffix(&self) -> Option<&str> {
        match self {
            CandidateName::Structured { suffix, .. } | CandidateName::Efiled { suffix, .. } => {
                suffix.as_deref()
            }
        }
    }
}

// Distinguishes a key that is present (possibly null) from a missing one.
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawExpenditure {
    #[serde(default)]
    transaction_id: Option<String>,
    #[serde(default)]
    expenditure_amount: f64,
    #[serde(default)]
    expenditure_date: Option<String>,
    #[serde(default)]
    dissemination_date: Option<String>,
    #[serde(default)]
    candidate_first_name: Option<String>,
    #[serde(default)]
    candidate_middle_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    candidate_last_name: Option<Option<String>>,
    #[serde(default)]
    candidate_name: Option<String>,
    #[serde(default)]
    candidate_suffix: Option<String>,
    #[serde(default)]
    candidate_office: Option<String>,
    #[serde(default)]
    candidate_office_state: Option<String>,
    #[serde(default)]
    candidate_office_district: Option<String>,
    #[serde(default)]
    candidate_party: Option<String>,
    #[serde(default)]
    subrace: Option<String>,
    #[serde(default)]
    support_oppose_indicator: Option<String>,
    #[serde(default)]
    committee_id: Option<String>,
    #[serde(default)]
    category_code: Option<String>,
    #[serde(default)]
    expenditure_description: Option<String>,
}

/// An independent expenditure, with the candidate shape resolved at ingestion.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawExpenditure")]
pub struct Expenditure {
    pub transaction_id: String,
    pub expenditure_amount: f64,
    pub expenditure_date: Option<String>,
    pub dissemination_date: Option<String>,
    pub candidate: CandidateName,
    pub candidate_office: Option<String>,
    pub candidate_office_state: Option<String>,
    pub candidate_office_district: Option<String>,
    pub candidate_party: Option<String>,
    pub subrace: Option<String>,
    pub support_oppose_indicator: Option<String>,
    pub committee_id: Option<String>,
    pub category_code: Option<String>,
    pub expenditure_description: Option<String>,
}

impl From<RawExpenditure> for Expenditure {
    fn from(raw: RawExpenditure) -> Self {
        let candidate = match raw.candidate_last_name {
            Some(last) => CandidateName::Structured {
                first: raw.candidate_first_name,
                middle: raw.candidate_middle_name,
                last,
                suffix: raw.candidate_suffix,
            },
            None => CandidateName::Efiled {
                first: raw.candidate_first_name,
                full_name: raw.candidate_name,
                suffix: raw.candidate_suffix,
            },
        };

        Self {
            transaction_id: raw.transaction_id.unwrap_or_default(),
            expenditure_amount: raw.expenditure_amount,
            expenditure_date: raw.expenditure_date,
            dissemination_date: raw.dissemination_date,
            candidate,
            candidate_office: raw.candidate_office,
            candidate_office_state: raw.candidate_office_state,
            candidate_office_district: raw.candidate_office_district,
            candidate_party: raw.candidate_party,
            subrace: raw.subrace,
            support_oppose_indicator: raw.support_oppose_indicator,
            committee_id: raw.committee_id,
            category_code: raw.category_code,
            expenditure_description: raw.expenditure_description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualConstant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeConstant {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSummary {
    #[serde(default)]
    pub total: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenditureFeed {
    #[serde(default)]
    pub recent: Vec<Expenditure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_name_key_selects_structured_shape() {
        let exp: Expenditure = serde_json::from_value(serde_json::json!({
            "transaction_id": "t1",
            "expenditure_amount": 10.0,
            "candidate_first_name": "JANE",
            "candidate_last_name": null
        }))
        .unwrap();

        assert!(matches!(exp.candidate, CandidateName::Structured { last: None, .. }));
    }

    #[test]
    fn test_missing_last_name_key_selects_efiled_shape() {
        let exp: Expenditure = serde_json::from_value(serde_json::json!({
            "transaction_id": "t2",
            "expenditure_amount": 10.0,
            "candidate_first_name": "JANE",
            "candidate_name": "DOE",
            "candidate_suffix": "JR"
        }))
        .unwrap();

        assert_eq!(
            exp.candidate,
            CandidateName::Efiled {
                first: Some("JANE".to_string()),
                full_name: Some("DOE".to_string()),
                suffix: Some("JR".to_string()),
            }
        );
        assert_eq!(exp.candidate.suffix(), Some("JR"));
    }

    #[test]
    fn test_contribution_defaults() {
        let c: Contribution = serde_json::from_value(serde_json::json!({
            "contributor_name": "ACME PAC"
        }))
        .unwrap();
        assert!(!c.claimed);
        assert_eq!(c.contributor_name.as_deref(), Some("ACME PAC"));
        assert!(c.contributor_last_name.is_none());
    }

    #[test]
    fn test_donor_identity_serializes_with_kind_tag() {
        let donor = DonorIdentity::Organization {
            company: Some(Company {
                name: "Coinbase".to_string(),
                alias: None,
            }),
        };
        let json = serde_json::to_value(&donor).unwrap();
        assert_eq!(json["kind"], "organization");
        assert_eq!(json["company"]["name"], "Coinbase");
        assert!(json["company"].get("alias").is_none());
    }

    #[test]
    fn test_donor_display() {
        let donor = DonorIdentity::Individual {
            name: "Brian Armstrong".to_string(),
            occupation: Some("CEO".to_string()),
            company: Some(Company {
                name: "Coinbase Inc".to_string(),
                alias: Some("Coinbase".to_string()),
            }),
        };
        assert_eq!(donor.to_string(), "Brian Armstrong, CEO at Coinbase (Coinbase Inc)");

        let empty = DonorIdentity::Organization {
            company: Some(Company {
                name: String::new(),
                alias: None,
            }),
        };
        assert_eq!(empty.to_string(), "Unknown contributor");
    }
}
