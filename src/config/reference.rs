//! Static lookup tables used while rendering.
//!
//! Built once at startup (defaults plus the `[reference]` section of the site
//! config) and then only ever borrowed.

use crate::core::donor;
use crate::core::text::TitlecaseRules;
use crate::domain::model::{Contribution, DonorIdentity};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

const STATES: &[(&str, &str)] = &[
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "U.S. Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

// FEC disbursement category codes.
const CATEGORIES: &[(&str, &str)] = &[
    ("001", "Administrative/salary/overhead expenses"),
    ("002", "Travel expenses"),
    ("003", "Solicitation and fundraising expenses"),
    ("004", "Advertising expenses"),
    ("005", "Polling expenses"),
    ("006", "Campaign materials"),
    ("007", "Campaign event expenses"),
    ("008", "Transfers"),
    ("009", "Loan repayments"),
    ("010", "Refunds of contributions"),
    ("011", "Political contributions"),
    ("012", "Donations"),
];

fn builtin(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceTables {
    /// Raw employer/contributor name -> canonical alias.
    pub company_aliases: HashMap<String, String>,
    /// Employer strings that are really personal names.
    pub individual_employers: HashSet<String>,
    /// Extra or replacement state names, by abbreviation.
    pub state_names: HashMap<String, String>,
    /// Extra or replacement category labels, by code.
    pub category_labels: HashMap<String, String>,
    /// Race names by race id (without state), e.g. `"H-04"`.
    pub race_names: HashMap<String, String>,
    /// Sub-race labels keyed `"{type}"` or `"{type}:{party initial}"`.
    pub subrace_labels: HashMap<String, String>,
    pub titlecase: TitlecaseRules,
}

impl ReferenceTables {
    pub fn state_name<'a>(&'a self, abbr: &'a str) -> &'a str {
        self.state_names
            .get(abbr)
            .map(String::as_str)
            .or_else(|| builtin(STATES, abbr))
            .unwrap_or(abbr)
    }

    /// Category label for `code`; unknown codes pass through.
    pub fn category_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.category_labels
            .get(code)
            .map(String::as_str)
            .or_else(|| builtin(CATEGORIES, code))
            .unwrap_or(code)
    }

    pub fn resolve_donor(&self, contribution: &Contribution) -> DonorIdentity {
        donor::resolve_with_rules(
            contribution,
            &self.company_aliases,
            &self.individual_employers,
            &self.titlecase,
        )
    }
}

impl Validate for ReferenceTables {
    fn validate(&self) -> Result<()> {
        for (raw, alias) in &self.company_aliases {
            validate_non_empty_string("reference.company_aliases", raw)?;
            validate_non_empty_string("reference.company_aliases", alias)?;
        }
        for employer in &self.individual_employers {
            validate_non_empty_string("reference.individual_employers", employer)?;
        }
        Ok(())
    }
}
