use crate::config::reference::ReferenceTables;
use crate::core::format::{format_currency, format_date_from_string};
use crate::core::races::{build_race_id, build_race_id_with_state, race_name, subrace_label};
use crate::core::text::{sentence_case, titlecase_suffix, TitlecaseRules};
use crate::domain::model::{CandidateName, CommitteeConstant, Expenditure};
use crate::utils::error::Result;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub label: String,
}

/// Display data for one expenditure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenditureRow {
    pub transaction_id: String,
    /// Expenditure date, or the dissemination date when that is all we have.
    pub date: Option<String>,
    /// Dissemination date, only set when it differs in role from `date`.
    pub disseminated: Option<String>,
    /// "Support Jane Doe" / "Oppose Jane Doe"
    pub target: String,
    pub party: Option<String>,
    pub amount: String,
    pub subrace: Option<String>,
    pub race: Option<Link>,
    pub committee: Option<Link>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl ExpenditureRow {
    pub fn date_line(&self) -> Option<String> {
        let date = self.date.as_ref()?;
        Some(match &self.disseminated {
            Some(disseminated) => format!("{} (disseminated {})", date, disseminated),
            None => date.clone(),
        })
    }

    /// "Democratic primary, California House District 4"
    pub fn race_line(&self) -> Option<String> {
        match (&self.subrace, &self.race) {
            (Some(subrace), Some(race)) => Some(format!("{}, {}", subrace, race.label)),
            (Some(subrace), None) => Some(subrace.clone()),
            (None, Some(race)) => Some(race.label.clone()),
            (None, None) => None,
        }
    }
}

impl fmt::Display for ExpenditureRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(date) = self.date_line() {
            writeln!(f, "{}", date)?;
        }
        write!(f, "{}", self.target)?;
        if let Some(party) = &self.party {
            write!(f, " ({})", party)?;
        }
        writeln!(f, "  {}", self.amount)?;
        if let Some(race) = self.race_line() {
            writeln!(f, "{}", race)?;
        }
        if let Some(committee) = &self.committee {
            writeln!(f, "{}", committee.label)?;
        }
        if let Some(category) = &self.category {
            writeln!(f, "{}", category)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "{}", description)?;
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Candidate name as displayed, including the suffix for structured records.
pub fn candidate_display_name(candidate: &CandidateName, rules: &TitlecaseRules) -> String {
    let join = |parts: [Option<&str>; 3]| {
        parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .map(|p| rules.titlecase_individual_name(p))
            .collect::<Vec<_>>()
            .join(" ")
    };

    match candidate {
        CandidateName::Structured {
            first,
            middle,
            last,
            suffix,
        } => {
            // Only the first given name; nicknames and extra names follow it.
            let first = first.as_deref().and_then(|f| f.split(' ').next());
            let mut name = join([first, middle.as_deref(), last.as_deref()]);
            if let Some(suffix) = non_empty(suffix) {
                if !name.is_empty() {
                    name.push(' ');
                }
                name.push_str(&titlecase_suffix(suffix));
            }
            name
        }
        CandidateName::Efiled {
            first,
            full_name,
            suffix,
        } => join([first.as_deref(), full_name.as_deref(), suffix.as_deref()]),
    }
}

fn present_one(
    expenditure: &Expenditure,
    committees: Option<&HashMap<String, CommitteeConstant>>,
    tables: &ReferenceTables,
) -> ExpenditureRow {
    let name = candidate_display_name(&expenditure.candidate, &tables.titlecase);
    let stance = if expenditure.support_oppose_indicator.as_deref() == Some("S") {
        "Support"
    } else {
        "Oppose"
    };
    let target = if name.is_empty() {
        stance.to_string()
    } else {
        format!("{} {}", stance, name)
    };

    let party_initial = non_empty(&expenditure.candidate_party).and_then(|p| p.chars().next());
    let subrace = subrace_label(expenditure.subrace.as_deref(), party_initial, tables)
        .filter(|label| !label.is_empty())
        .map(|label| sentence_case(&label));

    let office = non_empty(&expenditure.candidate_office);
    let district = non_empty(&expenditure.candidate_office_district);
    let race = non_empty(&expenditure.candidate_office_state).map(|state| Link {
        href: format!(
            "/elections/{}",
            build_race_id_with_state(state, office, district)
        ),
        label: format!(
            "{} {}",
            tables.state_name(state),
            race_name(&build_race_id(office, district), tables)
        ),
    });

    let (date, disseminated) = match (
        non_empty(&expenditure.expenditure_date),
        non_empty(&expenditure.dissemination_date),
    ) {
        (Some(spent), dissemination) => (
            Some(format_date_from_string(spent)),
            dissemination.map(format_date_from_string),
        ),
        (None, Some(dissemination)) => (Some(format_date_from_string(dissemination)), None),
        (None, None) => (None, None),
    };

    let committee = match (committees, non_empty(&expenditure.committee_id)) {
        (Some(committees), Some(id)) => match committees.get(id) {
            Some(committee) => Some(Link {
                href: format!("/committees/{}", id),
                label: committee.name.clone(),
            }),
            None => {
                tracing::debug!("No committee constant for {}; omitting link", id);
                None
            }
        },
        _ => None,
    };

    ExpenditureRow {
        transaction_id: expenditure.transaction_id.clone(),
        date,
        disseminated,
        target,
        party: party_initial.map(String::from),
        amount: format_currency(expenditure.expenditure_amount),
        subrace,
        race,
        committee,
        category: non_empty(&expenditure.category_code)
            .map(|code| tables.category_label(code).to_string()),
        description: expenditure.expenditure_description.clone().filter(|d| !d.is_empty()),
    }
}

/// One row per expenditure, in input order.
pub fn present(
    expenditures: &[Expenditure],
    committees: Option<&HashMap<String, CommitteeConstant>>,
    tables: &ReferenceTables,
) -> Vec<ExpenditureRow> {
    expenditures
        .iter()
        .map(|expenditure| present_one(expenditure, committees, tables))
        .collect()
}

#[derive(Serialize)]
struct CsvRow<'a> {
    transaction_id: &'a str,
    date: Option<String>,
    target: &'a str,
    party: Option<&'a str>,
    amount: &'a str,
    race: Option<String>,
    committee: Option<&'a str>,
    category: Option<&'a str>,
    description: Option<&'a str>,
}

/// Flattens rows into CSV with a header line.
pub fn rows_to_csv(rows: &[ExpenditureRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(CsvRow {
            transaction_id: &row.transaction_id,
            date: row.date_line(),
            target: &row.target,
            party: row.party.as_deref(),
            amount: &row.amount,
            race: row.race_line(),
            committee: row.committee.as_ref().map(|c| c.label.as_str()),
            category: row.category.as_deref(),
            description: row.description.as_deref(),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
