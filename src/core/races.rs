use crate::config::reference::ReferenceTables;
use std::str::FromStr;

/// District code for at-large seats; never part of a race id.
pub const AT_LARGE_DISTRICT: &str = "00";

/// Builds a race id such as `H-04`, `S` or `H` (at-large).
pub fn build_race_id(office: Option<&str>, district: Option<&str>) -> String {
    let mut race_id = office.unwrap_or_default().to_string();
    if let Some(district) = district.filter(|d| !d.is_empty() && *d != AT_LARGE_DISTRICT) {
        if !race_id.is_empty() {
            race_id.push('-');
        }
        race_id.push_str(district);
    }
    race_id
}

/// Race id prefixed with the state, as used in `/elections/{id}` paths.
pub fn build_race_id_with_state(state: &str, office: Option<&str>, district: Option<&str>) -> String {
    let race_id = build_race_id(office, district);
    if race_id.is_empty() {
        state.to_string()
    } else {
        format!("{}-{}", state, race_id)
    }
}

/// Human name for a race id without state: `H-04` -> `House District 4`.
pub fn race_name(race_id: &str, tables: &ReferenceTables) -> String {
    if let Some(name) = tables.race_names.get(race_id) {
        return name.clone();
    }

    let (office, district) = match race_id.split_once('-') {
        Some((office, district)) => (office, Some(district)),
        None => (race_id, None),
    };
    let chamber = match office {
        "H" => "House",
        "S" => "Senate",
        "P" => "President",
        _ => return race_id.to_string(),
    };
    match district {
        Some(d) => {
            let number = d.trim_start_matches('0');
            format!("{} District {}", chamber, if number.is_empty() { d } else { number })
        }
        None => chamber.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceType {
    Primary,
    PrimaryRunoff,
    General,
    GeneralRunoff,
    SpecialPrimary,
    SpecialPrimaryRunoff,
    SpecialGeneral,
    SpecialGeneralRunoff,
    Convention,
}

impl FromStr for RaceType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "primary" => RaceType::Primary,
            "primary_runoff" => RaceType::PrimaryRunoff,
            "general" => RaceType::General,
            "general_runoff" => RaceType::GeneralRunoff,
            "special_primary" => RaceType::SpecialPrimary,
            "special_primary_runoff" => RaceType::SpecialPrimaryRunoff,
            "special_general" => RaceType::SpecialGeneral,
            "special_general_runoff" => RaceType::SpecialGeneralRunoff,
            "convention" => RaceType::Convention,
            _ => return Err(()),
        })
    }
}

impl RaceType {
    fn label(self) -> &'static str {
        match self {
            RaceType::Primary => "primary",
            RaceType::PrimaryRunoff => "primary runoff",
            RaceType::General => "general",
            RaceType::GeneralRunoff => "general runoff",
            RaceType::SpecialPrimary => "special primary",
            RaceType::SpecialPrimaryRunoff => "special primary runoff",
            RaceType::SpecialGeneral => "special general",
            RaceType::SpecialGeneralRunoff => "special general runoff",
            RaceType::Convention => "convention",
        }
    }

    /// General elections are not split by party.
    fn is_partisan(self) -> bool {
        matches!(
            self,
            RaceType::Primary
                | RaceType::PrimaryRunoff
                | RaceType::SpecialPrimary
                | RaceType::SpecialPrimaryRunoff
                | RaceType::Convention
        )
    }
}

pub fn party_name(initial: char) -> Option<&'static str> {
    match initial.to_ascii_uppercase() {
        'D' => Some("Democratic"),
        'R' => Some("Republican"),
        'L' => Some("Libertarian"),
        'G' => Some("Green"),
        'I' => Some("Independent"),
        _ => None,
    }
}

/// Label for a sub-race such as `"Democratic primary"`; `None` when the
/// type is absent or unrecognised. Not sentence-cased.
pub fn subrace_label(
    subrace: Option<&str>,
    party: Option<char>,
    tables: &ReferenceTables,
) -> Option<String> {
    let subrace = subrace.filter(|s| !s.is_empty())?;

    if let Some(party) = party {
        if let Some(label) = tables.subrace_labels.get(&format!("{}:{}", subrace, party)) {
            return Some(label.clone());
        }
    }
    if let Some(label) = tables.subrace_labels.get(subrace) {
        return Some(label.clone());
    }

    let race_type: RaceType = subrace.parse().ok()?;
    let party_word = party
        .filter(|_| race_type.is_partisan())
        .and_then(party_name);
    Some(match party_word {
        Some(word) => format!("{} {}", word, race_type.label()),
        None => race_type.label().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_id_omits_at_large_district() {
        assert_eq!(build_race_id(Some("H"), Some("00")), "H");
        assert_eq!(build_race_id(Some("H"), Some("04")), "H-04");
        assert_eq!(build_race_id(Some("S"), None), "S");
        assert_eq!(build_race_id(None, None), "");
    }

    #[test]
    fn test_race_id_with_state() {
        assert_eq!(build_race_id_with_state("CA", Some("H"), Some("04")), "CA-H-04");
        assert_eq!(build_race_id_with_state("WY", Some("H"), Some("00")), "WY-H");
        assert_eq!(build_race_id_with_state("OH", Some("S"), None), "OH-S");
    }

    #[test]
    fn test_race_name() {
        let tables = ReferenceTables::default();
        assert_eq!(race_name("H-04", &tables), "House District 4");
        assert_eq!(race_name("H-12", &tables), "House District 12");
        assert_eq!(race_name("H", &tables), "House");
        assert_eq!(race_name("S", &tables), "Senate");
        assert_eq!(race_name("X-1", &tables), "X-1");

        let mut tables = ReferenceTables::default();
        tables
            .race_names
            .insert("H".to_string(), "House (at-large)".to_string());
        assert_eq!(race_name("H", &tables), "House (at-large)");
    }

    #[test]
    fn test_subrace_label() {
        let tables = ReferenceTables::default();
        assert_eq!(
            subrace_label(Some("primary"), Some('D'), &tables).as_deref(),
            Some("Democratic primary")
        );
        assert_eq!(
            subrace_label(Some("general"), Some('R'), &tables).as_deref(),
            Some("general")
        );
        assert_eq!(
            subrace_label(Some("primary_runoff"), Some('X'), &tables).as_deref(),
            Some("primary runoff")
        );
        assert_eq!(subrace_label(Some("unknown"), Some('D'), &tables), None);
        assert_eq!(subrace_label(None, Some('D'), &tables), None);
    }

    #[test]
    fn test_subrace_label_overrides() {
        let mut tables = ReferenceTables::default();
        tables
            .subrace_labels
            .insert("primary:D".to_string(), "democratic top-two primary".to_string());
        assert_eq!(
            subrace_label(Some("primary"), Some('D'), &tables).as_deref(),
            Some("democratic top-two primary")
        );
    }
}
