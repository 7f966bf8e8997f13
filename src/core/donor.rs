use crate::core::text::{titlecase_suffix, TitlecaseRules};
use crate::domain::model::{Company, Contribution, DonorIdentity};
use std::collections::{HashMap, HashSet};

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Classifies a contributor as an individual or an organization and derives
/// the name to display, using the default casing rules.
pub fn resolve(
    contribution: &Contribution,
    company_aliases: &HashMap<String, String>,
    individual_employers: &HashSet<String>,
) -> DonorIdentity {
    resolve_with_rules(
        contribution,
        company_aliases,
        individual_employers,
        TitlecaseRules::defaults(),
    )
}

pub fn resolve_with_rules(
    contribution: &Contribution,
    company_aliases: &HashMap<String, String>,
    individual_employers: &HashSet<String>,
    rules: &TitlecaseRules,
) -> DonorIdentity {
    let company = || company_details(contribution, company_aliases, individual_employers, rules);

    if present(&contribution.contributor_first_name).is_some()
        || present(&contribution.contributor_last_name).is_some()
    {
        DonorIdentity::Individual {
            name: structured_name(contribution, rules),
            occupation: occupation(contribution, rules),
            company: company(),
        }
    } else if contribution.claimed {
        DonorIdentity::Individual {
            name: present(&contribution.contributor_name)
                .map(|name| rules.titlecase_last_first(name))
                .unwrap_or_default(),
            occupation: occupation(contribution, rules),
            company: company(),
        }
    } else if present(&contribution.contributor_name).is_some() {
        DonorIdentity::Organization { company: company() }
    } else {
        DonorIdentity::Organization {
            company: Some(Company {
                name: String::new(),
                alias: None,
            }),
        }
    }
}

/// "First Middle Last[, Suffix]"
fn structured_name(contribution: &Contribution, rules: &TitlecaseRules) -> String {
    let mut name = [
        &contribution.contributor_first_name,
        &contribution.contributor_middle_name,
        &contribution.contributor_last_name,
    ]
    .into_iter()
    .filter_map(present)
    .map(|part| rules.titlecase_individual_name(part))
    .collect::<Vec<_>>()
    .join(" ");

    if let Some(suffix) = present(&contribution.contributor_suffix) {
        name.push_str(", ");
        name.push_str(&titlecase_suffix(suffix));
    }
    name
}

fn occupation(contribution: &Contribution, rules: &TitlecaseRules) -> Option<String> {
    present(&contribution.contributor_occupation).map(|o| rules.titlecase_occupation(o))
}

/// The employer (or, failing that, the contributor name) as a company, unless
/// it is a known personal name filed in the employer field.
fn company_details(
    contribution: &Contribution,
    company_aliases: &HashMap<String, String>,
    individual_employers: &HashSet<String>,
    rules: &TitlecaseRules,
) -> Option<Company> {
    let raw = present(&contribution.contributor_employer)
        .or_else(|| present(&contribution.contributor_name))?;
    if individual_employers.contains(raw) {
        return None;
    }
    Some(Company {
        name: rules.titlecase_company(raw),
        alias: company_aliases.get(raw).cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases() -> HashMap<String, String> {
        HashMap::from([("COINBASE INC".to_string(), "Coinbase".to_string())])
    }

    fn employers() -> HashSet<String> {
        HashSet::from(["BRIAN ARMSTRONG".to_string()])
    }

    #[test]
    fn test_structured_name_is_individual() {
        let c = Contribution {
            contributor_first_name: Some("BRIAN".to_string()),
            contributor_middle_name: Some("E".to_string()),
            contributor_last_name: Some("ARMSTRONG".to_string()),
            contributor_suffix: Some("JR".to_string()),
            contributor_employer: Some("COINBASE INC".to_string()),
            contributor_occupation: Some("CEO".to_string()),
            ..Default::default()
        };

        let donor = resolve(&c, &aliases(), &employers());
        assert_eq!(
            donor,
            DonorIdentity::Individual {
                name: "Brian E Armstrong, Jr.".to_string(),
                occupation: Some("CEO".to_string()),
                company: Some(Company {
                    name: "Coinbase Inc".to_string(),
                    alias: Some("Coinbase".to_string()),
                }),
            }
        );
    }

    #[test]
    fn test_last_name_only_is_individual() {
        let c = Contribution {
            contributor_last_name: Some("WINKLEVOSS".to_string()),
            claimed: true,
            ..Default::default()
        };
        let donor = resolve(&c, &HashMap::new(), &HashSet::new());
        assert!(donor.is_individual());
        assert_eq!(donor.display_name(), "Winklevoss");
        assert_eq!(donor.company(), None);
    }

    #[test]
    fn test_claimed_uses_free_text_name() {
        let c = Contribution {
            contributor_name: Some("GARLINGHOUSE, BRAD".to_string()),
            contributor_occupation: Some("EXECUTIVE".to_string()),
            claimed: true,
            ..Default::default()
        };
        let donor = resolve(&c, &aliases(), &employers());
        match donor {
            DonorIdentity::Individual {
                name,
                occupation,
                company,
            } => {
                assert_eq!(name, "Brad Garlinghouse");
                assert_eq!(occupation.as_deref(), Some("Executive"));
                // No employer, so the contributor name stands in for it.
                assert_eq!(company.unwrap().name, "Garlinghouse, Brad");
            }
            other => panic!("expected individual, got {:?}", other),
        }
    }

    #[test]
    fn test_unstructured_name_is_organization() {
        let c = Contribution {
            contributor_name: Some("COINBASE INC".to_string()),
            ..Default::default()
        };
        let donor = resolve(&c, &aliases(), &employers());
        assert_eq!(
            donor,
            DonorIdentity::Organization {
                company: Some(Company {
                    name: "Coinbase Inc".to_string(),
                    alias: Some("Coinbase".to_string()),
                }),
            }
        );
    }

    #[test]
    fn test_no_name_fields_is_empty_organization() {
        let donor = resolve(&Contribution::default(), &aliases(), &employers());
        assert!(!donor.is_individual());
        assert_eq!(donor.company().map(|c| c.name.as_str()), Some(""));
    }

    #[test]
    fn test_individual_employer_is_never_a_company() {
        let c = Contribution {
            contributor_first_name: Some("JESSE".to_string()),
            contributor_last_name: Some("POWELL".to_string()),
            contributor_employer: Some("BRIAN ARMSTRONG".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve(&c, &aliases(), &employers()).company(), None);

        let org = Contribution {
            contributor_name: Some("BRIAN ARMSTRONG".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve(&org, &aliases(), &employers()),
            DonorIdentity::Organization { company: None }
        );
    }

    #[test]
    fn test_employer_takes_precedence_over_name() {
        let c = Contribution {
            contributor_name: Some("DOE, JANE".to_string()),
            contributor_employer: Some("RIPPLE LABS".to_string()),
            claimed: true,
            ..Default::default()
        };
        let donor = resolve(&c, &HashMap::new(), &HashSet::new());
        assert_eq!(donor.company().unwrap().name, "Ripple Labs");
        assert_eq!(donor.company().unwrap().alias, None);
    }
}
