//! Read-only views over the published datasets.
//!
//! Every page performs its fetches, then either produces its view or the
//! fixed "unavailable" fallback. Fetch failures never escape this layer.

use crate::config::reference::ReferenceTables;
use crate::core::expenditures::{present, ExpenditureRow, Link};
use crate::core::fetch::fetch_constant;
use crate::core::format::{format_currency, humanize_list, locale_cmp};
use crate::core::races::race_name;
use crate::domain::model::{CommitteeConstant, ExpenditureFeed, IndividualConstant, RaceSummary};
use crate::domain::ports::ConstantSource;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

const COMPACT_LIMIT: usize = 5;
const FULL_PAGE_EXPENDITURES: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rendered<T> {
    Ready { view: T },
    Unavailable { subject: String, message: String },
}

impl<T> Rendered<T> {
    pub fn unavailable(subject: &str) -> Self {
        Rendered::Unavailable {
            subject: subject.to_string(),
            message: format!("Something went wrong while loading {}.", subject),
        }
    }

    pub fn view(&self) -> Option<&T> {
        match self {
            Rendered::Ready { view } => Some(view),
            Rendered::Unavailable { .. } => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Rendered::Unavailable { .. })
    }
}

impl<T: fmt::Display> fmt::Display for Rendered<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Ready { view } => write!(f, "{}", view),
            Rendered::Unavailable { message, .. } => writeln!(f, "{}", message),
        }
    }
}

#[async_trait]
pub trait Page: Send + Sync {
    type View: Serialize + fmt::Display + Send;

    /// Names what failed to load in the fallback message.
    fn subject(&self) -> &'static str;

    async fn load<S: ConstantSource>(&self, source: &S) -> Option<Self::View>;

    async fn render<S: ConstantSource>(&self, source: &S) -> Rendered<Self::View> {
        match self.load(source).await {
            Some(view) => Rendered::Ready { view },
            None => Rendered::unavailable(self.subject()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub link: Link,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.link.label)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        write!(f, "  [{}]", self.link.href)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndividualsList {
    pub items: Vec<ListItem>,
}

impl fmt::Display for IndividualsList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            writeln!(f, "- {}", item)?;
        }
        Ok(())
    }
}

/// The part of an id after the first hyphen: `"p-armstrong"` -> `"armstrong"`.
fn id_sort_key(id: &str) -> &str {
    id.split_once('-').map(|(_, rest)| rest).unwrap_or("")
}

pub fn individuals_list(data: HashMap<String, IndividualConstant>) -> IndividualsList {
    let mut individuals: Vec<IndividualConstant> = data.into_values().collect();
    individuals.sort_by(|a, b| {
        locale_cmp(id_sort_key(&a.id), id_sort_key(&b.id)).then_with(|| a.id.cmp(&b.id))
    });

    let items = individuals
        .into_iter()
        .map(|individual| ListItem {
            link: Link {
                href: format!("/individuals/{}", individual.id),
                label: individual.name,
            },
            detail: (!individual.company.is_empty()).then(|| humanize_list(&individual.company)),
        })
        .collect();
    IndividualsList { items }
}

pub struct IndividualsPage;

#[async_trait]
impl Page for IndividualsPage {
    type View = IndividualsList;

    fn subject(&self) -> &'static str {
        "the list of individuals"
    }

    async fn load<S: ConstantSource>(&self, source: &S) -> Option<IndividualsList> {
        let data: HashMap<String, IndividualConstant> = fetch_constant(source, "individuals").await?;
        tracing::debug!("Rendering {} individuals", data.len());
        Some(individuals_list(data))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RacesList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub items: Vec<ListItem>,
}

impl fmt::Display for RacesList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(heading) = &self.heading {
            writeln!(f, "{}", heading)?;
            writeln!(f)?;
        }
        if let Some(intro) = &self.intro {
            writeln!(f, "{}", intro)?;
            writeln!(f)?;
        }
        for item in &self.items {
            writeln!(f, "- {}", item)?;
        }
        Ok(())
    }
}

/// "California House District 4" for `"CA-H-04"`.
fn race_label(race_id: &str, tables: &ReferenceTables) -> String {
    match race_id.split_once('-') {
        Some((state, rest)) => format!("{} {}", tables.state_name(state), race_name(rest, tables)),
        None => race_name(race_id, tables),
    }
}

pub fn races_list(
    data: HashMap<String, RaceSummary>,
    tables: &ReferenceTables,
    full_page: bool,
) -> RacesList {
    let mut races: Vec<(String, RaceSummary)> = data.into_iter().collect();
    races.sort_by(|(a_id, a), (b_id, b)| b.total.total_cmp(&a.total).then_with(|| a_id.cmp(b_id)));
    if !full_page {
        races.truncate(COMPACT_LIMIT);
    }

    let items = races
        .into_iter()
        .map(|(race_id, summary)| ListItem {
            link: Link {
                label: race_label(&race_id, tables),
                href: format!("/elections/{}", race_id),
            },
            detail: Some(format_currency(summary.total)),
        })
        .collect();

    RacesList {
        heading: full_page.then(|| "Races".to_string()),
        intro: full_page.then(|| {
            "These PACs have already spent heavily to influence the outcome of multiple \
             Congressional races."
                .to_string()
        }),
        items,
    }
}

pub struct RacesPage<'a> {
    pub tables: &'a ReferenceTables,
    pub full_page: bool,
}

#[async_trait]
impl<'a> Page for RacesPage<'a> {
    type View = RacesList;

    fn subject(&self) -> &'static str {
        "the list of races"
    }

    async fn load<S: ConstantSource>(&self, source: &S) -> Option<RacesList> {
        let data: HashMap<String, RaceSummary> = fetch_constant(source, "races").await?;
        Some(races_list(data, self.tables, self.full_page))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentExpenditures {
    pub rows: Vec<ExpenditureRow>,
}

impl fmt::Display for RecentExpenditures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

pub struct RecentExpendituresPage<'a> {
    pub tables: &'a ReferenceTables,
    pub full_page: bool,
}

#[async_trait]
impl<'a> Page for RecentExpendituresPage<'a> {
    type View = RecentExpenditures;

    fn subject(&self) -> &'static str {
        "recent expenditures"
    }

    async fn load<S: ConstantSource>(&self, source: &S) -> Option<RecentExpenditures> {
        let feed: ExpenditureFeed = fetch_constant(source, "expenditures").await?;
        let committees: Option<HashMap<String, CommitteeConstant>> =
            fetch_constant(source, "committees").await;

        let limit = if self.full_page {
            FULL_PAGE_EXPENDITURES
        } else {
            COMPACT_LIMIT
        };
        let shown = &feed.recent[..feed.recent.len().min(limit)];
        Some(RecentExpenditures {
            rows: present(shown, committees.as_ref(), self.tables),
        })
    }
}
