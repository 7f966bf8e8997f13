use anyhow::Result;
use follow_the_crypto::{
    HttpConstantSource, IndividualsPage, LocalConstantSource, Page, RacesPage,
    RecentExpendituresPage, ReferenceTables, Rendered,
};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn http_source(server: &MockServer) -> HttpConstantSource {
    HttpConstantSource::new(&server.url("/constants"), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_individuals_list_over_http() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/constants/individuals.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "p-winklevoss": {"id": "p-winklevoss", "name": "Cameron Winklevoss", "company": ["Gemini"]},
                "p-armstrong": {"id": "p-armstrong", "name": "Brian Armstrong", "company": ["Coinbase"]},
                "p-garlinghouse": {"id": "p-garlinghouse", "name": "Brad Garlinghouse", "company": ["Ripple", "Ripple Labs"]}
            }));
    });

    let rendered = IndividualsPage.render(&http_source(&server)).await;
    api_mock.assert();

    let list = rendered.view().expect("individuals should render");
    let hrefs: Vec<&str> = list.items.iter().map(|i| i.link.href.as_str()).collect();
    assert_eq!(
        hrefs,
        vec![
            "/individuals/p-armstrong",
            "/individuals/p-garlinghouse",
            "/individuals/p-winklevoss"
        ]
    );
    assert_eq!(list.items[1].detail.as_deref(), Some("Ripple and Ripple Labs"));
    Ok(())
}

#[tokio::test]
async fn test_missing_individuals_renders_fallback_without_items() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/constants/individuals.json");
        then.status(404);
    });

    let rendered = IndividualsPage.render(&http_source(&server)).await;
    api_mock.assert();

    assert!(rendered.is_unavailable());
    assert!(rendered.view().is_none());
    let text = rendered.to_string();
    assert_eq!(text, "Something went wrong while loading the list of individuals.\n");
    assert!(!text.contains("- "));

    let json = serde_json::to_value(&rendered)?;
    assert_eq!(json["status"], "unavailable");
    assert_eq!(json["subject"], "the list of individuals");
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_indistinguishable_from_missing() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/constants/races.json");
        then.status(503);
    });

    let tables = ReferenceTables::default();
    let page = RacesPage {
        tables: &tables,
        full_page: true,
    };
    let rendered = page.render(&http_source(&server)).await;
    assert_eq!(rendered, Rendered::unavailable("the list of races"));
    Ok(())
}

#[tokio::test]
async fn test_recent_expenditures_from_local_directory() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(
        dir.path().join("expenditures.json"),
        serde_json::to_vec(&serde_json::json!({
            "recent": [
                {
                    "transaction_id": "SE.1",
                    "expenditure_amount": 2000000,
                    "expenditure_date": "2024-02-20",
                    "dissemination_date": "2024-02-21",
                    "candidate_first_name": "KATIE",
                    "candidate_last_name": "PORTER",
                    "candidate_office": "S",
                    "candidate_office_state": "CA",
                    "candidate_party": "DEM",
                    "subrace": "primary",
                    "support_oppose_indicator": "O",
                    "committee_id": "C00835959",
                    "category_code": "004"
                },
                {
                    "transaction_id": "SE.2",
                    "expenditure_amount": 150000.5,
                    "dissemination_date": "2024-03-01",
                    "candidate_first_name": "JIM",
                    "candidate_name": "BANKS",
                    "candidate_office": "S",
                    "candidate_office_state": "IN",
                    "support_oppose_indicator": "S",
                    "committee_id": "C00000000"
                }
            ]
        }))?,
    )
    .await?;
    tokio::fs::write(
        dir.path().join("committees.json"),
        r#"{"C00835959": {"id": "C00835959", "name": "Fairshake"}}"#,
    )
    .await?;

    let source = LocalConstantSource::new(dir.path());
    let tables = ReferenceTables::default();
    let page = RecentExpendituresPage {
        tables: &tables,
        full_page: false,
    };
    let rendered = page.render(&source).await;
    let rows = &rendered.view().expect("expenditures should render").rows;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].target, "Oppose Katie Porter");
    assert_eq!(
        rows[0].date_line().as_deref(),
        Some("February 20, 2024 (disseminated February 21, 2024)")
    );
    assert_eq!(
        rows[0].race_line().as_deref(),
        Some("Democratic primary, California Senate")
    );
    assert_eq!(rows[0].committee.as_ref().map(|c| c.label.as_str()), Some("Fairshake"));
    assert_eq!(rows[0].amount, "$2,000,000.00");

    assert_eq!(rows[1].target, "Support Jim Banks");
    assert_eq!(rows[1].date_line().as_deref(), Some("March 1, 2024"));
    // Committee map is present but has no entry for this id.
    assert_eq!(rows[1].committee, None);
    assert_eq!(rows[1].amount, "$150,000.50");
    Ok(())
}

#[tokio::test]
async fn test_expenditures_render_without_committees() -> Result<()> {
    let dir = TempDir::new()?;
    tokio::fs::write(
        dir.path().join("expenditures.json"),
        r#"{"recent": [{"transaction_id": "SE.9", "expenditure_amount": 1, "committee_id": "C1"}]}"#,
    )
    .await?;

    let tables = ReferenceTables::default();
    let page = RecentExpendituresPage {
        tables: &tables,
        full_page: true,
    };
    let rendered = page.render(&LocalConstantSource::new(dir.path())).await;
    let rows = &rendered.view().expect("committees are optional").rows;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].committee, None);
    Ok(())
}
