use askama::Template;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{error, info, warn};

use super::AppState;
use crate::core::feed::types::NewsEntry;
use crate::core::query;

const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardParams {
    q: Option<String>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    keyword: String,
    columns: Vec<Vec<NewsEntry>>,
    prompt_for_keyword: bool,
    no_results: bool,
}

impl DashboardTemplate {
    fn prompt(keyword: String) -> Self {
        Self {
            keyword,
            columns: Vec::new(),
            prompt_for_keyword: true,
            no_results: false,
        }
    }

    fn empty(keyword: String) -> Self {
        Self {
            keyword,
            columns: Vec::new(),
            prompt_for_keyword: false,
            no_results: true,
        }
    }

    fn results(keyword: String, entries: Vec<NewsEntry>) -> Self {
        Self {
            keyword,
            columns: into_columns(entries, GRID_COLUMNS),
            prompt_for_keyword: false,
            no_results: false,
        }
    }
}

/// Render the two-panel dashboard for an optional `q` query parameter.
///
/// A missing parameter searches the configured default keyword; a blank one
/// short-circuits to the prompt state without touching the network. Fetch and
/// parse failures are logged but render the same page as a genuinely empty
/// result set.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let keyword = params
        .q
        .unwrap_or_else(|| state.config.default_query.clone());

    if query::is_blank(&keyword) {
        return render(DashboardTemplate::prompt(keyword));
    }

    let entries = match state.news.search(&keyword).await {
        Ok(entries) => entries,
        Err(search_error) => {
            warn!(%keyword, error = %search_error, "search feed unavailable, rendering empty state");
            Vec::new()
        }
    };

    if entries.is_empty() {
        info!(%keyword, "no entries to display");
        return render(DashboardTemplate::empty(keyword));
    }

    render(DashboardTemplate::results(keyword, entries))
}

/// Distribute entries across columns by `index mod columns`, keeping feed
/// order within each column.
fn into_columns(entries: Vec<NewsEntry>, columns: usize) -> Vec<Vec<NewsEntry>> {
    let mut grid: Vec<Vec<NewsEntry>> = (0..columns).map(|_| Vec::new()).collect();
    for (index, entry) in entries.into_iter().enumerate() {
        grid[index % columns].push(entry);
    }
    grid
}

fn render(template: DashboardTemplate) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(render_error) => {
            error!(error = %render_error, "dashboard template render failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "render failed").into_response()
        }
    }
}
