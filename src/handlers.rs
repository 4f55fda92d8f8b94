use crate::errors::AppError;
use crate::models::{
    CountryDetailResponse, HomeResponse, Olympic, SelectQuery, SelectResponse, ViewportQuery,
};
use crate::state::AppState;
use crate::ui::{render_country, render_index};
use crate::views::{CountryDetailView, HomeView, layout::MEDIUM_BREAKPOINT};
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use tokio::time::timeout;
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let home = load_home(&state, MEDIUM_BREAKPOINT).await?;
    Ok(Html(render_index(&home)))
}

pub async fn country(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let detail = load_country(&state, &id, MEDIUM_BREAKPOINT).await?;
    Ok(Html(render_country(&detail)))
}

pub async fn get_home(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Result<Json<HomeResponse>, AppError> {
    let width = query.width.unwrap_or(MEDIUM_BREAKPOINT);
    Ok(Json(load_home(&state, width).await?))
}

pub async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ViewportQuery>,
) -> Result<Json<CountryDetailResponse>, AppError> {
    let width = query.width.unwrap_or(MEDIUM_BREAKPOINT);
    Ok(Json(load_country(&state, &id, width).await?))
}

pub async fn select(
    State(state): State<AppState>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<SelectResponse>, AppError> {
    let label = query.label.trim();
    if label.is_empty() {
        return Err(AppError::bad_request("label must not be empty"));
    }

    let view = HomeView::init(&state.store, MEDIUM_BREAKPOINT);
    Ok(Json(SelectResponse {
        route: view.on_select(label),
    }))
}

pub async fn get_olympics(State(state): State<AppState>) -> Result<Json<Vec<Olympic>>, AppError> {
    let olympics = state
        .store
        .snapshot()
        .ok_or_else(|| AppError::unavailable("olympic data not loaded"))?;
    Ok(Json(olympics.as_ref().clone()))
}

async fn load_home(state: &AppState, width: u32) -> Result<HomeResponse, AppError> {
    let mut view = HomeView::init(&state.store, width);
    let received = timeout(state.data_timeout, view.next_emission()).await;
    view.destroy();

    match received {
        Ok(true) => Ok(view.to_response()),
        _ => {
            warn!("home view received no olympic data");
            Err(AppError::unavailable("olympic data not loaded"))
        }
    }
}

async fn load_country(state: &AppState, id: &str, width: u32) -> Result<CountryDetailResponse, AppError> {
    let mut view = CountryDetailView::init(Some(id), width, &state.store);
    let received = timeout(state.data_timeout, view.next_emission()).await;
    view.destroy();

    match received {
        Ok(true) => Ok(view.to_response()),
        _ => {
            warn!(id, "country view received no olympic data");
            Err(AppError::unavailable("olympic data not loaded"))
        }
    }
}
