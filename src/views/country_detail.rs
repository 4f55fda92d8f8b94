use crate::models::{ChartSeries, CountryDetailResponse, CountrySummary, Olympic};
use crate::stats::{build_chart_series, compute_summary};
use crate::store::{OlympicStore, Olympics, Subscription};
use crate::views::layout::Layout;
use tokio_stream::StreamExt;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryDetailState {
    pub country: Option<Olympic>,
    pub summary: CountrySummary,
    pub chart: Vec<ChartSeries>,
    pub layout: Layout,
}

pub struct CountryDetailView {
    country_id: Option<i64>,
    subscription: Option<Subscription<Olympics>>,
    state: CountryDetailState,
}

pub fn parse_country_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

impl CountryDetailView {
    pub fn init(route_id: Option<&str>, viewport_width: u32, store: &OlympicStore) -> Self {
        let mut view = Self {
            country_id: parse_country_id(route_id),
            subscription: None,
            state: CountryDetailState::default(),
        };
        view.on_resize(viewport_width);
        view.subscription = Some(store.olympics());
        view
    }

    pub async fn next_emission(&mut self) -> bool {
        let Some(subscription) = self.subscription.as_mut() else {
            return false;
        };

        match subscription.next().await {
            Some(olympics) => {
                self.apply(&olympics);
                true
            }
            None => {
                warn!("olympic data feed ended; no data for country view");
                false
            }
        }
    }

    // No match leaves state untouched.
    pub fn apply(&mut self, olympics: &[Olympic]) -> bool {
        let Some(country_id) = self.country_id else {
            debug!("no usable country id in route");
            return false;
        };
        let Some(olympic) = olympics.iter().find(|olympic| olympic.id == country_id) else {
            debug!(country_id, "country not found in olympic data");
            return false;
        };

        self.state.summary = compute_summary(&olympic.participations);
        self.state.chart = build_chart_series(&olympic.participations);
        self.state.country = Some(olympic.clone());
        true
    }

    pub fn on_resize(&mut self, viewport_width: u32) {
        self.state.layout = Layout::for_width(viewport_width);
    }

    pub fn state(&self) -> &CountryDetailState {
        &self.state
    }

    pub fn to_response(&self) -> CountryDetailResponse {
        CountryDetailResponse {
            country_id: self.country_id,
            country: self.state.country.as_ref().map(|olympic| olympic.country.clone()),
            summary: self.state.summary,
            chart: self.state.chart.clone(),
            view: self.state.layout.view,
        }
    }

    pub fn destroy(&mut self) {
        self.subscription = None;
    }
}
