use crate::models::{ChartPoint, HomeResponse, Olympic};
use crate::stats::{count_olympiads, generate_hsl_colors};
use crate::store::{OlympicStore, Olympics, Subscription};
use crate::views::{country_route, layout::Layout};
use tokio_stream::StreamExt;
use tracing::debug;

pub const DEFAULT_COLORS: [&str; 4] = ["#5AA454", "#A10A28", "#C7B42C", "#AAAAAA"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeState {
    pub number_of_countries: usize,
    pub number_of_olympiads: usize,
    pub chart: Vec<ChartPoint>,
    pub colors: Vec<String>,
    pub colors_seeded: bool,
    pub layout: Layout,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            number_of_countries: 0,
            number_of_olympiads: 0,
            chart: Vec::new(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            colors_seeded: false,
            layout: Layout::default(),
        }
    }
}

pub struct HomeView {
    store: OlympicStore,
    olympics: Option<Subscription<Olympics>>,
    chart_data: Option<Subscription<Vec<ChartPoint>>>,
    state: HomeState,
}

impl HomeView {
    pub fn init(store: &OlympicStore, viewport_width: u32) -> Self {
        let mut view = Self {
            store: store.clone(),
            olympics: Some(store.olympics()),
            chart_data: Some(store.chart_data()),
            state: HomeState::default(),
        };
        view.on_resize(viewport_width);
        view
    }

    pub async fn next_emission(&mut self) -> bool {
        let (Some(olympics), Some(chart_data)) = (self.olympics.as_mut(), self.chart_data.as_mut())
        else {
            return false;
        };

        let Some(olympics) = olympics.next().await else {
            return false;
        };
        let Some(chart) = chart_data.next().await else {
            return false;
        };

        self.apply_olympics(&olympics);
        self.apply_chart_data(chart);
        true
    }

    pub fn apply_olympics(&mut self, olympics: &[Olympic]) {
        self.state.number_of_countries = olympics.len();
        self.state.number_of_olympiads = count_olympiads(olympics);
    }

    pub fn apply_chart_data(&mut self, chart: Vec<ChartPoint>) {
        if !self.state.colors_seeded {
            self.state.colors = generate_hsl_colors(chart.len());
            self.state.colors_seeded = true;
        }
        self.state.chart = chart;
    }

    pub fn on_resize(&mut self, viewport_width: u32) {
        self.state.layout = Layout::for_width(viewport_width);
    }

    pub fn on_select(&self, label: &str) -> Option<String> {
        let olympics = self.store.snapshot()?;
        let Some(olympic) = olympics.iter().find(|olympic| olympic.country == label) else {
            debug!(label, "selected label matches no country");
            return None;
        };
        Some(country_route(olympic.id))
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    pub fn to_response(&self) -> HomeResponse {
        HomeResponse {
            number_of_countries: self.state.number_of_countries,
            number_of_olympiads: self.state.number_of_olympiads,
            chart: self.state.chart.clone(),
            colors: self.state.colors.clone(),
            view: self.state.layout.view,
            show_legend: self.state.layout.show_legend,
        }
    }

    pub fn destroy(&mut self) {
        self.olympics = None;
        self.chart_data = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::fixtures::olympic;
    use crate::store::testing::{FailingSource, StaticSource};

    async fn loaded_store() -> OlympicStore {
        let store = OlympicStore::new();
        store
            .load_initial_data(&StaticSource(vec![
                olympic(1, "Italy", &[(2000, 5), (2004, 3)]),
                olympic(2, "Spain", &[(2004, 10), (2008, 1)]),
                olympic(3, "France", &[(2008, 2)]),
            ]))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn counters_and_chart_follow_the_store() {
        let store = loaded_store().await;
        let mut view = HomeView::init(&store, 1024);
        assert!(view.next_emission().await);

        let state = view.state();
        assert_eq!(state.number_of_countries, 3);
        assert_eq!(state.number_of_olympiads, 3);
        let values: Vec<_> = state.chart.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![8, 11, 2]);
        assert_eq!(state.colors, vec!["hsl(0, 70%, 50%)", "hsl(120, 70%, 50%)", "hsl(240, 70%, 50%)"]);
    }

    #[tokio::test]
    async fn colors_are_seeded_only_once() {
        let store = loaded_store().await;
        let mut view = HomeView::init(&store, 1024);
        assert!(view.next_emission().await);

        view.apply_chart_data(Vec::new());
        assert_eq!(view.state().colors.len(), 3);
        assert!(view.state().chart.is_empty());
    }

    #[tokio::test]
    async fn default_palette_before_first_emission() {
        let view = HomeView::init(&OlympicStore::new(), 1024);
        assert_eq!(view.state().colors.len(), DEFAULT_COLORS.len());
        assert!(!view.state().colors_seeded);
    }

    #[tokio::test]
    async fn selection_resolves_country_route() {
        let store = loaded_store().await;
        let view = HomeView::init(&store, 1024);
        assert_eq!(view.on_select("Spain").as_deref(), Some("/country/2"));
        assert_eq!(view.on_select("Atlantis"), None);
    }

    #[tokio::test]
    async fn selection_before_load_does_not_navigate() {
        let view = HomeView::init(&OlympicStore::new(), 1024);
        assert_eq!(view.on_select("Italy"), None);
    }

    #[tokio::test]
    async fn resize_toggles_legend() {
        let store = loaded_store().await;
        let mut view = HomeView::init(&store, 400);
        assert!(!view.to_response().show_legend);
        assert_eq!(view.to_response().view.width, 320);

        view.on_resize(600);
        assert!(view.to_response().show_legend);
        assert_eq!(view.to_response().view.width, 500);
    }

    #[tokio::test]
    async fn failed_load_shows_empty_dashboard() {
        let store = OlympicStore::new();
        let _ = store.load_initial_data(&FailingSource).await;

        let mut view = HomeView::init(&store, 1024);
        assert!(view.next_emission().await);
        assert_eq!(view.state().number_of_countries, 0);
        assert_eq!(view.state().number_of_olympiads, 0);
        assert_eq!(view.state().colors, vec!["hsl(0, 70%, 50%)"]);
    }

    #[tokio::test]
    async fn destroy_releases_subscriptions() {
        let store = loaded_store().await;
        let mut view = HomeView::init(&store, 1024);
        assert_eq!(store.subscriber_count(), 2);

        view.destroy();
        assert_eq!(store.subscriber_count(), 0);
        assert!(!view.next_emission().await);
    }
}
