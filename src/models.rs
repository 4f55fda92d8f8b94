use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub id: i64,
    pub year: u32,
    pub city: String,
    pub medals_count: u32,
    pub athlete_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Olympic {
    pub id: i64,
    pub country: String,
    #[serde(default)]
    pub participations: Vec<Participation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub series: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountrySummary {
    pub participations: usize,
    pub total_medals: u64,
    pub total_athletes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub number_of_countries: usize,
    pub number_of_olympiads: usize,
    pub chart: Vec<ChartPoint>,
    pub colors: Vec<String>,
    pub view: ViewSize,
    pub show_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDetailResponse {
    pub country_id: Option<i64>,
    pub country: Option<String>,
    pub summary: CountrySummary,
    pub chart: Vec<ChartSeries>,
    pub view: ViewSize,
}

#[derive(Debug, Deserialize)]
pub struct ViewportQuery {
    pub width: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct SelectQuery {
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectResponse {
    pub route: Option<String>,
}
