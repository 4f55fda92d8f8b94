use crate::models::{ChartPoint, ChartSeries, CountrySummary, Olympic, Participation};
use std::collections::HashSet;

pub const MEDALS_SERIES_NAME: &str = "Medals";

const SATURATION: u32 = 70;
const LIGHTNESS: u32 = 50;

pub fn compute_summary(participations: &[Participation]) -> CountrySummary {
    CountrySummary {
        participations: participations.len(),
        total_medals: participations.iter().map(|p| u64::from(p.medals_count)).sum(),
        total_athletes: participations.iter().map(|p| u64::from(p.athlete_count)).sum(),
    }
}

// Stored order, not sorted by year.
pub fn build_chart_series(participations: &[Participation]) -> Vec<ChartSeries> {
    vec![ChartSeries {
        name: MEDALS_SERIES_NAME.to_string(),
        series: participations
            .iter()
            .map(|p| ChartPoint {
                name: p.year.to_string(),
                value: u64::from(p.medals_count),
            })
            .collect(),
    }]
}

pub fn build_chart_data(olympics: &[Olympic]) -> Vec<ChartPoint> {
    olympics
        .iter()
        .map(|olympic| ChartPoint {
            name: olympic.country.clone(),
            value: compute_summary(&olympic.participations).total_medals,
        })
        .collect()
}

pub fn count_olympiads(olympics: &[Olympic]) -> usize {
    olympics
        .iter()
        .flat_map(|olympic| olympic.participations.iter().map(|p| p.year))
        .collect::<HashSet<_>>()
        .len()
}

pub fn generate_hsl_colors(n: usize) -> Vec<String> {
    let limit = n.max(1);
    (0..limit)
        .map(|i| {
            let hue = (360.0 / limit as f64 * i as f64).round() as u32;
            format!("hsl({hue}, {SATURATION}%, {LIGHTNESS}%)")
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::{olympic, participation};
    use super::*;

    #[test]
    fn summary_totals_participations() {
        let participations = vec![
            participation(1, 2000, "Sydney", 5, 20),
            participation(2, 2004, "Athens", 3, 18),
            participation(3, 2008, "Beijing", 4, 22),
        ];

        let summary = compute_summary(&participations);
        assert_eq!(summary.participations, 3);
        assert_eq!(summary.total_medals, 12);
        assert_eq!(summary.total_athletes, 60);
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        assert_eq!(compute_summary(&[]), CountrySummary::default());
    }

    #[test]
    fn chart_series_keeps_stored_order() {
        let participations = vec![
            participation(1, 2008, "Beijing", 4, 22),
            participation(2, 2000, "Sydney", 5, 20),
            participation(3, 2004, "Athens", 3, 18),
        ];

        let chart = build_chart_series(&participations);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].name, MEDALS_SERIES_NAME);
        let points: Vec<_> = chart[0]
            .series
            .iter()
            .map(|point| (point.name.as_str(), point.value))
            .collect();
        assert_eq!(points, vec![("2008", 4), ("2000", 5), ("2004", 3)]);
    }

    #[test]
    fn chart_data_sums_medals_per_country() {
        let olympics = vec![
            olympic(1, "Italy", &[(2012, 5), (2016, 3)]),
            olympic(2, "Spain", &[(2012, 10)]),
        ];

        let data = build_chart_data(&olympics);
        let values: Vec<_> = data.iter().map(|point| point.value).collect();
        assert_eq!(values, vec![8, 10]);
        assert_eq!(data[0].name, "Italy");
        assert_eq!(data[1].name, "Spain");
    }

    #[test]
    fn olympiads_are_counted_once_per_year() {
        let olympics = vec![
            olympic(1, "Italy", &[(2000, 1), (2004, 1)]),
            olympic(2, "Spain", &[(2004, 1), (2008, 1)]),
        ];
        assert_eq!(count_olympiads(&olympics), 3);
        assert_eq!(count_olympiads(&[]), 0);
    }

    #[test]
    fn colors_are_evenly_spaced() {
        let colors = generate_hsl_colors(4);
        assert_eq!(
            colors,
            vec![
                "hsl(0, 70%, 50%)",
                "hsl(90, 70%, 50%)",
                "hsl(180, 70%, 50%)",
                "hsl(270, 70%, 50%)",
            ]
        );
    }

    #[test]
    fn colors_never_empty() {
        assert_eq!(generate_hsl_colors(0), vec!["hsl(0, 70%, 50%)"]);
    }

    #[test]
    fn colors_round_hue() {
        let colors = generate_hsl_colors(7);
        assert_eq!(colors.len(), 7);
        assert_eq!(colors[1], "hsl(51, 70%, 50%)");
    }
}
