use firesight_common::filter::{distinct_values, filter_by_value};
use firesight_common::Record;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    /// Incident label shown by the renderer's tooltip
    pub incident: Option<String>,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPlotData {
    pub points: Vec<ScatterPoint>,
    /// Every year present in the unfiltered records, offered as filter options
    pub years: Vec<String>,
    pub x_max: f64,
    pub y_max: f64,
}

pub struct ScatterFields<'a> {
    pub x: &'a str,
    pub y: &'a str,
    pub label: &'a str,
    pub year: &'a str,
}

/// Scatter of two measures, optionally restricted to records of one year.
///
/// Records missing either measure are left out.
pub fn scatter_plot_data(
    records: &[Record],
    fields: &ScatterFields,
    year: Option<&str>,
) -> ScatterPlotData {
    let years = distinct_values(records, fields.year);
    let filtered;
    let selected = match year {
        Some(year) => {
            filtered = filter_by_value(records, fields.year, year);
            filtered.records()
        }
        None => records,
    };

    let points: Vec<ScatterPoint> = selected
        .iter()
        .filter_map(|r| {
            Some(ScatterPoint {
                incident: r.raw(fields.label).map(String::from),
                x: r.number(fields.x).value()?,
                y: r.number(fields.y).value()?,
            })
        })
        .collect();

    let x_max = points.iter().map(|p| p.x).fold(0.0, f64::max);
    let y_max = points.iter().map(|p| p.y).fold(0.0, f64::max);

    ScatterPlotData {
        points,
        years,
        x_max,
        y_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: ScatterFields<'static> = ScatterFields {
        x: "acres",
        y: "injuries",
        label: "name",
        year: "year",
    };

    fn records() -> Vec<Record> {
        vec![
            Record::from_iter([("name", "Camp"), ("year", "2018"), ("acres", "153336"), ("injuries", "17")]),
            Record::from_iter([("name", "Tubbs"), ("year", "2017"), ("acres", "36807"), ("injuries", "1")]),
            Record::from_iter([("name", "Carr"), ("year", "2018"), ("acres", "229651"), ("injuries", "")]),
        ]
    }

    #[test]
    fn test_all_years() {
        let data = scatter_plot_data(&records(), &FIELDS, None);
        assert_eq!(data.points.len(), 2);
        assert_eq!(data.years, vec!["2018", "2017"]);
        assert_eq!(data.points[0].incident.as_deref(), Some("Camp"));
        assert_eq!(data.x_max, 153336.0);
        assert_eq!(data.y_max, 17.0);
    }

    #[test]
    fn test_year_filter() {
        let data = scatter_plot_data(&records(), &FIELDS, Some("2017"));
        assert_eq!(data.points.len(), 1);
        assert_eq!(data.points[0].incident.as_deref(), Some("Tubbs"));
        assert_eq!(data.years.len(), 2);

        let data = scatter_plot_data(&records(), &FIELDS, Some("1999"));
        assert!(data.points.is_empty());
    }
}
