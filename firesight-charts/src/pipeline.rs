use firesight_common::RecordSet;
use firesight_layout::{WordLayout, WordLayoutEngine};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

use crate::bar::{bar_chart_data, BarChartData};
use crate::box_plot::{box_plot_data, BoxPlotData};
use crate::config::PipelineConfig;
use crate::error::ChartError;
use crate::regression_plot::{regression_plot_data, RegressionPlotData};
use crate::scatter::{scatter_plot_data, ScatterFields, ScatterPlotData};
use crate::word_cloud::word_cloud_data;

pub const INJURIES_LABEL: &str = "Injuries";
pub const FATALITIES_LABEL: &str = "Fatalities";

/// Builds the data behind each wildfire chart from a record set.
///
/// Every operation recomputes its result from the records it is given and
/// allocates a fresh result; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct ChartPipeline {
    config: PipelineConfig,
}

impl ChartPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Acres burned per county
    pub fn bar_chart(&self, records: &RecordSet) -> BarChartData {
        let fields = &self.config.fields;
        bar_chart_data(
            records,
            &fields.county,
            &fields.acres_burned,
            self.config.drop_empty_keys,
        )
    }

    /// Spread of positive injury and fatality counts
    pub fn box_plot(&self, records: &RecordSet) -> Result<BoxPlotData, ChartError> {
        let fields = &self.config.fields;
        box_plot_data(
            records,
            &[
                (INJURIES_LABEL, fields.injuries.as_str()),
                (FATALITIES_LABEL, fields.fatalities.as_str()),
            ],
        )
    }

    /// Acres burned against personnel involved, with a least-squares line
    pub fn regression_plot(&self, records: &RecordSet) -> Result<RegressionPlotData, ChartError> {
        let fields = &self.config.fields;
        regression_plot_data(records, &fields.personnel, &fields.acres_burned)
    }

    /// Injuries against acres burned, optionally for a single year
    pub fn scatter_plot(&self, records: &RecordSet, year: Option<&str>) -> ScatterPlotData {
        let fields = &self.config.fields;
        scatter_plot_data(
            records,
            &ScatterFields {
                x: &fields.acres_burned,
                y: &fields.injuries,
                label: &fields.incident_name,
                year: &fields.year,
            },
            year,
        )
    }

    /// County frequency word cloud, seeded from the config or from entropy
    pub fn word_cloud(&self, records: &RecordSet) -> Result<WordLayout, ChartError> {
        self.word_cloud_with_rng(records, &mut self.config.word_cloud.rng())
    }

    pub fn word_cloud_with_rng<R: Rng>(
        &self,
        records: &RecordSet,
        rng: &mut R,
    ) -> Result<WordLayout, ChartError> {
        let engine = WordLayoutEngine::try_new(self.config.word_cloud.clone())?;
        Ok(word_cloud_data(records, &self.config.fields.county, &engine, rng))
    }

    /// Builds every chart. A failure in one chart leaves the others intact.
    #[tracing::instrument(skip_all, fields(records = records.len()))]
    pub fn build_all(&self, records: &RecordSet) -> ChartSet {
        let chart_set = ChartSet {
            bar_chart: Ok(self.bar_chart(records)),
            box_plot: self.box_plot(records),
            regression_plot: self.regression_plot(records),
            scatter_plot: Ok(self.scatter_plot(records, None)),
            word_cloud: self.word_cloud(records),
        };
        for (chart, err) in chart_set.errors() {
            tracing::warn!(chart, "chart data preparation failed: {err}");
        }
        chart_set
    }
}

/// The outcome of every chart for one record set
#[derive(Debug, Clone)]
pub struct ChartSet {
    pub bar_chart: Result<BarChartData, ChartError>,
    pub box_plot: Result<BoxPlotData, ChartError>,
    pub regression_plot: Result<RegressionPlotData, ChartError>,
    pub scatter_plot: Result<ScatterPlotData, ChartError>,
    pub word_cloud: Result<WordLayout, ChartError>,
}

impl ChartSet {
    /// Names and errors of the charts that failed
    pub fn errors(&self) -> Vec<(&'static str, &ChartError)> {
        [
            ("bar_chart", self.bar_chart.as_ref().err()),
            ("box_plot", self.box_plot.as_ref().err()),
            ("regression_plot", self.regression_plot.as_ref().err()),
            ("scatter_plot", self.scatter_plot.as_ref().err()),
            ("word_cloud", self.word_cloud.as_ref().err()),
        ]
        .into_iter()
        .filter_map(|(name, err)| err.map(|err| (name, err)))
        .collect()
    }

    /// JSON object keyed by chart name. Each entry holds either `data` or `error`.
    pub fn to_json(&self) -> Result<Value, ChartError> {
        Ok(json!({
            "bar_chart": outcome_json(&self.bar_chart)?,
            "box_plot": outcome_json(&self.box_plot)?,
            "regression_plot": outcome_json(&self.regression_plot)?,
            "scatter_plot": outcome_json(&self.scatter_plot)?,
            "word_cloud": outcome_json(&self.word_cloud)?,
        }))
    }
}

fn outcome_json<T: Serialize>(outcome: &Result<T, ChartError>) -> Result<Value, ChartError> {
    Ok(match outcome {
        Ok(data) => json!({ "data": serde_json::to_value(data)? }),
        Err(err) => json!({ "error": err.to_string() }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use firesight_common::Record;
    use firesight_layout::WordLayoutConfig;

    #[test]
    fn test_invalid_canvas_only_fails_word_cloud() {
        let pipeline = ChartPipeline::new(PipelineConfig {
            word_cloud: WordLayoutConfig {
                width: -1.0,
                ..Default::default()
            },
            ..Default::default()
        });
        let records = RecordSet::from(vec![Record::from_iter([
            ("Counties", "Napa"),
            ("AcresBurned", "10"),
        ])]);

        let charts = pipeline.build_all(&records);
        assert!(charts.bar_chart.is_ok());
        assert!(charts.box_plot.is_ok());
        assert!(charts.regression_plot.is_ok());
        assert!(charts.scatter_plot.is_ok());
        assert!(matches!(charts.word_cloud, Err(ChartError::LayoutError(_))));

        let errors = charts.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "word_cloud");

        let json = charts.to_json().unwrap();
        assert!(json["word_cloud"]["error"].is_string());
        assert!(json["bar_chart"]["data"]["groups"].is_array());
    }
}
