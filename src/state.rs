use crate::color::ColorMap;
use crate::data::model::{Dataset, Series};

// ---------------------------------------------------------------------------
// Chart state
// ---------------------------------------------------------------------------

/// Everything the plot needs, computed once from the loaded dataset.
pub struct ChartState {
    /// One line per thread, first-encountered order.
    pub series: Vec<Series>,

    /// Colour per thread.
    pub color_map: ColorMap,

    /// Number of records the series were built from.
    pub record_count: usize,
}

impl ChartState {
    /// Group the dataset into series and assign colours.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let series = dataset.series();
        let color_map = ColorMap::new(&series);
        for s in &series {
            log::debug!("{}: {} points", s.label(), s.points.len());
        }
        Self {
            series,
            color_map,
            record_count: dataset.len(),
        }
    }
}
