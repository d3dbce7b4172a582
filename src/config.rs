// ---------------------------------------------------------------------------
// Display and input constants
// ---------------------------------------------------------------------------

/// Results file read from the working directory at startup.
pub const DATA_FILE: &str = "genetics_results.csv";

/// Fixed chart title. Label of the 64-core experiment run, not a computed value.
pub const CHART_TITLE: &str = "Genetic Parallel Algorithm - 64 Cores";

pub const X_AXIS_LABEL: &str = "Generation";
pub const Y_AXIS_LABEL: &str = "Score";

pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];
