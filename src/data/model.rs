use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Record – one row of the results file
// ---------------------------------------------------------------------------

/// A single `thread,generation,score` row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identifier of the parallel execution unit that produced the row.
    pub thread: String,
    /// Step index within the thread's run (x).
    pub generation: i64,
    /// Fitness value recorded at that generation (y).
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Series – one plotted line
// ---------------------------------------------------------------------------

/// All `(generation, score)` pairs of one thread, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub thread: String,
    pub points: Vec<[f64; 2]>,
}

impl Series {
    /// Legend label for this series.
    pub fn label(&self) -> String {
        format!("thread {}", self.thread)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// Every record of the results file, in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct thread identifiers in first-encountered order.
    pub fn threads(&self) -> Vec<&str> {
        let mut seen: IndexMap<&str, ()> = IndexMap::new();
        for rec in &self.records {
            seen.entry(rec.thread.as_str()).or_insert(());
        }
        seen.into_keys().collect()
    }

    /// Group records by thread.
    ///
    /// Series come out in first-encountered thread order; points inside a
    /// series keep file order.
    pub fn series(&self) -> Vec<Series> {
        let mut groups: IndexMap<&str, Vec<[f64; 2]>> = IndexMap::new();
        for rec in &self.records {
            groups
                .entry(rec.thread.as_str())
                .or_default()
                .push([rec.generation as f64, rec.score]);
        }
        groups
            .into_iter()
            .map(|(thread, points)| Series {
                thread: thread.to_string(),
                points,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(thread: &str, generation: i64, score: f64) -> Record {
        Record {
            thread: thread.to_string(),
            generation,
            score,
        }
    }

    #[test]
    fn series_split_interleaved_threads() {
        let ds = Dataset::from_records(vec![
            rec("1", 1, 10.0),
            rec("2", 1, 20.0),
            rec("1", 2, 15.0),
            rec("2", 2, 25.0),
        ]);

        let series = ds.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].thread, "1");
        assert_eq!(series[0].points, vec![[1.0, 10.0], [2.0, 15.0]]);
        assert_eq!(series[1].thread, "2");
        assert_eq!(series[1].points, vec![[1.0, 20.0], [2.0, 25.0]]);
    }

    #[test]
    fn series_follow_first_encountered_order() {
        let ds = Dataset::from_records(vec![
            rec("7", 1, 1.0),
            rec("3", 1, 2.0),
            rec("7", 2, 3.0),
            rec("12", 1, 4.0),
        ]);

        assert_eq!(ds.threads(), vec!["7", "3", "12"]);
        let order: Vec<String> = ds.series().into_iter().map(|s| s.thread).collect();
        assert_eq!(order, vec!["7", "3", "12"]);
    }

    #[test]
    fn points_keep_file_order_not_generation_order() {
        let ds = Dataset::from_records(vec![
            rec("a", 5, 50.0),
            rec("a", 1, 10.0),
            rec("a", 3, 30.0),
        ]);

        let series = ds.series();
        assert_eq!(series.len(), 1);
        assert_eq!(
            series[0].points,
            vec![[5.0, 50.0], [1.0, 10.0], [3.0, 30.0]]
        );
    }

    #[test]
    fn empty_dataset_has_no_series() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert!(ds.threads().is_empty());
        assert!(ds.series().is_empty());
    }

    #[test]
    fn series_label_names_the_thread() {
        let s = Series {
            thread: "04".to_string(),
            points: Vec::new(),
        };
        assert_eq!(s.label(), "thread 04");
    }
}
