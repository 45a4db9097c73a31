use firesight_common::Record;
use firesight_layout::{WordLayout, WordLayoutEngine};
use firesight_stats::aggregate::count_by;
use rand::Rng;

/// Word cloud of how often each value of `key_field` occurs.
pub fn word_cloud_data<R: Rng>(
    records: &[Record],
    key_field: &str,
    engine: &WordLayoutEngine,
    rng: &mut R,
) -> WordLayout {
    let counts = count_by(records, key_field);
    engine.layout_with_rng(counts.iter().map(|g| (g.key.as_str(), g.count)), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use firesight_layout::WordLayoutConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_frequencies_become_weights() {
        let records = vec![
            Record::from_iter([("county", "Butte")]),
            Record::from_iter([("county", "Napa")]),
            Record::from_iter([("county", "Butte")]),
            Record::from_iter([("other", "x")]),
        ];
        let engine = WordLayoutEngine::try_new(WordLayoutConfig::default()).unwrap();
        let layout = word_cloud_data(&records, "county", &engine, &mut StdRng::seed_from_u64(1));

        let weights: Vec<_> = layout
            .words
            .iter()
            .map(|w| (w.text.as_str(), w.weight))
            .collect();
        assert_eq!(weights, vec![("Butte", 20.0), ("Napa", 10.0)]);
    }
}
