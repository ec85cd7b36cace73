mod model;
mod stages;

pub use model::{Indicator, StageAggregate, StageTotals};
pub use stages::{StageDescriptor, STAGES};

use crate::store::{IndicatorSource, StoreError};

/// Sums every stage in [`STAGES`] order for one user.
pub fn compute_aggregates(
    source: &impl IndicatorSource,
    user_id: i64,
) -> Result<Vec<StageAggregate>, StoreError> {
    let totals = source.stage_totals(&STAGES, user_id)?;

    let aggregates = STAGES
        .iter()
        .zip(totals)
        .map(|(stage, totals)| StageAggregate::from_totals(stage.name, totals))
        .collect::<Vec<_>>();

    log::debug!(
        "aggregates_computed user_id={} stages={}",
        user_id,
        aggregates.len()
    );
    Ok(aggregates)
}

#[cfg(test)]
mod tests {
    use super::{compute_aggregates, StageTotals};
    use crate::store::fixture::RecordingSource;

    #[test]
    fn keeps_stage_order_and_names() {
        let source = RecordingSource::new().with_totals(
            "Etapa 3",
            StageTotals {
                energy: 1.0,
                water: 2.0,
                co2: 3.0,
            },
        );

        let aggregates = compute_aggregates(&source, 7).expect("aggregates");

        let names = aggregates
            .iter()
            .map(|aggregate| aggregate.stage_name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Etapa 1", "Etapa 2", "Etapa 3"]);
        assert_eq!(aggregates[2].values(), [1.0, 2.0, 3.0]);
        assert_eq!(aggregates[0].values(), [0.0, 0.0, 0.0]);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn store_failure_propagates() {
        let source = RecordingSource::new().failing();
        assert!(compute_aggregates(&source, 7).is_err());
    }
}
