use predicate_core::config::scoring_config::HistoryPoints;

use crate::inputs::HistoryStatus;

pub fn calculate(status: HistoryStatus, points: &HistoryPoints) -> u32 {
    match status {
        HistoryStatus::Clean => points.clean,
        HistoryStatus::Conditional => points.conditional,
        HistoryStatus::Adverse => points.adverse,
        HistoryStatus::Unknown => points.unknown,
    }
}
