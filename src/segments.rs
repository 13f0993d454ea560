use serde::{Deserialize, Serialize};

use crate::classify::CutRange;

/// A time range, in seconds, to retain in the output video.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeepRange {
    pub start: f64,
    pub end: f64,
}

impl KeepRange {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Compute the complement of the cut ranges within `[0, total_duration]`.
///
/// Always returns exactly `cuts.len() + 1` ranges, including zero-length
/// ones when a cut touches the timeline edge or another cut. Callers must
/// pass ordered, non-overlapping cuts inside the timeline; no validation or
/// clamping is performed.
pub fn plan(cuts: &[CutRange], total_duration: f64) -> Vec<KeepRange> {
    let mut keeps = Vec::with_capacity(cuts.len() + 1);
    let mut previous_end = 0.0;

    for cut in cuts {
        keeps.push(KeepRange {
            start: previous_end,
            end: cut.start,
        });
        previous_end = cut.end;
    }

    keeps.push(KeepRange {
        start: previous_end,
        end: total_duration,
    });

    keeps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cut(start: f64, end: f64) -> CutRange {
        CutRange { start, end }
    }

    #[test]
    fn test_no_cuts_keeps_full_timeline() {
        let keeps = plan(&[], 10.0);
        assert_eq!(keeps, vec![KeepRange { start: 0.0, end: 10.0 }]);
    }

    #[test]
    fn test_keeps_tile_timeline_minus_cuts() {
        let cuts = vec![cut(1.0, 2.0), cut(4.0, 5.5)];
        let keeps = plan(&cuts, 10.0);

        assert_eq!(
            keeps,
            vec![
                KeepRange { start: 0.0, end: 1.0 },
                KeepRange { start: 2.0, end: 4.0 },
                KeepRange { start: 5.5, end: 10.0 },
            ]
        );

        // Contiguous coverage: kept plus removed spans the whole timeline
        let kept: f64 = keeps.iter().map(KeepRange::duration).sum();
        let removed: f64 = cuts.iter().map(CutRange::duration).sum();
        assert!((kept + removed - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_produces_cuts_plus_one_ranges() {
        let cuts = vec![cut(0.5, 1.0), cut(2.0, 2.5), cut(3.0, 3.5)];
        assert_eq!(plan(&cuts, 4.0).len(), cuts.len() + 1);
    }

    #[test]
    fn test_cut_at_timeline_start_yields_empty_first_keep() {
        // Matches the classifier scenario: "um" cut at (0.0, 0.3)
        let keeps = plan(&[cut(0.0, 0.3)], 3.0);

        assert_eq!(
            keeps,
            vec![
                KeepRange { start: 0.0, end: 0.0 },
                KeepRange { start: 0.3, end: 3.0 },
            ]
        );
    }

    #[test]
    fn test_cut_reaching_timeline_end_yields_empty_last_keep() {
        let keeps = plan(&[cut(8.0, 10.0)], 10.0);

        assert_eq!(
            keeps,
            vec![
                KeepRange { start: 0.0, end: 8.0 },
                KeepRange { start: 10.0, end: 10.0 },
            ]
        );
    }
}
