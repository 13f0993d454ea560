use serde::{Deserialize, Serialize};

use crate::fillers::FillerLexicon;
use crate::transcription::Word;

/// A time range, in seconds, to remove from the source video.
///
/// Ranges come straight from word timestamps, so a collection produced by
/// [`classify`] is ordered and non-overlapping. Adjacent ranges are never
/// merged; the segment planner tolerates that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutRange {
    pub start: f64,
    pub end: f64,
}

impl CutRange {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Find the time ranges occupied by filler words.
///
/// Unconditional fillers are always cut. Conditional fillers are cut only
/// when the word itself lasts longer than `threshold` seconds, or when the
/// pause before the next word does. The look-ahead uses the immediately
/// following word even when that word is itself a filler. For the last word
/// in the transcript the gap defaults to zero, so only the duration test
/// can trigger.
///
/// Matching is exact and case-sensitive. Pure function: same transcript,
/// lexicon and threshold always yield the same cuts.
pub fn classify(words: &[Word], lexicon: &FillerLexicon, threshold: f64) -> Vec<CutRange> {
    let mut cuts = Vec::new();

    for (i, word) in words.iter().enumerate() {
        if lexicon.is_unconditional(&word.word) {
            cuts.push(CutRange {
                start: word.start,
                end: word.end,
            });
        } else if lexicon.is_conditional(&word.word) {
            let own_duration = word.end - word.start;
            let gap_to_next = words.get(i + 1).map_or(0.0, |next| next.start - word.end);

            if own_duration > threshold || gap_to_next > threshold {
                cuts.push(CutRange {
                    start: word.start,
                    end: word.end,
                });
            }
        }
    }

    cuts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, start: f64, end: f64) -> Word {
        Word {
            start,
            end,
            word: text.to_string(),
        }
    }

    fn sample_transcript() -> Vec<Word> {
        vec![
            word("um", 0.0, 0.3),
            word("so", 0.3, 0.5),
            word("I", 0.5, 0.7),
            word("think", 2.5, 2.9),
        ]
    }

    #[test]
    fn test_unconditional_always_cut() {
        let lexicon = FillerLexicon::new(&["um"], &["so"]);
        let cuts = classify(&sample_transcript(), &lexicon, 0.5);

        // "so" lasts 0.2s and the gap to "I" is 0.0s, both under threshold
        assert_eq!(cuts, vec![CutRange { start: 0.0, end: 0.3 }]);
    }

    #[test]
    fn test_conditional_triggered_by_gap() {
        let lexicon = FillerLexicon::new(&[], &["I"]);
        // "I" ends at 0.7 and "think" starts at 2.5: gap is 1.8s
        let cuts = classify(&sample_transcript(), &lexicon, 0.5);

        assert_eq!(cuts, vec![CutRange { start: 0.5, end: 0.7 }]);
    }

    #[test]
    fn test_conditional_triggered_by_duration() {
        let lexicon = FillerLexicon::new(&[], &["think"]);
        let cuts = classify(&sample_transcript(), &lexicon, 0.3);

        // "think" is last: gap defaults to 0, but its duration 0.4s > 0.3s
        assert_eq!(cuts, vec![CutRange { start: 2.5, end: 2.9 }]);
    }

    #[test]
    fn test_last_word_gap_never_triggers() {
        let lexicon = FillerLexicon::new(&[], &["think"]);
        // duration 0.4s <= 1.0s and the gap condition cannot apply
        let cuts = classify(&sample_transcript(), &lexicon, 1.0);

        assert!(cuts.is_empty());
    }

    #[test]
    fn test_no_matches_yields_no_cuts() {
        let lexicon = FillerLexicon::new(&["hmm"], &["well"]);
        let cuts = classify(&sample_transcript(), &lexicon, 0.5);

        assert!(cuts.is_empty());
    }

    #[test]
    fn test_empty_transcript() {
        let lexicon = FillerLexicon::new(&["um"], &["so"]);
        let cuts = classify(&[], &lexicon, 0.5);

        assert!(cuts.is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let lexicon = FillerLexicon::new(&["um"], &[]);
        let words = vec![word("Um", 0.0, 0.3), word("um", 0.3, 0.6)];
        let cuts = classify(&words, &lexicon, 0.5);

        assert_eq!(cuts, vec![CutRange { start: 0.3, end: 0.6 }]);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let lexicon = FillerLexicon::new(&["um"], &["so", "think"]);
        let words = sample_transcript();

        let first = classify(&words, &lexicon, 0.5);
        let second = classify(&words, &lexicon, 0.5);

        assert_eq!(first, second);
    }

    #[test]
    fn test_adjacent_cuts_are_not_merged() {
        let lexicon = FillerLexicon::new(&["um", "uh"], &[]);
        let words = vec![word("um", 0.0, 0.3), word("uh", 0.3, 0.5)];
        let cuts = classify(&words, &lexicon, 0.5);

        assert_eq!(
            cuts,
            vec![
                CutRange { start: 0.0, end: 0.3 },
                CutRange { start: 0.3, end: 0.5 },
            ]
        );
    }

    #[test]
    fn test_gap_lookahead_ignores_whether_next_word_is_filler() {
        // "so" is followed by a long pause before "um", itself an
        // unconditional filler. The gap test still uses that pause.
        let lexicon = FillerLexicon::new(&["um"], &["so"]);
        let words = vec![
            word("so", 0.0, 0.2),
            word("um", 1.5, 1.8),
            word("go", 1.8, 2.0),
        ];
        let cuts = classify(&words, &lexicon, 0.5);

        assert_eq!(
            cuts,
            vec![
                CutRange { start: 0.0, end: 0.2 },
                CutRange { start: 1.5, end: 1.8 },
            ]
        );
    }
}
