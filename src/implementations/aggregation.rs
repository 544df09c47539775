use std::collections::HashSet;
use log::debug;

use crate::models::analysis::AnalysisResult;
use crate::models::verdict::Verdict;

/// Reduces per-frame results of one video into a single overall result
/// by majority vote over verdicts and mean confidence.
pub struct ResultAggregator;

impl ResultAggregator {
    /// Aggregate frame results. Never fails; an empty slice yields `Uncertain`.
    pub fn aggregate(results: &[AnalysisResult]) -> AnalysisResult {
        if results.is_empty() {
            return AnalysisResult::new(
                Verdict::Uncertain,
                0.0,
                "No frames analyzed",
                vec![],
                vec!["Provide video frames for analysis".to_string()]
            );
        }

        let mut counts = [0usize; 3];
        for result in results {
            counts[verdict_slot(result.verdict())] += 1;
        }

        // Strict comparison keeps the earliest declared verdict on ties.
        let mut overall = Verdict::ALL[0];
        for verdict in Verdict::ALL {
            if counts[verdict_slot(verdict)] > counts[verdict_slot(overall)] {
                overall = verdict;
            }
        }

        let total_confidence: f64 = results
            .iter()
            .map(|r| r.confidence())
            .sum();
        let avg_confidence = total_confidence / (results.len() as f64);

        let reasoning = format!(
            "Analyzed {} frames. Verdicts: AI={}, Authentic={}, Uncertain={}. Average confidence: {:.1}%",
            results.len(),
            counts[verdict_slot(Verdict::AiGenerated)],
            counts[verdict_slot(Verdict::Authentic)],
            counts[verdict_slot(Verdict::Uncertain)],
            avg_confidence * 100.0
        );
        debug!("{}", reasoning);

        AnalysisResult::new(
            overall,
            avg_confidence,
            reasoning,
            unique(results.iter().flat_map(|r| r.indicators())),
            unique(results.iter().flat_map(|r| r.recommendations()))
        )
    }
}

fn verdict_slot(verdict: Verdict) -> usize {
    match verdict {
        Verdict::AiGenerated => 0,
        Verdict::Authentic => 1,
        Verdict::Uncertain => 2,
    }
}

/// Deduplicate by exact string equality, keeping first-seen order
fn unique<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen: HashSet<&'a String> = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}
