use log::{ debug, warn };
use serde_json::{ Map, Value };

use crate::models::analysis::AnalysisResult;
use crate::models::verdict::Verdict;

const DEFAULT_CONFIDENCE: f64 = 50.0;
const DEFAULT_REASONING: &str = "No reasoning provided";
const PARSE_FAILURE_RECOMMENDATION: &str = "Manual review recommended due to parsing issues";

/// Turns raw vision-model replies into [`AnalysisResult`] values.
///
/// Models often wrap the requested JSON in prose, so the parser decodes the
/// span between the first `{` and the last `}`. Anything that cannot be
/// decoded yields an `Uncertain` result carrying the raw reply as reasoning.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse one model reply. Never fails.
    pub fn parse(response: &str) -> AnalysisResult {
        let Some(candidate) = json_span(response) else {
            debug!("No JSON object found in model reply ({} characters)", response.chars().count());
            return Self::fallback(response);
        };

        // Repeated keys keep the last value
        match serde_json::from_str::<Map<String, Value>>(candidate) {
            Ok(mut reply) => Self::from_reply(&mut reply),
            Err(e) => {
                warn!("Could not decode JSON in model reply: {}", e);
                Self::fallback(response)
            }
        }
    }

    fn from_reply(reply: &mut Map<String, Value>) -> AnalysisResult {
        let verdict = match reply.get("verdict") {
            Some(Value::String(label)) => Verdict::from_model_label(label),
            _ => Verdict::Uncertain,
        };

        let confidence = reply
            .get("confidence")
            .and_then(numeric_value)
            .unwrap_or(DEFAULT_CONFIDENCE);

        let reasoning = match reply.remove("reasoning") {
            None | Some(Value::Null) => DEFAULT_REASONING.to_string(),
            Some(Value::String(text)) => text,
            Some(other) => other.to_string(),
        };

        AnalysisResult::new(
            verdict,
            confidence / 100.0,
            reasoning,
            string_list(reply.remove("indicators")),
            string_list(reply.remove("recommendations"))
        )
    }

    fn fallback(response: &str) -> AnalysisResult {
        AnalysisResult::new(
            Verdict::Uncertain,
            0.0,
            response,
            vec![],
            vec![PARSE_FAILURE_RECOMMENDATION.to_string()]
        )
    }
}

/// Inclusive span from the first `{` to the last `}`, if they are in order.
fn json_span(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if start < end {
        Some(&response[start..=end])
    } else {
        None
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn string_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) =>
            items
                .into_iter()
                .filter_map(|item| {
                    match item {
                        Value::String(s) => Some(s),
                        Value::Null => None,
                        other => Some(other.to_string()),
                    }
                })
                .collect(),
        Some(Value::String(s)) => vec![s],
        _ => vec![],
    }
}
