#[cfg(test)]
mod tests {
    use log::info;

    use crate::implementations::parsing::ResponseParser;
    use crate::models::verdict::Verdict;

    const PARSE_FAILURE_RECOMMENDATION: &str = "Manual review recommended due to parsing issues";

    fn setup() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_parse_valid_json_response() {
        setup();
        let response = serde_json::json!({
            "verdict": "AI_GENERATED",
            "confidence": 85,
            "reasoning": "Multiple artifacts detected",
            "indicators": ["artifact1", "artifact2"],
            "recommendations": ["review manually"]
        }).to_string();

        let result = ResponseParser::parse(&response);

        assert_eq!(result.verdict(), Verdict::AiGenerated);
        assert!(approx_eq(result.confidence(), 0.85));
        assert!(result.reasoning().contains("Multiple artifacts"));
        assert_eq!(result.indicators(), ["artifact1", "artifact2"]);
        assert_eq!(result.recommendations(), ["review manually"]);
    }

    #[test]
    fn test_parse_authentic_and_uncertain_verdicts() {
        setup();
        let authentic = ResponseParser::parse(
            r#"{"verdict": "AUTHENTIC", "confidence": 90, "reasoning": "Looks real", "indicators": [], "recommendations": []}"#
        );
        assert_eq!(authentic.verdict(), Verdict::Authentic);
        assert!(approx_eq(authentic.confidence(), 0.90));

        let uncertain = ResponseParser::parse(
            r#"{"verdict": "UNCERTAIN", "confidence": 45, "reasoning": "Cannot determine", "indicators": [], "recommendations": ["need more data"]}"#
        );
        assert_eq!(uncertain.verdict(), Verdict::Uncertain);
        assert!(approx_eq(uncertain.confidence(), 0.45));
        assert_eq!(uncertain.recommendations(), ["need more data"]);
    }

    #[test]
    fn test_parse_invalid_json_fallback() {
        setup();
        let response = "This is not valid JSON at all";

        let result = ResponseParser::parse(response);

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.reasoning(), response);
        assert!(result.indicators().is_empty());
        assert_eq!(result.recommendations(), [PARSE_FAILURE_RECOMMENDATION]);
    }

    #[test]
    fn test_parse_malformed_object_fallback_keeps_full_text() {
        setup();
        let response = "Verdict follows {verdict: AI_GENERATED, confidence: high} end";

        let result = ResponseParser::parse(response);

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.reasoning(), response);
        assert_eq!(result.recommendations(), [PARSE_FAILURE_RECOMMENDATION]);
    }

    #[test]
    fn test_parse_reversed_braces_fallback() {
        setup();
        let response = "} closing before opening {";
        let result = ResponseParser::parse(response);

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.reasoning(), response);
    }

    #[test]
    fn test_parse_json_with_extra_text() {
        setup();
        let body = r#"{
            "verdict": "AI_GENERATED",
            "confidence": 75,
            "reasoning": "Found issues",
            "indicators": ["issue1"],
            "recommendations": []
        }"#;
        let wrapped = format!("Here is my analysis:\n        {}\n        That's my conclusion.", body);

        let bare = ResponseParser::parse(body);
        let embedded = ResponseParser::parse(&wrapped);

        assert_eq!(embedded.verdict(), Verdict::AiGenerated);
        assert!(approx_eq(embedded.confidence(), 0.75));
        assert_eq!(bare, embedded);
    }

    #[test]
    fn test_parse_missing_fields_use_defaults() {
        setup();
        let result = ResponseParser::parse("{}");

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert!(approx_eq(result.confidence(), 0.5));
        assert_eq!(result.reasoning(), "No reasoning provided");
        assert!(result.indicators().is_empty());
        assert!(result.recommendations().is_empty());
    }

    #[test]
    fn test_parse_unknown_or_lowercase_verdict_is_uncertain() {
        setup();
        for label in ["\"FAKE\"", "\"ai_generated\"", "\"Authentic\"", "null", "42"] {
            let response = format!(r#"{{"verdict": {}, "confidence": 80}}"#, label);
            let result = ResponseParser::parse(&response);
            info!("{} -> {:?}", label, result.verdict());
            assert_eq!(result.verdict(), Verdict::Uncertain, "label {}", label);
            assert!(approx_eq(result.confidence(), 0.8));
        }
    }

    #[test]
    fn test_parse_non_numeric_confidence_defaults_to_half() {
        setup();
        let result = ResponseParser::parse(r#"{"verdict": "AUTHENTIC", "confidence": "very high"}"#);
        assert_eq!(result.verdict(), Verdict::Authentic);
        assert!(approx_eq(result.confidence(), 0.5));

        let numeric_string = ResponseParser::parse(r#"{"verdict": "AUTHENTIC", "confidence": "64"}"#);
        assert!(approx_eq(numeric_string.confidence(), 0.64));
    }

    #[test]
    fn test_parse_out_of_range_confidence_is_clamped() {
        setup();
        let high = ResponseParser::parse(r#"{"verdict": "AI_GENERATED", "confidence": 150}"#);
        let low = ResponseParser::parse(r#"{"verdict": "AI_GENERATED", "confidence": -5}"#);

        assert_eq!(high.confidence(), 1.0);
        assert_eq!(low.confidence(), 0.0);
    }

    #[test]
    fn test_parse_fractional_confidence() {
        setup();
        let result = ResponseParser::parse(r#"{"verdict": "AI_GENERATED", "confidence": 62.5}"#);
        assert!(approx_eq(result.confidence(), 0.625));
    }

    #[test]
    fn test_verdict_round_trip_through_parser_mapping() {
        setup();
        for verdict in Verdict::ALL {
            let label = verdict.as_str().to_uppercase();
            assert_eq!(label, verdict.model_label());
            assert_eq!(Verdict::from_model_label(&label), verdict);

            let response = format!(r#"{{"verdict": "{}", "confidence": 70}}"#, label);
            assert_eq!(ResponseParser::parse(&response).verdict(), verdict);
        }
    }

    #[test]
    fn test_verdict_values() {
        assert_eq!(Verdict::AiGenerated.as_str(), "ai_generated");
        assert_eq!(Verdict::Authentic.as_str(), "authentic");
        assert_eq!(Verdict::Uncertain.as_str(), "uncertain");
        assert_eq!(Verdict::ALL.len(), 3);
        assert_eq!(serde_json::to_string(&Verdict::AiGenerated).unwrap(), "\"ai_generated\"");
    }
}
