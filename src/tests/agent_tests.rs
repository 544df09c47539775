#[cfg(test)]
mod tests {
    use std::path::{ Path, PathBuf };
    use std::sync::{ Arc, Mutex };
    use async_trait::async_trait;
    use log::info;

    use crate::errors::{ DetectorError, DetectorResult };
    use crate::implementations::agent::FraudDetectionAgent;
    use crate::models::image::EncodedImage;
    use crate::models::verdict::Verdict;
    use crate::traits::fraud_detector::FraudDetector;
    use crate::traits::vision_provider::VisionProvider;

    fn setup() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Provider that returns a canned reply and records the contexts it was asked about.
    /// Calls listed in `fail_calls` (1-based) fail with a connection error instead.
    struct MockProvider {
        reply: Result<String, String>,
        fail_calls: Vec<usize>,
        contexts: Mutex<Vec<String>>,
    }

    impl MockProvider {
        fn replying(reply: &str) -> Arc<Self> {
            Self::failing_on(reply, &[])
        }

        fn failing(message: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(message.to_string()),
                fail_calls: vec![],
                contexts: Mutex::new(vec![]),
            })
        }

        fn failing_on(reply: &str, calls: &[usize]) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
                fail_calls: calls.to_vec(),
                contexts: Mutex::new(vec![]),
            })
        }
    }

    #[async_trait]
    impl VisionProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn model(&self) -> &str {
            "mock-vision"
        }

        async fn analyze_image(&self, image: &EncodedImage, context: &str) -> DetectorResult<String> {
            assert!(!image.data_base64.is_empty());
            let call = {
                let mut contexts = self.contexts.lock().unwrap();
                contexts.push(context.to_string());
                contexts.len()
            };
            if self.fail_calls.contains(&call) {
                return Err(DetectorError::Provider {
                    provider: "mock".to_string(),
                    message: format!("call {} refused", call),
                });
            }
            self.reply.clone().map_err(|message| DetectorError::Provider {
                provider: "mock".to_string(),
                message,
            })
        }
    }

    fn write_frame(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, [0xff, 0xd8, 0xff, 0xe0]).unwrap();
        path
    }

    fn write_frames(dir: &Path, count: usize) -> Vec<PathBuf> {
        (0..count).map(|i| write_frame(dir, &format!("frame_{:03}.jpg", i))).collect()
    }

    const AI_REPLY: &str =
        r#"{"verdict": "AI_GENERATED", "confidence": 80, "reasoning": "Smooth skin", "indicators": ["texture"]}"#;

    #[test]
    fn test_agent_reports_provider_identity() {
        let agent = FraudDetectionAgent::new(MockProvider::replying("{}"));
        assert_eq!(agent.provider_name(), "mock");
        assert_eq!(agent.model_name(), "mock-vision");
    }

    #[tokio::test]
    async fn test_analyze_frame_parses_provider_reply() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let frame = write_frame(dir.path(), "suspect.jpg");

        let provider = MockProvider::replying(
            "Here is my analysis: {\"verdict\": \"AI_GENERATED\", \"confidence\": 88, \
             \"reasoning\": \"Warped ears\", \"indicators\": [\"ear geometry\"], \
             \"recommendations\": []} Done."
        );
        let agent = FraudDetectionAgent::new(provider.clone());

        let result = agent.analyze_frame(&frame).await.unwrap();
        info!("Parsed result: {:?}", result);

        assert_eq!(result.verdict(), Verdict::AiGenerated);
        assert!((result.confidence() - 0.88).abs() < 1e-9);
        assert_eq!(result.indicators(), ["ear geometry"]);

        let contexts = provider.contexts.lock().unwrap();
        assert_eq!(contexts.len(), 1);
        assert!(contexts[0].contains("suspect.jpg"));
    }

    #[tokio::test]
    async fn test_analyze_frame_unparseable_reply_is_uncertain() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let frame = write_frame(dir.path(), "frame.png");

        let agent = FraudDetectionAgent::new(MockProvider::replying("I cannot tell."));
        let result = agent.analyze_frame(&frame).await.unwrap();

        assert_eq!(result.verdict(), Verdict::Uncertain);
        assert_eq!(result.confidence(), 0.0);
        assert_eq!(result.reasoning(), "I cannot tell.");
    }

    #[tokio::test]
    async fn test_analyze_frame_file_not_found() {
        setup();
        let agent = FraudDetectionAgent::new(MockProvider::replying("{}"));

        let err = agent.analyze_frame(Path::new("/nonexistent/path/image.jpg")).await.unwrap_err();

        assert!(matches!(err, DetectorError::FileNotFound(_)));
        assert!(err.is_input_error());
    }

    #[tokio::test]
    async fn test_analyze_frame_propagates_provider_error() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let frame = write_frame(dir.path(), "frame.jpg");

        let agent = FraudDetectionAgent::new(MockProvider::failing("connection refused"));
        let err = agent.analyze_frame(&frame).await.unwrap_err();

        match err {
            DetectorError::Provider { provider, message } => {
                assert_eq!(provider, "mock");
                assert_eq!(message, "connection refused");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_video_file_not_found() {
        setup();
        let agent = FraudDetectionAgent::new(MockProvider::replying("{}"));

        let err = agent
            .analyze_video(Path::new("/nonexistent/path/video.mp4"), 5, None).await
            .unwrap_err();

        assert!(matches!(err, DetectorError::FileNotFound(_)));
    }

    #[tokio::test]
    async fn test_analyze_video_rejects_zero_frames() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let video = write_frame(dir.path(), "clip.mp4");

        let agent = FraudDetectionAgent::new(MockProvider::replying("{}"));
        let err = agent.analyze_video(&video, 0, None).await.unwrap_err();

        assert!(matches!(err, DetectorError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_analyze_frames_skips_failed_frames() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let frames = write_frames(dir.path(), 4);

        let provider = MockProvider::failing_on(AI_REPLY, &[2, 4]);
        let agent = FraudDetectionAgent::new(provider.clone());

        let analysis = agent.analyze_frames(&frames, "clip.mp4", None).await.unwrap();

        assert_eq!(analysis.frame_results.len(), 2);
        assert_eq!(analysis.overall.verdict(), Verdict::AiGenerated);
        assert!((analysis.overall.confidence() - 0.8).abs() < 1e-9);
        assert!(analysis.overall.reasoning().starts_with("Analyzed 2 frames."));
        assert_eq!(analysis.overall.indicators(), ["texture"]);

        let contexts = provider.contexts.lock().unwrap();
        assert_eq!(contexts.len(), 4);
        assert_eq!(contexts[0], "frame 1 of 4 from clip.mp4");
        assert_eq!(contexts[3], "frame 4 of 4 from clip.mp4");
    }

    #[tokio::test]
    async fn test_analyze_frames_all_failed_returns_last_error() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let frames = write_frames(dir.path(), 3);

        let agent = FraudDetectionAgent::new(MockProvider::failing_on(AI_REPLY, &[1, 2, 3]));
        let err = agent.analyze_frames(&frames, "clip.mp4", None).await.unwrap_err();

        match err {
            DetectorError::Provider { message, .. } => assert_eq!(message, "call 3 refused"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_analyze_frames_reports_progress_for_every_frame() {
        setup();
        let dir = tempfile::tempdir().unwrap();
        let frames = write_frames(dir.path(), 3);

        let agent = FraudDetectionAgent::new(MockProvider::failing_on(AI_REPLY, &[2]));
        let calls = Mutex::new(Vec::new());
        let record = |done: usize, total: usize| calls.lock().unwrap().push((done, total));
        let callback: &(dyn Fn(usize, usize) + Send + Sync) = &record;

        agent.analyze_frames(&frames, "clip.mp4", Some(callback)).await.unwrap();

        assert_eq!(*calls.lock().unwrap(), vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[tokio::test]
    async fn test_analyze_frames_empty_list_is_uncertain() {
        setup();
        let agent = FraudDetectionAgent::new(MockProvider::replying(AI_REPLY));

        let analysis = agent.analyze_frames(&[], "clip.mp4", None).await.unwrap();

        assert!(analysis.frame_results.is_empty());
        assert_eq!(analysis.overall.verdict(), Verdict::Uncertain);
        assert_eq!(analysis.overall.reasoning(), "No frames analyzed");
    }
}
