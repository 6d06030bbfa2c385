mod common;

use std::sync::Arc;

use common::{api_failure, png_bytes, ScriptedModel};
use hmi_analyzer::analysis::{AnalysisEvent, Analyzer, CTA_LINKS};
use hmi_analyzer::bridges::BRIDGES;
use hmi_analyzer::error::AnalysisError;
use hmi_analyzer::image_payload::ImagePayload;
use indoc::indoc;
use pretty_assertions::assert_eq;
use tokio::sync::mpsc;

async fn run_with(
    model: &Arc<ScriptedModel>,
) -> (Result<hmi_analyzer::analysis::AnalysisRun, AnalysisError>, Vec<AnalysisEvent>) {
    let analyzer = Analyzer::new(Arc::clone(model));
    let image = ImagePayload::from_upload(&png_bytes()).unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let outcome = analyzer.run(&image, &tx).await;
    drop(tx);

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }
    (outcome, events)
}

fn event_types(events: &[AnalysisEvent]) -> Vec<&'static str> {
    events
        .iter()
        .map(|event| match event {
            AnalysisEvent::Started { .. } => "started",
            AnalysisEvent::Bridge(_) => "bridge",
            AnalysisEvent::Average { .. } => "average",
            AnalysisEvent::Synthesis { .. } => "synthesis",
            AnalysisEvent::Completed { .. } => "completed",
            AnalysisEvent::Failed { .. } => "failed",
        })
        .collect()
}

#[tokio::test]
async fn full_run_scores_every_bridge_in_order() {
    let model = Arc::new(ScriptedModel::with_scores(
        [8, 6, 7, 5, 9, 4, 6, 7],
        "**OBSERVACIONES CLAVE:**\n- Buena jerarquía",
    ));

    let (outcome, events) = run_with(&model).await;
    let run = outcome.unwrap();

    assert_eq!(run.results.len(), 8);
    let titles: Vec<String> = run.results.iter().map(|r| r.title.clone()).collect();
    let expected: Vec<String> = BRIDGES.iter().map(|b| b.title()).collect();
    assert_eq!(titles, expected);
    assert_eq!(run.average, 6.5);
    assert_eq!(run.synthesis, "**OBSERVACIONES CLAVE:**\n- Buena jerarquía");
    assert_eq!(run.results[3].summary, "hallazgo del puente 4");

    assert_eq!(
        event_types(&events),
        vec![
            "started", "bridge", "bridge", "bridge", "bridge", "bridge", "bridge", "bridge",
            "bridge", "average", "synthesis", "completed"
        ]
    );
    assert_eq!(events[0], AnalysisEvent::Started { total: 8 });
    assert_eq!(events[9], AnalysisEvent::Average { average: 6.5 });
    assert_eq!(
        events[11],
        AnalysisEvent::Completed {
            links: CTA_LINKS.to_vec()
        }
    );

    let indices: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            AnalysisEvent::Bridge(report) => Some(report.index),
            _ => None,
        })
        .collect();
    assert_eq!(indices, (0..8).collect::<Vec<_>>());
}

#[tokio::test]
async fn requests_follow_declared_bridge_order_then_synthesis() {
    let model = Arc::new(ScriptedModel::with_scores([5; 8], "síntesis"));
    let (outcome, _) = run_with(&model).await;
    outcome.unwrap();

    let requests = model.requests();
    assert_eq!(requests.len(), 9);

    for (request, bridge) in requests.iter().zip(BRIDGES.iter()) {
        assert!(request.user_text.contains(&bridge.title()));
        assert!(request.user_text.contains(bridge.description));
        assert!(request
            .image_data_url
            .as_deref()
            .is_some_and(|url| url.starts_with("data:image/jpeg;base64,")));
    }

    let synthesis = &requests[8];
    assert_eq!(synthesis.image_data_url, None);
    assert!(synthesis.user_text.contains(indoc! {"
        PUENTE 01 – ORIENTAR: hallazgo del puente 1
        PUENTE 02 – ENFOCAR: hallazgo del puente 2
        PUENTE 03 – ADVERTIR: hallazgo del puente 3
        PUENTE 04 – ENTENDER: hallazgo del puente 4
        PUENTE 05 – PROYECTAR: hallazgo del puente 5
        PUENTE 06 – GUIAR: hallazgo del puente 6
        PUENTE 07 – ACCEDER: hallazgo del puente 7
        PUENTE 08 – APRENDER: hallazgo del puente 8
    "}));
}

#[tokio::test]
async fn malformed_replies_degrade_to_zero() {
    let mut replies: Vec<_> = (0..8)
        .map(|_| Ok("No puedo evaluar esta imagen.".to_string()))
        .collect();
    replies.push(Ok("sin datos".to_string()));
    let model = Arc::new(ScriptedModel::new(replies));

    let (outcome, events) = run_with(&model).await;
    let run = outcome.unwrap();

    assert!(run.results.iter().all(|r| r.score == 0 && r.summary.is_empty()));
    assert_eq!(run.average, 0.0);
    assert!(matches!(events.last(), Some(AnalysisEvent::Completed { .. })));
}

#[tokio::test]
async fn bridge_failure_aborts_without_links() {
    let model = Arc::new(ScriptedModel::new(vec![
        Ok("PUNTUACIÓN: 6/10\nRESUMEN: uno".to_string()),
        Ok("PUNTUACIÓN: 7/10\nRESUMEN: dos".to_string()),
        Err(api_failure()),
        Ok("PUNTUACIÓN: 9/10\nRESUMEN: nunca llega".to_string()),
    ]));

    let (outcome, events) = run_with(&model).await;

    match outcome {
        Err(AnalysisError::Bridge { title, .. }) => assert_eq!(title, "PUENTE 03 – ADVERTIR"),
        other => panic!("expected bridge failure, got {other:?}"),
    }
    assert_eq!(event_types(&events), vec!["started", "bridge", "bridge"]);
    assert_eq!(model.requests().len(), 3, "no calls after the failure");
}

#[tokio::test]
async fn synthesis_failure_keeps_average_but_withholds_links() {
    let mut replies: Vec<_> = (0..8)
        .map(|_| Ok("PUNTUACIÓN: 8/10\nRESUMEN: correcto".to_string()))
        .collect();
    replies.push(Err(api_failure()));
    let model = Arc::new(ScriptedModel::new(replies));

    let (outcome, events) = run_with(&model).await;

    assert!(matches!(outcome, Err(AnalysisError::Synthesis(_))));
    assert_eq!(events.last(), Some(&AnalysisEvent::Average { average: 8.0 }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, AnalysisEvent::Completed { .. })));
}
