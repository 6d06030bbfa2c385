//! One analysis run: eight bridge evaluations, the average and the synthesis.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, info_span, Instrument};

use crate::bridges::{BridgeCriterion, BRIDGES};
use crate::error::AnalysisError;
use crate::image_payload::ImagePayload;
use crate::model::ChatModel;
use crate::prompts;
use crate::scoring::{self, Rating};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub title: String,
    pub score: u8,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRun {
    pub results: Vec<EvaluationResult>,
    pub average: f64,
    pub synthesis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CtaLink {
    pub label: &'static str,
    pub href: &'static str,
    pub style: &'static str,
}

/// Follow-up links offered once a run has completed.
pub const CTA_LINKS: [CtaLink; 2] = [
    CtaLink {
        label: "Solicitar análisis en profundidad",
        href: "https://bigd.es/contacto/",
        style: "dark",
    },
    CtaLink {
        label: "HMI Design Observatory",
        href: "https://hmidesign.es/",
        style: "blue",
    },
];

/// Everything the page needs to draw one bridge block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeReport {
    pub index: usize,
    pub title: String,
    pub number: String,
    pub name: &'static str,
    pub icon: String,
    pub score: u8,
    pub summary: String,
    pub rating: Rating,
    pub label: &'static str,
    pub color: &'static str,
}

impl BridgeReport {
    fn new(index: usize, bridge: &BridgeCriterion, result: &EvaluationResult) -> Self {
        let rating = Rating::from_score(result.score);
        Self {
            index,
            title: result.title.clone(),
            number: bridge.display_number(),
            name: bridge.name,
            icon: format!("/assets/icons/{}", bridge.icon_file()),
            score: result.score,
            summary: result.summary.clone(),
            rating,
            label: rating.label(),
            color: rating.color(),
        }
    }
}

/// Progress of a run, streamed to the page one line at a time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalysisEvent {
    Started { total: usize },
    Bridge(BridgeReport),
    Average { average: f64 },
    Synthesis { text: String },
    Completed { links: Vec<CtaLink> },
    Failed { message: String },
}

#[derive(Debug)]
pub struct Analyzer<M> {
    model: Arc<M>,
}

impl<M> Clone for Analyzer<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
        }
    }
}

impl<M: ChatModel> Analyzer<M> {
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Runs every bridge in declared order, then the synthesis.
    ///
    /// Calls are strictly sequential. The first model failure ends the run;
    /// events already sent stay sent and `Completed` is never emitted.
    pub async fn run(
        &self,
        image: &ImagePayload,
        events: &UnboundedSender<AnalysisEvent>,
    ) -> Result<AnalysisRun, AnalysisError> {
        let (width, height) = image.dimensions();
        let span = info_span!("analysis_run", width, height);

        async move {
            info!("starting analysis run");
            emit(events, AnalysisEvent::Started { total: BRIDGES.len() });

            let mut results = Vec::with_capacity(BRIDGES.len());
            for (index, bridge) in BRIDGES.iter().enumerate() {
                let result = self.evaluate(bridge, image).await?;
                emit(events, AnalysisEvent::Bridge(BridgeReport::new(index, bridge, &result)));
                results.push(result);
            }

            let scores: Vec<u8> = results.iter().map(|r| r.score).collect();
            let average = scoring::average_score(&scores);
            emit(events, AnalysisEvent::Average { average });

            let synthesis = self
                .model
                .complete(prompts::synthesis_request(&results))
                .await
                .map_err(AnalysisError::Synthesis)?;
            emit(
                events,
                AnalysisEvent::Synthesis {
                    text: synthesis.clone(),
                },
            );

            emit(
                events,
                AnalysisEvent::Completed {
                    links: CTA_LINKS.to_vec(),
                },
            );
            info!(average, "analysis run complete");

            Ok::<_, AnalysisError>(AnalysisRun {
                results,
                average,
                synthesis,
            })
        }
        .instrument(span)
        .await
    }

    async fn evaluate(
        &self,
        bridge: &BridgeCriterion,
        image: &ImagePayload,
    ) -> Result<EvaluationResult, AnalysisError> {
        let title = bridge.title();
        let reply = self
            .model
            .complete(prompts::bridge_request(bridge, image.data_url()))
            .await
            .map_err(|source| AnalysisError::Bridge {
                title: title.clone(),
                source,
            })?;

        let extraction = scoring::extract_evaluation(&reply);
        if extraction.summary.is_empty() {
            debug!(%title, "no summary line in model reply");
        }
        debug!(%title, score = extraction.score, "bridge evaluated");

        Ok(EvaluationResult {
            title,
            score: extraction.score,
            summary: extraction.summary,
        })
    }
}

/// A closed receiver means the page went away; the run carries on regardless.
fn emit(events: &UnboundedSender<AnalysisEvent>, event: AnalysisEvent) {
    let _ = events.send(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn bridge_event_serializes_flat_with_type_tag() {
        let result = EvaluationResult {
            title: BRIDGES[0].title(),
            score: 5,
            summary: "estado visible".to_string(),
        };
        let event = AnalysisEvent::Bridge(BridgeReport::new(0, &BRIDGES[0], &result));
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({
                "type": "bridge",
                "index": 0,
                "title": "PUENTE 01 – ORIENTAR",
                "number": "Puente 01",
                "name": "Orientar",
                "icon": "/assets/icons/puente_01_orientar.svg",
                "score": 5,
                "summary": "estado visible",
                "rating": "improvable",
                "label": "Mejorable",
                "color": "#f9a825"
            })
        );
    }

    #[test]
    fn completed_event_carries_both_links() {
        let event = AnalysisEvent::Completed {
            links: CTA_LINKS.to_vec(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "completed");
        assert_eq!(value["links"][0]["href"], "https://bigd.es/contacto/");
        assert_eq!(value["links"][1]["href"], "https://hmidesign.es/");
    }
}
