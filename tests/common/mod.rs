#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::Cursor;
use std::sync::Mutex;

use hmi_analyzer::error::ModelError;
use hmi_analyzer::model::{ChatModel, ChatRequest};
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

/// Replays canned replies in order and records every request it receives.
/// Runs out of script as `MissingContent`.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Result<String, ModelError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Eight well-formed bridge replies with the given scores, then a synthesis.
    pub fn with_scores(scores: [u8; 8], synthesis: &str) -> Self {
        let mut replies: Vec<Result<String, ModelError>> = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                Ok(format!(
                    "PUNTUACIÓN: {score}/10\nRESUMEN: hallazgo del puente {}",
                    i + 1
                ))
            })
            .collect();
        replies.push(Ok(synthesis.to_string()));
        Self::new(replies)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ChatModel for ScriptedModel {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ModelError::MissingContent))
    }
}

pub fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_pixel(8, 8, Rgb([66, 66, 66]));
    let mut out = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut out), ImageOutputFormat::Png)
        .unwrap();
    out
}

pub fn api_failure() -> ModelError {
    ModelError::Api {
        status: 401,
        body: "invalid api key".to_string(),
    }
}
