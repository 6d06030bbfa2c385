//! Fixed prompt text for the per-bridge evaluations and the final synthesis.

use crate::analysis::EvaluationResult;
use crate::bridges::BridgeCriterion;
use crate::model::ChatRequest;

const AUDITOR_SYSTEM: &str = "Eres un auditor UX industrial muy exigente. \
Evalúas interfaces HMI comparándolas con estándares profesionales. \
Utiliza una escala estricta y sé crítico.";

const SYNTHESIS_SYSTEM: &str = "Eres un experto en UX industrial que sintetiza evaluaciones \
para público no experto de forma clara, crítica y directa.";

const SYNTHESIS_STRUCTURE: &str = "Genera un resumen FINAL con esta estructura:\n\n\
**OBSERVACIONES CLAVE:**\n\
- Máximo 3 bullets\n\n\
**IMPACTO OPERATIVO:**\n\
- Máximo 3 bullets\n\n\
**OPORTUNIDADES DE MEJORA:**\n\
- Máximo 3 bullets\n\n\
Lenguaje claro, directo y no técnico.";

pub fn bridge_request(bridge: &BridgeCriterion, image_data_url: &str) -> ChatRequest {
    let text = format!(
        "Evalúa la interfaz HMI según {title}.\n\n\
         {description}\n\n\
         Formato obligatorio:\n\
         PUNTUACIÓN: X/10\n\
         RESUMEN: una única frase clara basada en elementos visibles concretos de la imagen. \
         Evita frases genéricas que podrían aplicarse a cualquier HMI. \
         Si no puedes identificar elementos claros en la imagen relacionados con este puente, \
         baja la puntuación.",
        title = bridge.title(),
        description = bridge.description,
    );

    ChatRequest {
        system: AUDITOR_SYSTEM.to_string(),
        user_text: text,
        image_data_url: Some(image_data_url.to_string()),
    }
}

/// One `TITLE: summary` line per bridge, in evaluation order.
pub fn synthesis_request(results: &[EvaluationResult]) -> ChatRequest {
    let lines: Vec<String> = results
        .iter()
        .map(|result| format!("{}: {}", result.title, result.summary))
        .collect();

    ChatRequest {
        system: SYNTHESIS_SYSTEM.to_string(),
        user_text: format!(
            "A partir de los siguientes resultados por puente:\n\n{}\n\n{}",
            lines.join("\n"),
            SYNTHESIS_STRUCTURE
        ),
        image_data_url: None,
    }
}
