//! The eight cognitive bridges an HMI screen is evaluated against.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeCriterion {
    pub number: u8,
    pub name: &'static str,
    pub description: &'static str,
}

/// Evaluation order. Display and the synthesis prompt both follow it.
pub const BRIDGES: [BridgeCriterion; 8] = [
    BridgeCriterion {
        number: 1,
        name: "Orientar",
        description: "Orientación del usuario y visibilidad del estado.",
    },
    BridgeCriterion {
        number: 2,
        name: "Enfocar",
        description: "Jerarquía visual y señal frente a ruido.",
    },
    BridgeCriterion {
        number: 3,
        name: "Advertir",
        description: "Claridad y prioridad de alertas.",
    },
    BridgeCriterion {
        number: 4,
        name: "Entender",
        description: "Relaciones causa–efecto y contexto.",
    },
    BridgeCriterion {
        number: 5,
        name: "Proyectar",
        description: "Tendencias y anticipación.",
    },
    BridgeCriterion {
        number: 6,
        name: "Guiar",
        description: "Secuencias guiadas y recuperación.",
    },
    BridgeCriterion {
        number: 7,
        name: "Acceder",
        description: "Ergonomía digital y accesibilidad.",
    },
    BridgeCriterion {
        number: 8,
        name: "Aprender",
        description: "Uso del histórico y aprendizaje.",
    },
];

impl BridgeCriterion {
    /// `PUENTE 01 – ORIENTAR`
    pub fn title(&self) -> String {
        format!("PUENTE {:02} – {}", self.number, self.name.to_uppercase())
    }

    /// `Puente 01`
    pub fn display_number(&self) -> String {
        format!("Puente {:02}", self.number)
    }

    pub fn icon_file(&self) -> String {
        format!("puente_{:02}_{}.svg", self.number, self.name.to_lowercase())
    }
}
