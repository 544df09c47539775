use std::fmt;
use serde::{ Deserialize, Serialize };

/// Classification verdict for a frame or a whole video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    AiGenerated,
    Authentic,
    Uncertain,
}

impl Verdict {
    /// All variants in declaration order. Aggregation tie-breaks follow this order.
    pub const ALL: [Verdict; 3] = [Verdict::AiGenerated, Verdict::Authentic, Verdict::Uncertain];

    /// Lowercase value used in reports and JSON exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::AiGenerated => "ai_generated",
            Verdict::Authentic => "authentic",
            Verdict::Uncertain => "uncertain",
        }
    }

    /// Label the model is asked to answer with
    pub fn model_label(&self) -> &'static str {
        match self {
            Verdict::AiGenerated => "AI_GENERATED",
            Verdict::Authentic => "AUTHENTIC",
            Verdict::Uncertain => "UNCERTAIN",
        }
    }

    /// Map a model label to a verdict. Matching is exact and case-sensitive;
    /// anything unrecognized is `Uncertain`.
    pub fn from_model_label(label: &str) -> Verdict {
        match label {
            "AI_GENERATED" => Verdict::AiGenerated,
            "AUTHENTIC" => Verdict::Authentic,
            _ => Verdict::Uncertain,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
