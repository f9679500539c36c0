/// The two raw field values a user enters, exactly as typed.
///
/// These are the only values remembered between runs. Everything else is
/// derived from them on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatInputs {
    pub weight: Option<String>,
    pub life_stage: Option<String>,
}

impl CatInputs {
    pub fn new(weight: Option<String>, life_stage: Option<String>) -> Self {
        Self { weight, life_stage }
    }

    /// Overlay `other` on top of `self`: non-blank fields in `other` win.
    pub fn merged_with(&self, other: &CatInputs) -> CatInputs {
        CatInputs {
            weight: pick(&other.weight, &self.weight),
            life_stage: pick(&other.life_stage, &self.life_stage),
        }
    }

    pub fn weight_str(&self) -> Option<&str> {
        self.weight.as_deref()
    }

    pub fn life_stage_str(&self) -> Option<&str> {
        self.life_stage.as_deref()
    }
}

fn pick(preferred: &Option<String>, fallback: &Option<String>) -> Option<String> {
    preferred
        .as_ref()
        .filter(|v| !v.trim().is_empty())
        .or(fallback.as_ref())
        .cloned()
}
