use serde::{Deserialize, Serialize};

/// A named look the model is asked to restyle a theme into.
///
/// `id` and `name` are written into the resulting document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDirective {
    pub id: String,
    pub name: String,
    /// Free-text style guide: palette, roles, mood.
    pub guide: String,
}

impl StyleDirective {
    pub fn custom(id: impl Into<String>, name: impl Into<String>, guide: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            guide: guide.into(),
        }
    }

    /// The 1999 terminal-green look.
    pub fn matrix() -> Self {
        Self::custom(
            "matrix_theme",
            "The Matrix",
            "- Backgrounds: Deep black (#000000), very dark grey-greens (#051005).\n\
             - Text: Terminal green (#00FF41), darker green (#008F11).\n\
             - Accents/Slots: Varying neon greens, pale greens, and occasionally a stark white or digital rain silver.\n\
             - Errors: Glitchy red or bright warning orange, but kept digital.\n\
             - Input Fields: Dark console style.",
        )
    }

    /// Look up a built-in style by its config name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "matrix" | "matrix_theme" => Some(Self::matrix()),
            _ => None,
        }
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &["matrix"]
    }

    pub fn system_instruction(&self) -> String {
        format!(
            "You are a world-class UI designer specializing in the \"{name}\" aesthetic.\n\
             Your task is to take a JSON object representing a ComfyUI theme and strictly \
             transform all color values to match a \"{name}\" theme.\n\n\
             Style Guide:\n{guide}\n\
             - ID: Change to \"{id}\".\n\
             - Name: Change to \"{name}\".\n\n\
             IMPORTANT:\n\
             - You MUST return valid JSON with the same structure as the input.\n\
             - You MUST preserve the exact keys of the input JSON.\n\
             - Do not add or remove keys, only change values.\n\
             - Only change color values; keep numbers and non-color strings as they are.",
            name = self.name,
            id = self.id,
            guide = self.guide,
        )
    }
}
