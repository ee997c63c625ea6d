use std::collections::BTreeMap;

/// Caller-constructed mapping from generic font tokens to concrete font
/// family strings.
///
/// The catalog is configuration, not slide data: it is built once before
/// rendering begins and never mutated afterwards, so concurrent slide
/// renders can share it freely.
#[derive(Clone, Debug)]
pub struct FontCatalog {
    sans: String,
    serif: String,
    mono: String,
    extra: BTreeMap<String, String>,
}

impl FontCatalog {
    /// Build a catalog from the three generic families.
    pub fn new(
        sans: impl Into<String>,
        serif: impl Into<String>,
        mono: impl Into<String>,
    ) -> Self {
        Self {
            sans: sans.into(),
            serif: serif.into(),
            mono: mono.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Register an additional alias, e.g. `"display" -> "Playfair Display"`.
    pub fn register(mut self, alias: impl Into<String>, family: impl Into<String>) -> Self {
        self.extra.insert(alias.into(), family.into());
        self
    }

    /// Resolve a font token to a family string.
    ///
    /// Unresolved tokens fall back to the `sans` entry.
    pub fn lookup(&self, token: &str) -> &str {
        match token {
            "sans" => self.sans.as_str(),
            "serif" => self.serif.as_str(),
            "mono" => self.mono.as_str(),
            other => self
                .extra
                .get(other)
                .map_or(self.sans.as_str(), String::as_str),
        }
    }
}

impl Default for FontCatalog {
    /// CSS family stacks usable by SVG and HTML canvas encoders alike.
    fn default() -> Self {
        Self::new(
            "Helvetica, Arial, sans-serif",
            "Georgia, Times, serif",
            "Monaco, Consolas, monospace",
        )
    }
}
