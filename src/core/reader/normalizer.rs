//! Line-ending policy applied to raw document text.

/// Normalizes line endings before text becomes document payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNormalizer {
    /// Keep existing `\r\n` sequences as they are
    keep_cr: bool,

    /// Rewrite `\r\n` as `\n ` so character offsets are preserved
    cr_to_space: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            keep_cr: true,
            cr_to_space: false,
        }
    }
}

impl TextNormalizer {
    pub fn new(keep_cr: bool, cr_to_space: bool) -> Self {
        Self {
            keep_cr,
            cr_to_space,
        }
    }

    /// Apply the line-ending policy
    ///
    /// `cr_to_space` takes precedence over `keep_cr`. Non-empty text
    /// always ends with `\n`. Normalizing twice gives the same text.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = if raw.contains("\r\n") {
            if self.cr_to_space {
                tracing::debug!("Replacing carriage returns with spaces");
                raw.replace("\r\n", "\n ")
            } else if !self.keep_cr {
                tracing::debug!("Removing carriage returns");
                raw.replace("\r\n", "\n")
            } else {
                raw.to_string()
            }
        } else {
            raw.to_string()
        };

        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }
}
