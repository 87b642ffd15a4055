//! Display text with legacy format codes.
//!
//! Configuration files write colours with `&` (e.g. `&a&lIMPORT`); the client
//! expects the section sign. [`translate_color_codes`] performs that pass.

use serde::{Deserialize, Serialize};

/// Prefix character the client understands for format codes.
pub const SECTION_SIGN: char = '§';

/// Alternate prefix used in configuration files.
pub const ALT_COLOR_CHAR: char = '&';

const FORMAT_CODES: &str = "0123456789AaBbCcDdEeFfKkLlMmNnOoRrXx";

/// Replace `alt` followed by a valid format code with the section sign.
///
/// Unknown codes (`&z`) and a trailing `alt` are left untouched.
pub fn translate_color_codes(alt: char, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == alt {
            if let Some(&next) = chars.peek() {
                if FORMAT_CODES.contains(next) {
                    out.push(SECTION_SIGN);
                    out.push(next.to_ascii_lowercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Remove section-sign format codes, leaving only the visible characters.
pub fn strip_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c == SECTION_SIGN {
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// A line of display text (item name or lore line).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text {
    /// Content with format codes already translated.
    pub content: String,
    /// Explicit italic decoration; `None` leaves the client default.
    pub italic: Option<bool>,
}

impl Text {
    /// Build text from a configuration string, translating `&` codes.
    pub fn legacy(raw: &str) -> Self {
        Self {
            content: translate_color_codes(ALT_COLOR_CHAR, raw),
            italic: None,
        }
    }

    /// Force the italic decoration off.
    pub fn non_italic(mut self) -> Self {
        self.italic = Some(false);
        self
    }

    /// Visible characters without format codes.
    pub fn plain(&self) -> String {
        strip_codes(&self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_codes() {
        assert_eq!(translate_color_codes('&', "&a&lIMPORT"), "§a§lIMPORT");
        assert_eq!(translate_color_codes('&', "&C&LBACK"), "§c§lBACK");
    }

    #[test]
    fn leaves_unknown_codes_and_trailing_alt() {
        assert_eq!(translate_color_codes('&', "Fish &z Chips &"), "Fish &z Chips &");
        assert_eq!(translate_color_codes('&', "R&D"), "R§d");
    }

    #[test]
    fn strip_codes_removes_formatting() {
        let text = Text::legacy("&7&lHELMET");
        assert_eq!(text.content, "§7§lHELMET");
        assert_eq!(text.plain(), "HELMET");
        assert_eq!(text.italic, None);
        assert_eq!(text.non_italic().italic, Some(false));
    }
}
