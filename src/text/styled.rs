use crate::style::StyleAttributes;

/// Raw text paired with the style snapshot taken when it was built.
///
/// Never mutated in place: a text or style change means building a new value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    text: String,
    style: StyleAttributes,
}

impl StyledText {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &StyleAttributes {
        &self.style
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters (Unicode scalar values), the unit glyphs map back to.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Combines raw text with a normalized copy of `style`. Absent text builds empty content.
pub fn build(text: Option<&str>, style: &StyleAttributes) -> StyledText {
    StyledText {
        text: text.unwrap_or_default().to_owned(),
        style: style.normalized(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/styled.rs"]
mod tests;
