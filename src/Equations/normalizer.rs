use crate::Equations::notation::{
    latex_to_html, normalize_arrow_token, normalize_shorthand, to_compact_markup,
    to_inline_markup,
};

/// Where a piece of text comes from decides how it is brought to parser form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceForm {
    /// authored by hand in compact markup, e.g. a reference answer `2H_2 + O_2 /rarrow 2H_2O`
    Compact,
    /// HTML produced by the rich-text editor
    Rich,
}

impl From<bool> for SourceForm {
    fn from(is_compact_source: bool) -> Self {
        if is_compact_source {
            SourceForm::Compact
        } else {
            SourceForm::Rich
        }
    }
}

/// Text in the form `parse_equation` expects: compact scripts with braces and
/// the canonical arrow.
pub fn normalize(text: &str, form: SourceForm) -> String {
    let compact = match form {
        SourceForm::Compact => text.to_string(),
        SourceForm::Rich => to_compact_markup(text),
    };
    normalize_arrow_token(&normalize_shorthand(&compact))
}

/// Reference answer rendered for a read-only editor.
pub fn reference_to_markup(raw_answer: &str) -> String {
    let inline = to_inline_markup(&normalize_arrow_token(raw_answer));
    latex_to_html(&normalize_shorthand(&inline))
}

/// Initial editor contents built from a prefill or the text written inside the element.
pub fn editor_contents(text: &str) -> String {
    to_inline_markup(&normalize_shorthand(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_compact_reference() {
        assert_eq!(
            normalize("2H_2 + O_2 /rarrow 2H_2O", SourceForm::Compact),
            "2H_{2} + O_{2} -&gt; 2H_{2}O"
        );
    }

    #[test]
    fn test_normalize_rich_submission() {
        assert_eq!(
            normalize(
                "<p>2H<sub>2</sub>+O<sub>2</sub>-&gt;2H<sub>2</sub>O</p>",
                SourceForm::Rich
            ),
            "2H_{2}+O_{2}-&gt;2H_{2}O\n\n"
        );
    }

    #[test]
    fn test_rich_and_compact_converge() {
        let rich = normalize("<p>Fe<sup>3+</sup> -&gt; Fe</p>", SourceForm::Rich);
        let compact = normalize("Fe^{3+} /rarrow Fe", SourceForm::Compact);
        assert_eq!(rich.trim_end(), compact);
    }

    #[test]
    fn test_reference_to_markup() {
        assert_eq!(
            reference_to_markup("2H_{2} + O_2 /rarrow 2H_{2}O"),
            "<p>2H<sub>2</sub> + O<sub>2</sub> -&gt; 2H<sub>2</sub>O</p>"
        );
    }

    #[test]
    fn test_editor_contents() {
        assert_eq!(editor_contents("CO_2 + H_{2}O"), "CO<sub>2</sub> + H<sub>2</sub>O");
        assert_eq!(editor_contents(""), "");
    }

    #[test]
    fn test_source_form_from_flag() {
        assert_eq!(SourceForm::from(true), SourceForm::Compact);
        assert_eq!(SourceForm::from(false), SourceForm::Rich);
    }
}
