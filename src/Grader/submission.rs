//! Reading what the editor sent: base64 payload -> HTML with balanced tags and
//! text nodes stripped of surrounding whitespace.

use crate::Grader::grader_error::GraderError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use log::debug;
use scraper::{Html, Node};

pub fn decode_submission(encoded: &str, question: &str) -> Result<String, GraderError> {
    let invalid = |details: String| GraderError::InvalidEncoding {
        question: question.to_string(),
        details,
    };
    let bytes = BASE64_ENGINE
        .decode(encoded.trim())
        .map_err(|e| invalid(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))
}

pub fn encode_submission(markup: &str) -> String {
    BASE64_ENGINE.encode(markup.trim().as_bytes())
}

/// Wraps bare text into a paragraph, parses it as an HTML fragment and trims
/// every text node. Any parse error of the fragment is a malformed submission.
pub fn clean_submission(markup: &str, question: &str) -> Result<String, GraderError> {
    let markup = markup.trim();
    let markup = if markup.starts_with('<') {
        markup.to_string()
    } else {
        format!("<p>{}</p>", markup)
    };

    let mut fragment = Html::parse_fragment(&markup);
    if !fragment.errors.is_empty() {
        return Err(GraderError::MalformedMarkup {
            question: question.to_string(),
            details: fragment.errors.join("; "),
        });
    }

    let text_nodes: Vec<_> = fragment
        .tree
        .nodes()
        .filter(|node| node.value().is_text())
        .map(|node| node.id())
        .collect();
    for id in text_nodes {
        if let Some(mut node) = fragment.tree.get_mut(id) {
            if let Node::Text(text) = node.value() {
                let trimmed = text.text.trim().to_string();
                text.text = trimmed.into();
            }
        }
    }
    // the fragment root is a synthetic <html> element around the parsed nodes
    let cleaned = fragment.root_element().inner_html();
    debug!("cleaned submission for {}: {}", question, cleaned);
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_submission() {
        let encoded = encode_submission("<p>H<sub>2</sub>O</p>");
        assert_eq!(
            decode_submission(&encoded, "q").unwrap(),
            "<p>H<sub>2</sub>O</p>"
        );
        assert!(matches!(
            decode_submission("not base64!", "q"),
            Err(GraderError::InvalidEncoding { .. })
        ));
        // valid base64 of invalid UTF-8
        assert!(matches!(
            decode_submission("/w==", "q"),
            Err(GraderError::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_clean_wraps_bare_text() {
        assert_eq!(
            clean_submission("  2Na + Cl_2 -&gt; 2NaCl ", "q").unwrap(),
            "<p>2Na + Cl_2 -&gt; 2NaCl</p>"
        );
        // a bare arrow comes back entity-encoded
        assert_eq!(clean_submission("A -> B", "q").unwrap(), "<p>A -&gt; B</p>");
    }

    #[test]
    fn test_clean_trims_text_nodes() {
        assert_eq!(
            clean_submission("<p> 2H<sub> 2 </sub> + O<sub>2</sub> <br> </p>", "q").unwrap(),
            "<p>2H<sub>2</sub>+ O<sub>2</sub><br></p>"
        );
        assert_eq!(
            clean_submission("<p>A<br/>B</p>", "q").unwrap(),
            "<p>A<br>B</p>"
        );
        assert_eq!(
            clean_submission("<p>A &lt; B</p>", "q").unwrap(),
            "<p>A &lt; B</p>"
        );
    }

    #[test]
    fn test_clean_accepts_implied_end_tags() {
        assert_eq!(
            clean_submission("<p>A<p>B</p>", "q").unwrap(),
            "<p>A</p><p>B</p>"
        );
        assert_eq!(
            clean_submission("<p>H<sub>2</sub>O", "q").unwrap(),
            "<p>H<sub>2</sub>O</p>"
        );
    }

    #[test]
    fn test_clean_rejects_unbalanced_tags() {
        let err = clean_submission("<p>H<sub>2</p>", "q1").unwrap_err();
        assert!(matches!(
            &err,
            GraderError::MalformedMarkup { question, details }
                if question == "q1" && !details.is_empty()
        ));
        assert!(matches!(
            clean_submission("<p>H</sub></p>", "q"),
            Err(GraderError::MalformedMarkup { .. })
        ));
        assert!(matches!(
            clean_submission("<p>H<sub 2</p>", "q"),
            Err(GraderError::MalformedMarkup { .. })
        ));
        assert!(matches!(
            clean_submission("<p>H<sub>2", "q"),
            Err(GraderError::MalformedMarkup { .. })
        ));
    }

    #[test]
    fn test_clean_lowercases_tag_names() {
        assert_eq!(
            clean_submission("<P>NaCl<SUB>2</sub></p>", "q").unwrap(),
            "<p>NaCl<sub>2</sub></p>"
        );
    }
}
