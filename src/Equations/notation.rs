use regex::Regex;
use std::sync::LazyLock;

/// arrow as it reaches us from the editor: the editor entity-encodes `>`
pub const CANONICAL_ARROW: &str = "-&gt;";
/// arrow placeholder used when reference answers are authored
pub const ARROW_PLACEHOLDER: &str = "/rarrow";
/// other spellings of the reaction arrow that are accepted and rewritten to CANONICAL_ARROW
const ARROW_ALIASES: [&str; 3] = [ARROW_PLACEHOLDER, "->", "→"];

static COMPACT_SUB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_\{([^{}]*)\}").unwrap());
static COMPACT_SUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^\{([^{}]*)\}").unwrap());
static SHORTHAND_SUB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_(\w)").unwrap());
static SHORTHAND_SUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^(\w)").unwrap());
static HTML_PARAGRAPH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>(.*?)</p>").unwrap());
static HTML_SUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<sup[^>]*>(.*?)</sup>").unwrap());
static HTML_SUB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<sub[^>]*>(.*?)</sub>").unwrap());
static HTML_ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\n+").unwrap());
static LAZY_SUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^\{(.*?)\}").unwrap());
static LAZY_SUB: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_\{(.*?)\}").unwrap());

/// `_{x}` -> `<sub>x</sub>` and `^{x}` -> `<sup>x</sup>`.
/// Groups containing braces are left untouched.
pub fn to_inline_markup(text: &str) -> String {
    let text = COMPACT_SUB.replace_all(text, "<sub>${1}</sub>");
    COMPACT_SUP
        .replace_all(&text, "<sup>${1}</sup>")
        .into_owned()
}

/// Editor HTML back to compact markup. Every paragraph is followed by a blank line,
/// sub/superscripts become `_{x}`/`^{x}` and any other tag is dropped.
pub fn to_compact_markup(html: &str) -> String {
    let text = HTML_PARAGRAPH.replace_all(html, "${1}\n\n");
    let text = HTML_SUP.replace_all(&text, "^{${1}}");
    let text = HTML_SUB.replace_all(&text, "_{${1}}");
    HTML_ANY_TAG.replace_all(&text, "").into_owned()
}

/// Compact markup to paragraph HTML, used for showing an answer in a read-only editor.
pub fn latex_to_html(text: &str) -> String {
    let html = BLANK_LINES.replace_all(text, "</p><p>");
    let html = format!("<p>{}</p>", html);
    let html = LAZY_SUP.replace_all(&html, "<sup>${1}</sup>");
    let html = LAZY_SUB.replace_all(&html, "<sub>${1}</sub>");
    html.replace("<p></p>", "")
}

/// `_2` -> `_{2}`, `^+` is left as is since only word characters are expanded.
pub fn normalize_shorthand(text: &str) -> String {
    let text = SHORTHAND_SUB.replace_all(text, "_{${1}}");
    SHORTHAND_SUP.replace_all(&text, "^{${1}}").into_owned()
}

pub fn normalize_arrow_token(text: &str) -> String {
    ARROW_ALIASES
        .iter()
        .fold(text.to_string(), |acc, alias| acc.replace(alias, CANONICAL_ARROW))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_inline_markup() {
        assert_eq!(to_inline_markup("H_{2}O"), "H<sub>2</sub>O");
        assert_eq!(to_inline_markup("Fe^{3+}"), "Fe<sup>3+</sup>");
        assert_eq!(
            to_inline_markup("SO_{4}^{2-}"),
            "SO<sub>4</sub><sup>2-</sup>"
        );
    }

    #[test]
    fn test_to_inline_markup_leaves_malformed_groups() {
        assert_eq!(to_inline_markup("H_{2O"), "H_{2O");
        assert_eq!(to_inline_markup("H_2O"), "H_2O");
        // first closing brace terminates, nested groups are not supported
        assert_eq!(to_inline_markup("X_{a{b}}"), "X_{a{b}}");
    }

    #[test]
    fn test_to_compact_markup() {
        assert_eq!(
            to_compact_markup("<p>2H<sub>2</sub>O</p>"),
            "2H_{2}O\n\n"
        );
        assert_eq!(
            to_compact_markup("Fe<sup class=\"ql\">3+</sup><br>"),
            "Fe^{3+}"
        );
        assert_eq!(to_compact_markup("<strong>Na</strong>Cl"), "NaCl");
    }

    #[test]
    fn test_latex_to_html() {
        assert_eq!(latex_to_html("H_{2}O"), "<p>H<sub>2</sub>O</p>");
        assert_eq!(
            latex_to_html("A\n\n\nB^{+}"),
            "<p>A</p><p>B<sup>+</sup></p>"
        );
        assert_eq!(latex_to_html(""), "");
    }

    #[test]
    fn test_round_trip_keeps_scripts() {
        let html = "CO<sub>2</sub> + Fe<sup>3+</sup>";
        assert_eq!(to_inline_markup(&to_compact_markup(html)), html);
    }

    #[test]
    fn test_normalize_shorthand() {
        assert_eq!(normalize_shorthand("H_2O"), "H_{2}O");
        assert_eq!(normalize_shorthand("Na^+"), "Na^+");
        assert_eq!(normalize_shorthand("Ca^2^+"), "Ca^{2}^+");
        assert_eq!(normalize_shorthand("H_{2}O"), "H_{2}O");
        let once = normalize_shorthand("C_6H_12O_6 + O_2");
        assert_eq!(once, "C_{6}H_{1}2O_{6} + O_{2}");
        assert_eq!(normalize_shorthand(&once), once);
    }

    #[test]
    fn test_normalize_arrow_token() {
        assert_eq!(normalize_arrow_token("A /rarrow B"), "A -&gt; B");
        assert_eq!(normalize_arrow_token("A -> B"), "A -&gt; B");
        assert_eq!(normalize_arrow_token("A → B"), "A -&gt; B");
        assert_eq!(normalize_arrow_token("A -&gt; B"), "A -&gt; B");
    }
}
