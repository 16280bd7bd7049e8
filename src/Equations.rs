/// eng
/// Conversion between the two textual forms a chemical equation lives in:
/// compact markup (`H_{2}O`, `Fe^{3+}`) used by reference answers and inline
/// markup (`H<sub>2</sub>O`) produced by the rich-text editor. Also expands
/// shorthand (`H_2O` -> `H_{2}O`) and brings every arrow spelling to the one
/// the parser splits on.
///
/// # Examples
/// ```
/// use ChemInput::Equations::notation::{to_inline_markup, to_compact_markup};
/// let html = to_inline_markup("2H_{2}O");
/// assert_eq!(html, "2H<sub>2</sub>O");
/// assert_eq!(to_compact_markup(&html), "2H_{2}O");
/// ```
pub mod notation;
/// eng
/// The module takes an equation string in compact form and produces a `ParsedEquation`:
/// 1) a vector of reactants and a vector of products in the order they were written
/// 2) a map of states of matter, e.g. "NaCl" -> "(aq)"
/// 3) a map of coefficients, e.g. "H_{2}" -> "2"
/// Terms are not parsed any further: "CO_{2}" is one opaque species.
///
/// # Examples
/// ```
/// use ChemInput::Equations::equation_parser::parse_equation;
/// let parsed = parse_equation("2H_{2}+O_{2}->2H_{2}O", "->");
/// assert_eq!(parsed.reactants, vec!["H_{2}".to_string(), "O_{2}".to_string()]);
/// assert_eq!(parsed.coefficients.get("H_{2}"), Some(&"2".to_string()));
/// ```
pub mod equation_parser;
/// Structural comparison of a student's parsed equation against the reference one
/// and the feedback sentence built from the aspects that did not match.
pub mod comparator;
/// eng
/// Brings submissions (rich markup) and reference answers (compact markup) to the
/// same plain form before parsing, and renders reference answers back to markup
/// for display.
pub mod normalizer;
/// Host-facing functions: normalize, parse, grade.
///
/// # Examples
/// ```
/// use ChemInput::Equations::grading::{grade_equation, normalize_for_parsing};
/// let student = normalize_for_parsing("<p>O<sub>2</sub> + 2H<sub>2</sub> -&gt; 2H<sub>2</sub>O</p>", false);
/// let reference = normalize_for_parsing("2H_2 + O_2 /rarrow 2H_2O", true);
/// let grade = grade_equation(&student, &reference, false, true);
/// assert_eq!(grade.score, 1);
/// ```
pub mod grading;
