/// Error type shared by the element layer
pub mod grader_error;
/// Options of one chemical equation input with their defaults
///
///  # Examples
/// ```
/// use ChemInput::Grader::element_config::ElementConfig;
/// let config = ElementConfig::from_json_str(r#"{"question-name": "q1", "grade-states": true}"#).unwrap();
/// assert!(config.grade_states);
/// assert!(config.include_feedback);
/// ```
pub mod element_config;
/// Decoding and cleaning of what the rich-text editor submits
pub mod submission;
/// Registry of inputs on one page and grading of all of them
///
///  # Examples
/// ```
/// use ChemInput::Grader::chem_input_form::ChemInputForm;
/// use ChemInput::Grader::element_config::ElementConfig;
/// use ChemInput::Grader::submission::encode_submission;
/// let mut form = ChemInputForm::new();
/// form.register(ElementConfig::new("q1")).unwrap();
/// let encoded = encode_submission("<p>2Na + Cl<sub>2</sub> -&gt; 2NaCl</p>");
/// let score = form.grade_question("q1", Some(encoded.as_str()), "2Na + Cl_2 /rarrow 2NaCl").unwrap();
/// assert_eq!(score.score, 1);
/// ```
pub mod chem_input_form;
