use std::collections::HashMap;

pub const DEFAULT_ATTRIBUTES: &[&str] = &["SPAM", "TOXICITY"];
pub const DEFAULT_LANGUAGES: &[&str] = &["en"];

/// Per-call options. Every field falls back to its own default, so a config
/// that only sets `stripHtml` still requests the default attributes.
#[derive(serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Options {
    /// Attributes to score. Defaults to `SPAM` and `TOXICITY`.
    pub attributes: Vec<String>,

    pub context: Option<Context>,

    /// Ask the API not to retain the comment. Defaults to `true`.
    pub do_not_store: bool,

    /// Defaults to `["en"]`.
    pub languages: Vec<String>,

    /// Remove HTML tags from the text before sending it. Defaults to `true`.
    pub strip_html: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            attributes: DEFAULT_ATTRIBUTES.iter().map(|a| a.to_string()).collect(),
            context: None,
            do_not_store: true,
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            strip_html: true,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Context {
    #[serde(default)]
    pub entries: Vec<ContextEntry>,
}

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContextEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ContextEntry {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            kind: None,
        }
    }
}

#[derive(serde::Serialize, Clone, Debug)]
pub struct Comment {
    pub text: String,
}

/// Requested attributes carry no score type or threshold.
#[derive(serde::Serialize, Clone, Debug, Default)]
pub struct RequestedAttribute {}

#[derive(serde::Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub comment: Comment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    pub do_not_store: bool,

    pub languages: Vec<String>,

    pub requested_attributes: HashMap<String, RequestedAttribute>,
}

pub fn build_requested_attributes(attributes: &[String]) -> HashMap<String, RequestedAttribute> {
    attributes
        .iter()
        .map(|a| (a.clone(), RequestedAttribute::default()))
        .collect()
}

/// The API documents `value` as a string, but numbers are accepted too.
#[derive(serde::Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct SummaryScore {
    pub value: ScoreValue,
}

#[derive(serde::Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AttributeScore {
    pub summary_score: SummaryScore,
}

#[derive(serde::Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub attribute_scores: HashMap<String, AttributeScore>,
}
