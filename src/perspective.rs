pub mod comments;

pub use comments::{Context, ContextEntry, Options};

pub const ANALYZE_URL: &str = "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";

/// Longest comment the API accepts, in UTF-16 code units.
pub const MAX_TEXT_LENGTH: usize = 3000;

pub type AttributeScores = std::collections::HashMap<String, f64>;

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("request: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("request: {0} ({1})")]
    ReqwestWithBody(reqwest::Error, String),

    #[error("serde: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("invalid score for {attribute}: {value:?}")]
    InvalidScore { attribute: String, value: String },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("comment text cannot be empty")]
    TextEmpty,

    #[error("comment text must be fewer than 3000 characters (got {length})")]
    TextTooLong { length: usize },

    #[error("{0}")]
    AttributeInvalid(String),

    #[error("request failed: {0}")]
    RequestFailed(#[from] RequestError),
}

/// Performs the single POST against the analyze endpoint.
#[async_trait::async_trait]
pub trait Transport {
    async fn analyze(&self, url: &str, req: &comments::AnalyzeRequest) -> Result<comments::AnalyzeResponse, RequestError>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn analyze(&self, url: &str, req: &comments::AnalyzeRequest) -> Result<comments::AnalyzeResponse, RequestError> {
        // The URL carries the API key, so it never goes into an error.
        let resp = self.client.post(url).json(req).send().await.map_err(|e| e.without_url())?;

        if let Err(e) = resp.error_for_status_ref() {
            log::warn!("perspective responded with {}", resp.status());
            let body = resp.text().await.map_err(|e| e.without_url())?;
            return Err(RequestError::ReqwestWithBody(e.without_url(), body));
        }

        let body = resp.bytes().await.map_err(|e| e.without_url())?;
        Ok(serde_json::from_slice(&body)?)
    }
}

pub fn validate_text(text: &str) -> Result<(), Error> {
    if text.is_empty() {
        return Err(Error::TextEmpty);
    }

    let length = text.encode_utf16().count();
    if length > MAX_TEXT_LENGTH {
        return Err(Error::TextTooLong { length });
    }

    Ok(())
}

/// Rejects an empty list, empty names, and the literal `"undefined"`.
pub fn validate_attributes(attributes: &[String]) -> Result<(), Error> {
    if attributes.is_empty() {
        return Err(Error::AttributeInvalid(
            "must submit at least one attribute to be scored".to_string(),
        ));
    }

    if let Some(attribute) = attributes.iter().find(|a| a.is_empty() || a.as_str() == "undefined") {
        return Err(Error::AttributeInvalid(format!(
            "invalid attribute in options: {:?}",
            attribute
        )));
    }

    Ok(())
}

/// Validates `text` and `options` and builds the request body. Nothing here
/// touches the network.
pub fn build_request(text: &str, options: &Options) -> Result<comments::AnalyzeRequest, Error> {
    validate_text(text)?;
    validate_attributes(&options.attributes)?;

    Ok(comments::AnalyzeRequest {
        comment: comments::Comment {
            text: if options.strip_html {
                crate::html::strip_tags(text)
            } else {
                text.to_string()
            },
        },
        context: options.context.clone(),
        do_not_store: options.do_not_store,
        languages: options.languages.clone(),
        requested_attributes: comments::build_requested_attributes(&options.attributes),
    })
}

fn flatten_scores(resp: comments::AnalyzeResponse) -> Result<AttributeScores, RequestError> {
    resp.attribute_scores
        .into_iter()
        .map(|(attribute, score)| {
            let value = match score.summary_score.value {
                comments::ScoreValue::Number(v) => v,
                comments::ScoreValue::Text(text) => match text.trim().parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => return Err(RequestError::InvalidScore { attribute, value: text }),
                },
            };
            Ok((attribute, value))
        })
        .collect()
}

pub struct Client {
    api_key: String,
    transport: Box<dyn Transport + Send + Sync>,
}

impl Client {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_transport(api_key, HttpTransport::new())
    }

    pub fn with_transport(api_key: impl Into<String>, transport: impl Transport + Send + Sync + 'static) -> Self {
        Self {
            api_key: api_key.into(),
            transport: Box::new(transport),
        }
    }

    /// Scores `text` with the default options.
    pub async fn get_scores(&self, text: &str) -> Result<AttributeScores, Error> {
        self.get_scores_with(text, &Options::default()).await
    }

    /// Scores `text`, returning one entry per attribute the API scored.
    ///
    /// Validation errors are returned before any request is made. Any
    /// failure after that is an [`Error::RequestFailed`].
    pub async fn get_scores_with(&self, text: &str, options: &Options) -> Result<AttributeScores, Error> {
        let req = build_request(text, options)?;
        log::debug!("perspective request: {:?}", req);

        let url = format!("{}?key={}", ANALYZE_URL, self.api_key);
        let resp = self.transport.analyze(&url, &req).await?;

        let scores = flatten_scores(resp)?;
        log::debug!("perspective returned {} scores", scores.len());
        Ok(scores)
    }
}
