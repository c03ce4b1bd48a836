// ESV API HTTP client.
// Handles authentication, passage requests and response status mapping.

use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT},
};

use crate::credential::ApiToken;
use crate::error::{Result, VerseError};

use super::passage::mark_brackets;
use super::types::PassageTextResponse;

pub const ESV_API_BASE: &str = "https://api.esv.org";
const PASSAGE_TEXT_ENDPOINT: &str = "/v3/passage/text/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Formatting options sent with every passage request.
///
/// The console layout depends on these, in particular the 70 column line length.
const PASSAGE_OPTIONS: [(&str, &str); 9] = [
    ("include-footnotes", "false"),
    ("indent-poetry-lines", "3"),
    ("include-footnotes-body", "false"),
    ("indent-poetry", "true"),
    ("include-passage-horizontal-lines", "false"),
    ("include-short-copyright", "true"),
    ("line-length", "70"),
    ("include-heading-horizontal-lines", "false"),
    ("include-headings", "false"),
];

/// ESV API client authenticated with a single token.
pub struct EsvClient {
    client: Client,
    base_url: String,
}

impl EsvClient {
    /// Create a client for `base_url`, normally [`ESV_API_BASE`].
    pub fn new(token: &ApiToken, base_url: &str) -> Result<Self> {
        let client = Self::client_builder(token)?
            .build()
            .map_err(VerseError::Api)?;
        Ok(Self::with_client(client, base_url))
    }

    /// HTTP client settings shared by every request: auth, accept and timeout.
    pub(crate) fn client_builder(token: &ApiToken) -> Result<ClientBuilder> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Token {}", token.expose()))
            .map_err(|_| VerseError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("fighter-verses"));

        Ok(Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT))
    }

    pub(crate) fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the text of `reference`, with brackets turned into highlight markers.
    pub async fn passage_text(&self, reference: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, PASSAGE_TEXT_ENDPOINT);
        log::debug!("Requesting {} from the ESV API", reference);

        let response = self
            .client
            .get(&url)
            .query(&[("q", reference)])
            .query(&PASSAGE_OPTIONS)
            .send()
            .await
            .map_err(VerseError::Api)?;

        let response = check_response(response).await?;
        let body: PassageTextResponse = response.json().await?;
        log::debug!("ESV API returned {} passage(s) for {}", body.passages.len(), body.canonical);

        body.passages
            .into_iter()
            .next()
            .map(|text| mark_brackets(&text))
            .ok_or_else(|| VerseError::MissingPassage(reference.to_string()))
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(VerseError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .map(|secs| format!("{}s", secs))
                .unwrap_or_else(|| "unknown".to_string());
            Err(VerseError::RateLimited { retry_after })
        }
        status => Err(VerseError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::esv::testing::{CannedResponse, local_client, serve_once};

    fn token() -> ApiToken {
        ApiToken::new("0123456789abcdef0123456789abcdef01234567").unwrap()
    }

    #[tokio::test]
    async fn test_passage_text_request_and_transform() {
        let (base_url, request) =
            serve_once(CannedResponse::json(r#"{"passages": ["Test [verse] text"]}"#)).await;
        let client = local_client(&token(), &base_url);

        let text = client.passage_text("John 3:16").await.unwrap();
        assert_eq!(text, "Test \u{2}verse\u{3} text");

        let request = request.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /v3/passage/text/?q=john+3%3a16"));
        assert!(request.contains("include-footnotes=false"));
        assert!(request.contains("line-length=70"));
        assert!(request.contains("include-headings=false"));
        assert!(request.contains("authorization: token 0123456789abcdef"));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = EsvClient::new(&token(), "https://api.esv.org/").unwrap();
        assert_eq!(client.base_url, ESV_API_BASE);
    }

    #[tokio::test]
    async fn test_empty_passages_is_missing_passage() {
        let (base_url, _request) = serve_once(CannedResponse::json(r#"{"passages": []}"#)).await;
        let client = local_client(&token(), &base_url);

        let err = client.passage_text("Nope 1:1").await.unwrap_err();
        assert!(matches!(err, VerseError::MissingPassage(ref r) if r == "Nope 1:1"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let (base_url, _request) = serve_once(CannedResponse::json("<html>oops</html>")).await;
        let client = local_client(&token(), &base_url);

        let err = client.passage_text("John 3:16").await.unwrap_err();
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let (base_url, _request) =
            serve_once(CannedResponse::status(401, "Unauthorized", "{}")).await;
        let client = local_client(&token(), &base_url);

        let err = client.passage_text("John 3:16").await.unwrap_err();
        assert!(matches!(err, VerseError::Unauthorized));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let (base_url, _request) = serve_once(
            CannedResponse::status(429, "Too Many Requests", "{}").header("Retry-After", "120"),
        )
        .await;
        let client = local_client(&token(), &base_url);

        let err = client.passage_text("John 3:16").await.unwrap_err();
        assert!(matches!(err, VerseError::RateLimited { ref retry_after } if retry_after == "120s"));
    }

    #[tokio::test]
    async fn test_server_error() {
        let (base_url, _request) =
            serve_once(CannedResponse::status(503, "Service Unavailable", "down")).await;
        let client = local_client(&token(), &base_url);

        let err = client.passage_text("John 3:16").await.unwrap_err();
        assert!(err.to_string().contains("503"));
        assert!(!err.is_fatal());
    }
}
