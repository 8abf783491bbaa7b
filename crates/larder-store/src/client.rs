// Hand-crafted async HTTP client for the larder document-store API (v1).
//
// Base path: /v1/
// Auth: X-API-KEY header

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::document::{Document, DocumentStore, Fields};
use crate::transport::TransportConfig;
use crate::Error;

// ── Wire envelopes ───────────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct QueryResponse {
    documents: Vec<Document>,
}

#[derive(Serialize)]
struct SetRequest<'a> {
    fields: &'a Fields,
}

/// Error response shape from the store API.
#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async HTTP client for the document-store API.
///
/// Uses API-key authentication and communicates via JSON REST endpoints
/// under `/v1/`.
#[derive(Debug)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: Url,
}

impl StoreClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API key and transport config.
    ///
    /// Injects `X-API-KEY` as a sensitive default header on every request.
    pub fn from_api_key(
        base_url: &str,
        api_key: &secrecy::SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut key_value =
            HeaderValue::from_str(api_key.expose_secret()).map_err(|e| Error::Authentication {
                message: format!("invalid API key header value: {e}"),
            })?;
        key_value.set_sensitive(true);
        headers.insert("X-API-KEY", key_value);

        let http = transport.build_client_with_headers(headers)?;
        let base_url = parse_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Build an unauthenticated client (stores with auth disabled).
    pub fn anonymous(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = parse_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `{base}/v1/{segments…}`, percent-encoding each segment.
    ///
    /// Document keys are user-supplied item names — they go through
    /// `path_segments_mut` so spaces and slashes can't break the path.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            // Cannot fail: cannot-be-a-base URLs are rejected at construction.
            let mut path = url
                .path_segments_mut()
                .expect("base URL was validated at construction");
            path.pop_if_empty();
            path.push("v1");
            for seg in segments {
                path.push(seg);
            }
        }
        url
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments);
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        self.handle_response(resp).await
    }

    async fn put<B: Serialize + Sync>(&self, segments: &[&str], body: &B) -> Result<(), Error> {
        let url = self.url(segments);
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        self.handle_empty(resp).await
    }

    async fn delete(&self, segments: &[&str]) -> Result<(), Error> {
        let url = self.url(segments);
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        // Deleting an absent document is a success (idempotent delete).
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        self.handle_empty(resp).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = body_preview(&body);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.error_from_response(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.error_from_response(status, resp).await)
        }
    }

    /// Parse the `{message, code}` error envelope, falling back to the
    /// raw body when the store returns something unstructured.
    async fn error_from_response(&self, status: StatusCode, resp: reqwest::Response) -> Error {
        let body = resp.text().await.unwrap_or_default();
        let parsed: Option<ErrorResponse> = serde_json::from_str(&body).ok();

        let (message, code) = match parsed {
            Some(er) => (
                er.message.unwrap_or_else(|| status.to_string()),
                er.code,
            ),
            None => {
                let preview = body_preview(&body);
                (if preview.is_empty() { status.to_string() } else { preview }, None)
            }
        };

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Error::Authentication { message };
        }

        Error::Api {
            message,
            code,
            status: status.as_u16(),
        }
    }
}

/// First 200 chars of a response body, for error context.
fn body_preview(body: &str) -> String {
    body.chars().take(200).collect()
}

/// Parse and validate a base URL. Schemes like `data:` or `mailto:` parse
/// fine but cannot carry path segments, so they are rejected here rather
/// than panicking at request time.
fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let url = Url::parse(base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidUrl(format!(
            "{base_url}: URL cannot carry a path"
        )));
    }
    Ok(url)
}

// ── DocumentStore implementation ─────────────────────────────────────

impl DocumentStore for StoreClient {
    async fn query_collection(&self, collection: &str) -> Result<Vec<Document>, Error> {
        let resp: QueryResponse = self
            .get(&["collections", collection, "documents"])
            .await?;
        Ok(resp.documents)
    }

    async fn get_document(&self, collection: &str, key: &str) -> Result<Option<Fields>, Error> {
        match self
            .get::<Document>(&["collections", collection, "documents", key])
            .await
        {
            Ok(doc) => Ok(Some(doc.fields)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        fields: Fields,
    ) -> Result<(), Error> {
        self.put(
            &["collections", collection, "documents", key],
            &SetRequest { fields: &fields },
        )
        .await
    }

    async fn delete_document(&self, collection: &str, key: &str) -> Result<(), Error> {
        self.delete(&["collections", collection, "documents", key])
            .await
    }
}
