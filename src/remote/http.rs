//! JSON over HTTP clients for the sentence server.
//!
//! - existence lookups: `POST {base}/sentences/existing` with `{"language", "sentences"}`,
//!   answering `[{"sentence"}]`,
//! - submissions: `POST {base}/sentences` with the same body, answering `{"sentences", "errors"}`.
//!
//! Both use HTTP basic authentication.
use log::debug;
use reqwest::{Client, Url};
use serde::Serialize;

use super::{CorpusStore, ExistingSentence, SubmissionEndpoint, SubmissionResponse};
use crate::error::Error;
use crate::lang::Lang;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
struct SentencesBody<'a> {
    language: &'a Lang,
    sentences: &'a [String],
}

/// Shared client state.
#[derive(Debug, Clone)]
struct Server {
    base: Url,
    credentials: Option<Credentials>,
    client: Client,
}

impl Server {
    fn new(base: &str, credentials: Option<Credentials>) -> Result<Self, Error> {
        // keep the last path segment when joining
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{base}/"))?
        };
        Ok(Self {
            base,
            credentials,
            client: Client::new(),
        })
    }

    async fn post<R>(&self, path: &str, lang: &Lang, sentences: &[String]) -> Result<R, Error>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = self.base.join(path)?;
        debug!("POST {url} ({} sentences)", sentences.len());

        let mut request = self.client.post(url).json(&SentencesBody {
            language: lang,
            sentences,
        });
        if let Some(c) = &self.credentials {
            request = request.basic_auth(&c.username, Some(&c.password));
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[derive(Debug, Clone)]
pub struct HttpCorpusStore {
    server: Server,
}

impl HttpCorpusStore {
    pub fn new(base: &str, credentials: Option<Credentials>) -> Result<Self, Error> {
        Ok(Self {
            server: Server::new(base, credentials)?,
        })
    }
}

impl CorpusStore for HttpCorpusStore {
    async fn validate_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<Vec<ExistingSentence>, Error> {
        self.server.post("sentences/existing", lang, sentences).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    server: Server,
}

impl HttpEndpoint {
    pub fn new(base: &str, credentials: Option<Credentials>) -> Result<Self, Error> {
        Ok(Self {
            server: Server::new(base, credentials)?,
        })
    }
}

impl SubmissionEndpoint for HttpEndpoint {
    async fn submit_sentences(
        &self,
        lang: &Lang,
        sentences: &[String],
    ) -> Result<SubmissionResponse, Error> {
        self.server.post("sentences", lang, sentences).await
    }
}
