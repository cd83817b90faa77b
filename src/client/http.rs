use super::{AppError, Contact, ContactDraft, ContactsApi};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// `ContactsApi` over the phonebook's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpContactsApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpContactsApi {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let mut base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "{} cannot be used as a base url",
                base_url
            )));
        }

        // `Url::join` replaces the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    /// The `/info` HTML fragment.
    pub async fn info(&self) -> Result<String, AppError> {
        let url = self.base_url.join("info")?;
        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.text().await?)
    }

    fn persons_url(&self) -> Result<Url, AppError> {
        Ok(self.base_url.join("api/persons")?)
    }

    fn person_url(&self, id: &str) -> Result<Url, AppError> {
        let mut url = self.persons_url()?;
        url.path_segments_mut()
            .map_err(|_| AppError::Validation("base url cannot take a path".to_string()))?
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl ContactsApi for HttpContactsApi {
    async fn get_all(&self) -> Result<Vec<Contact>, AppError> {
        let url = self.persons_url()?;
        debug!(%url, "fetching all contacts");

        let response = check_status(self.client.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact, AppError> {
        let url = self.persons_url()?;
        debug!(%url, "creating contact");

        let response = check_status(self.client.post(url).json(draft).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: &str, draft: &ContactDraft) -> Result<Contact, AppError> {
        let url = self.person_url(id)?;
        debug!(%url, "updating contact");

        let response = check_status(self.client.put(url).json(draft).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn remove(&self, id: &str) -> Result<(), AppError> {
        let url = self.person_url(id)?;
        debug!(%url, "deleting contact");

        check_status(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

/// Maps a non-success response to the error taxonomy.
/// 404 becomes `NotFound`; anything else keeps the server's `error` text.
async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound("Person".to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.error)
        .unwrap_or_default();

    Err(AppError::Api {
        status: status.as_u16(),
        message,
    })
}
