use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' failed with status {status}")]
    RequestNotOk { url: String, status: StatusCode },
}

/// Checks the response status, logging the body of a failed response
/// before turning it into an [`Error::RequestNotOk`].
pub(crate) async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let error_body = resp.text().await;
    log::error!(
        "request not successful, status: {}, url: {}, error resp body: {:?}",
        status,
        url,
        error_body,
    );
    Err(Error::RequestNotOk { url, status })
}
