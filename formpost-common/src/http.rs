use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, Response, multipart::Form};
use url::Url;

use crate::errors::Result;

pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(30))
        .build()
        .expect("HTTP CLIENT initialize failed")
});

/// Posts `form` as `multipart/form-data`, the boundary header is set by the encoder.
pub async fn post_multipart(client: &Client, url: Url, form: Form) -> Result<Response> {
    Ok(client.post(url).multipart(form).send().await?)
}

pub fn parse_url<U: AsRef<str>>(url: U) -> Result<Url> {
    Ok(Url::parse(url.as_ref())?)
}
