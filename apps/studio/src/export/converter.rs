//! HTML → PDF conversion. The conversion engine itself is an external
//! collaborator; this module only speaks to it.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::options::{ExportOptions, Orientation};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Converter error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Converter returned an empty document")]
    EmptyDocument,
}

/// Turns a standalone HTML page into document bytes.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert(
        &self,
        page_html: &str,
        options: &ExportOptions,
    ) -> Result<Bytes, ConvertError>;
}

/// Converts through a Gotenberg Chromium HTML route
/// (`POST /forms/chromium/convert/html`, multipart `index.html`).
#[derive(Clone)]
pub struct GotenbergConverter {
    client: Client,
    url: String,
}

impl GotenbergConverter {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ConvertError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            url: url.into(),
        })
    }
}

/// Multipart form fields for the page settings Chromium understands.
/// Raster scale and image quality only apply to bitmap capture and are not sent.
pub fn gotenberg_fields(options: &ExportOptions) -> Vec<(&'static str, String)> {
    let (mut width, mut height) = options.format.size_in();
    if options.orientation == Orientation::Landscape {
        std::mem::swap(&mut width, &mut height);
    }
    let [top, right, bottom, left] = options.margins_in;
    vec![
        ("paperWidth", width.to_string()),
        ("paperHeight", height.to_string()),
        ("marginTop", top.to_string()),
        ("marginRight", right.to_string()),
        ("marginBottom", bottom.to_string()),
        ("marginLeft", left.to_string()),
        (
            "landscape",
            (options.orientation == Orientation::Landscape).to_string(),
        ),
        ("printBackground", "true".to_string()),
    ]
}

#[async_trait]
impl DocumentConverter for GotenbergConverter {
    async fn convert(
        &self,
        page_html: &str,
        options: &ExportOptions,
    ) -> Result<Bytes, ConvertError> {
        let index = Part::text(page_html.to_string())
            .file_name("index.html")
            .mime_str("text/html")?;
        let form = gotenberg_fields(options)
            .into_iter()
            .fold(Form::new().part("files", index), |form, (name, value)| {
                form.text(name, value)
            });

        debug!(
            raster_scale = options.raster_scale,
            image_quality = options.image_quality,
            cross_origin_images = options.allow_cross_origin_images,
            compress = options.compress,
            "Converting {} bytes of HTML via {}",
            page_html.len(),
            self.url
        );
        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ConvertError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await?;
        if pdf.is_empty() {
            return Err(ConvertError::EmptyDocument);
        }
        debug!("Converter returned {} bytes", pdf.len());
        Ok(pdf)
    }
}
