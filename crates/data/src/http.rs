//! HTTP implementation of the backend.

use crate::backend::SimulationBackend;
use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::wire::decode;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use simdash_domain::entities::{FilePayload, SimulationResult, UploadReference};
use simdash_domain::value_objects::SimulationRequest;
use std::sync::Arc;
use tracing::{debug, info};

/// Talks to the simulation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Arc<BackendConfig>,
    http: Client,
}

impl HttpBackend {
    /// Creates a backend client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            config: Arc::new(config),
            http: builder.build()?,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "Response received");
        decode(status, &body)
    }
}

#[async_trait]
impl SimulationBackend for HttpBackend {
    async fn upload(&self, file: FilePayload) -> Result<UploadReference, BackendError> {
        let url = self.config.upload_url();
        info!(file = %file.file_name, bytes = file.len(), url = %url, "Uploading dataset");

        let part = Part::bytes(file.bytes).file_name(file.file_name);
        let form = Form::new().part("file", part);

        self.execute(self.http.post(url).multipart(form)).await
    }

    async fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, BackendError> {
        let url = self.config.train_url();
        info!(
            filepath = ?request.filepath,
            epochs = %request.epochs,
            window_size = %request.window_size,
            url = %url,
            "Requesting simulation"
        );

        let result: SimulationResult = self.execute(self.http.post(url).json(request)).await?;
        result.validate()?;
        Ok(result)
    }
}
