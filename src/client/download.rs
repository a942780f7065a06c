//! Original flight log download

use super::dronelogbook::present;
use super::DroneLogBook;
use crate::error::Result;
use crate::http::RequestConfig;
use bytes::Bytes;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

impl DroneLogBook {
    /// Download the original binary log of a flight
    ///
    /// When `destination` is given the file is created or truncated and
    /// the whole body written to it before returning.
    pub async fn download_log(
        &self,
        guid: Option<&str>,
        destination: Option<&Path>,
    ) -> Result<Option<Bytes>> {
        let Some(guid) = present(guid) else {
            return Ok(None);
        };

        debug!("Downloading original log for flight {}", guid);
        let request = RequestConfig::new()
            .form_field("apiKey", self.credentials().api_key.clone())
            .form_field("flightId", guid);
        let body = self
            .http()
            .post_bytes(&self.config().log_url, request)
            .await?;

        if let Some(path) = destination {
            write_log(path, &body).await?;
            info!("Wrote {} bytes of flight {} log to {}", body.len(), guid, path.display());
        }

        Ok(Some(body))
    }
}

async fn write_log(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(content).await?;
    file.flush().await?;
    Ok(())
}
