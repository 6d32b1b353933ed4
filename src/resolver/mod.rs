mod payload;

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::{Client, StatusCode, header};

use crate::config::Config;
use crate::models::{LookupError, VariantRecord};

use payload::{VariationPayload, VepItem, collect_gene_symbols};

/// 依次请求 Ensembl 变异接口与 VEP 接口，合并为 `VariantRecord`
///
/// 只有第一次请求的失败会作为错误返回；VEP 请求的任何失败（包括超时）
/// 都降级为空的基因集合。每个请求只尝试一次，不做重试。
#[derive(Debug, Clone)]
pub struct VariantResolver {
    client: Client,
    variant_url: String,
    vep_url: String,
    timeout: Duration,
}

impl VariantResolver {
    pub fn new(
        variant_url: &str,
        vep_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            variant_url: variant_url.trim_end_matches('/').to_string(),
            vep_url: vep_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(&config.variant_url, &config.vep_url, config.request_timeout())
    }

    pub async fn resolve(&self, rsid: &str) -> Result<VariantRecord, LookupError> {
        tracing::info!("Fetching variant: {}", rsid);

        let response = self
            .client
            .get(format!("{}/{}", self.variant_url, rsid))
            .send()
            .await
            .map_err(|e| self.classify(rsid, e))?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => {
                tracing::warn!("Variant not found: {}", rsid);
                return Err(LookupError::NotFound);
            }
            status => {
                tracing::error!("Variant API returned status {} for {}", status.as_u16(), rsid);
                return Err(LookupError::Upstream {
                    status: status.as_u16(),
                });
            }
        }

        let variation: VariationPayload =
            response.json().await.map_err(|e| self.classify(rsid, e))?;

        let genes = self.fetch_genes(rsid).await;
        let record = variation.into_record(rsid, genes);

        tracing::info!("Variant {} resolved with {} gene(s)", rsid, record.genes.len());
        Ok(record)
    }

    async fn fetch_genes(&self, rsid: &str) -> BTreeSet<String> {
        let response = match self
            .client
            .get(format!("{}/{}", self.vep_url, rsid))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("VEP request failed for {}, continuing without genes: {}", rsid, e);
                return BTreeSet::new();
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<Vec<VepItem>>().await {
                Ok(items) => collect_gene_symbols(&items),
                Err(e) => {
                    tracing::warn!("Unreadable VEP response for {}: {}", rsid, e);
                    BTreeSet::new()
                }
            },
            StatusCode::NOT_FOUND => {
                tracing::debug!("VEP has no consequences for {}", rsid);
                BTreeSet::new()
            }
            status => {
                tracing::warn!("VEP returned status {} for {}", status.as_u16(), rsid);
                BTreeSet::new()
            }
        }
    }

    fn classify(&self, rsid: &str, e: reqwest::Error) -> LookupError {
        if e.is_timeout() {
            tracing::error!("Timeout fetching {} after {:?}", rsid, self.timeout);
            LookupError::Timeout {
                after: self.timeout,
            }
        } else if e.is_decode() {
            tracing::error!("Failed to decode variant response for {}: {}", rsid, e);
            LookupError::Decode(e.to_string())
        } else {
            tracing::error!("Connection error fetching {}: {}", rsid, e);
            LookupError::Connection(e.to_string())
        }
    }
}
