use crate::adapters::storage::{LocalStorage, ResourceStorage};
use crate::core::mapper::EconomicTermsMapper;
use crate::core::parser::GoldenSchemaParser;
use crate::domain::cdm::EconomicTerms;
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{CdmError, Result};
use tracing::Instrument;
use uuid::Uuid;

/// Runs Golden Schema payloads through parsing and mapping.
///
/// Every log line emitted while processing sits inside a span carrying this
/// processor's correlation id.
pub struct CdmProcessor<F: Storage = LocalStorage, R: Storage = ResourceStorage> {
    parser: GoldenSchemaParser,
    mapper: EconomicTermsMapper,
    files: F,
    resources: R,
    correlation_id: String,
    span: tracing::Span,
    pretty: bool,
}

impl CdmProcessor {
    pub fn new() -> Self {
        Self::with_correlation_id(None)
    }

    pub fn with_correlation_id(correlation_id: Option<String>) -> Self {
        Self::with_storage(
            LocalStorage::default(),
            ResourceStorage::bundled(),
            correlation_id,
        )
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let resources = match config.resources_dir() {
            Some(dir) => ResourceStorage::with_dir(dir),
            None => ResourceStorage::bundled(),
        };
        Self::with_storage(
            LocalStorage::default(),
            resources,
            config.correlation_id().map(str::to_string),
        )
        .pretty(config.pretty_output())
    }
}

impl Default for CdmProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Storage, R: Storage> CdmProcessor<F, R> {
    pub fn with_storage(files: F, resources: R, correlation_id: Option<String>) -> Self {
        let correlation_id = correlation_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let span = tracing::info_span!("cdm", correlation_id = %correlation_id);

        span.in_scope(|| tracing::info!("CdmProcessor initialized"));

        Self {
            parser: GoldenSchemaParser::new(),
            mapper: EconomicTermsMapper::new(),
            files,
            resources,
            correlation_id,
            span,
            pretty: true,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    /// Parses and maps a Golden Schema document.
    ///
    /// `Ok(None)` means the document carries no economic terms data.
    pub fn process_from_text(&self, json: &str) -> Result<Option<EconomicTerms>> {
        let _enter = self.span.enter();

        if json.trim().is_empty() {
            tracing::error!("Golden Schema JSON is empty");
            return Err(CdmError::InvalidInput {
                message: "Golden Schema JSON cannot be null or empty".to_string(),
            });
        }

        tracing::debug!("Parsing Golden Schema JSON ({} bytes)", json.len());
        let record = self.parser.parse(json).inspect_err(|e| {
            tracing::error!("Invalid Golden Schema JSON: {}", e);
        })?;
        tracing::debug!("Parsed {} Golden Schema fields", record.len());

        let terms = self.mapper.build_economic_terms(&record).map_err(|e| {
            tracing::error!("Failed to build EconomicTerms: {}", e);
            CdmError::MappingFailure(e)
        })?;

        match &terms {
            Some(_) => tracing::info!("Successfully built EconomicTerms"),
            None => tracing::info!("Golden Schema carries no economic terms"),
        }

        Ok(terms)
    }

    pub async fn process_from_file(&self, path: &str) -> Result<Option<EconomicTerms>> {
        async {
            tracing::info!("Processing Golden Schema from file: {}", path);

            if !self.files.exists(path).await {
                return Err(CdmError::ConfigMissing {
                    message: format!("Golden Schema file does not exist: {}", path),
                });
            }

            let bytes = self.files.read_file(path).await.inspect_err(|e| {
                tracing::error!("Failed to read Golden Schema file {}: {}", path, e);
            })?;
            self.process_from_text(&decode(bytes)?)
        }
        .instrument(self.span.clone())
        .await
    }

    pub async fn process_from_resource(&self, name: &str) -> Result<Option<EconomicTerms>> {
        async {
            tracing::info!("Processing Golden Schema from resource: {}", name);

            if !self.resources.exists(name).await {
                return Err(CdmError::ConfigMissing {
                    message: format!("Golden Schema resource not found: {}", name),
                });
            }

            let bytes = self.resources.read_file(name).await?;
            self.process_from_text(&decode(bytes)?)
        }
        .instrument(self.span.clone())
        .await
    }

    /// An existing file wins; anything else is looked up as a resource.
    pub async fn process_input(&self, source: &str) -> Result<Option<EconomicTerms>> {
        if self.files.exists(source).await {
            self.process_from_file(source).await
        } else {
            self.process_from_resource(source).await
        }
    }

    /// JSON form of the terms, or a debug dump if serialization fails.
    pub fn render(&self, terms: &EconomicTerms) -> String {
        let json = if self.pretty {
            serde_json::to_string_pretty(terms)
        } else {
            serde_json::to_string(terms)
        };

        json.unwrap_or_else(|e| {
            self.span
                .in_scope(|| tracing::error!("Error serializing EconomicTerms to JSON: {}", e));
            format!("Fallback: {:?}", terms)
        })
    }

    /// Writes rendered terms through the file storage.
    pub async fn write_output(&self, path: &str, terms: &EconomicTerms) -> Result<()> {
        let rendered = self.render(terms);
        self.files
            .write_file(path, rendered.as_bytes())
            .instrument(self.span.clone())
            .await?;
        self.span
            .in_scope(|| tracing::info!("EconomicTerms written to {}", path));
        Ok(())
    }
}

fn decode(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CdmError::MalformedPayload {
        message: format!("Golden Schema is not valid UTF-8: {}", e),
    })
}
