use anyhow::Result;
use golden_cdm::domain::cdm::{BusinessCenterEnum, BusinessDayConventionEnum};
use golden_cdm::{AppConfig, CdmError, CdmProcessor, LocalStorage, ResourceStorage, DEFAULT_RESOURCE};
use tempfile::TempDir;

const SWAP: &str = r#"{
    "tradeId": "IRS-42",
    "effectiveDate": "2025-06-02",
    "effectiveDateBusinessDayConvention": "MODFOLLOWING",
    "effectiveDateBusinessCenter": "GBLO",
    "terminationDate": "2030-06-03",
    "terminationDateBusinessDayConvention": "MODFOLLOWING",
    "terminationDateBusinessCenter": "USNY"
}"#;

#[tokio::test]
async fn test_process_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("swap.json");
    tokio::fs::write(&path, SWAP).await?;

    let processor = CdmProcessor::new();
    let terms = processor
        .process_from_file(path.to_str().unwrap())
        .await?
        .expect("terms");

    let termination = terms.termination_date.expect("termination date");
    assert_eq!(termination.unadjusted_date().to_string(), "2030-06-03");
    assert_eq!(
        termination.business_centers().collect::<Vec<_>>(),
        vec![BusinessCenterEnum::Usny]
    );
    Ok(())
}

#[tokio::test]
async fn test_missing_file_is_config_missing() {
    let err = CdmProcessor::new()
        .process_from_file("/no/such/golden-schema.json")
        .await
        .unwrap_err();
    assert!(matches!(err, CdmError::ConfigMissing { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn test_blank_file_is_invalid_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("blank.json");
    tokio::fs::write(&path, "  \n").await?;

    let err = CdmProcessor::new()
        .process_from_file(path.to_str().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CdmError::InvalidInput { .. }));
    Ok(())
}

#[tokio::test]
async fn test_bundled_resource() -> Result<()> {
    let terms = CdmProcessor::new()
        .process_from_resource(DEFAULT_RESOURCE)
        .await?
        .expect("bundled resource has terms");

    let effective = terms.effective_date.expect("effective date");
    assert_eq!(effective.convention(), BusinessDayConventionEnum::ModFollowing);
    assert!(terms.termination_date.is_some());
    Ok(())
}

#[tokio::test]
async fn test_unknown_resource_is_config_missing() {
    let err = CdmProcessor::new()
        .process_from_resource("does-not-exist.json")
        .await
        .unwrap_err();
    assert!(matches!(err, CdmError::ConfigMissing { .. }));
}

#[tokio::test]
async fn test_resources_dir_from_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    tokio::fs::write(temp_dir.path().join("swap.json"), SWAP).await?;

    let config = AppConfig {
        resources_dir: Some(temp_dir.path().to_str().unwrap().to_string()),
        correlation_id: Some("batch-99".to_string()),
        ..AppConfig::default()
    };
    let processor = CdmProcessor::from_config(&config);
    assert_eq!(processor.correlation_id(), "batch-99");

    let terms = processor.process_input("swap.json").await?;
    assert!(terms.is_some());
    Ok(())
}

#[tokio::test]
async fn test_mapping_failure_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("bad.json");
    tokio::fs::write(
        &path,
        r#"{"effectiveDate": "2024-01-15", "effectiveDateBusinessDayConvention": "NOT_A_CONVENTION", "effectiveDateBusinessCenter": "SGSI"}"#,
    )
    .await?;

    let err = CdmProcessor::new()
        .process_from_file(path.to_str().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CdmError::MappingFailure(_)));
    assert!(err.to_string().contains("effectiveDateBusinessDayConvention"));
    Ok(())
}

#[tokio::test]
async fn test_write_output_to_local_storage() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let processor = CdmProcessor::with_storage(
        LocalStorage::new(temp_dir.path()),
        ResourceStorage::bundled(),
        None,
    );

    let terms = processor.process_from_text(SWAP)?.expect("terms");
    processor.write_output("out/terms.json", &terms).await?;

    let written = tokio::fs::read_to_string(temp_dir.path().join("out/terms.json")).await?;
    let reread: golden_cdm::EconomicTerms = serde_json::from_str(&written)?;
    assert_eq!(reread, terms);
    Ok(())
}
