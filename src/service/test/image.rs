use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::{
    error::AppError,
    service::image::{decode_base64_image, ImageStore},
};

// Smallest valid 1x1 PNG, used as an upload payload in tests.
const PNG_BYTES: &[u8] = &[
    0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D',
    b'R', 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x00, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82,
];

/// Tests decoding a plain base64 payload.
///
/// Expected: Ok with the original bytes
#[test]
fn decodes_plain_base64() {
    let encoded = BASE64.encode(PNG_BYTES);

    let decoded = decode_base64_image(&encoded).unwrap();

    assert_eq!(decoded, PNG_BYTES);
}

/// Tests decoding a data-URL payload.
///
/// Clients commonly send `data:image/png;base64,...`; the prefix must be
/// stripped before decoding.
///
/// Expected: Ok with the original bytes
#[test]
fn decodes_data_url() {
    let encoded = format!("data:image/png;base64,{}", BASE64.encode(PNG_BYTES));

    let decoded = decode_base64_image(&encoded).unwrap();

    assert_eq!(decoded, PNG_BYTES);
}

/// Tests rejecting payloads that are not base64 or decode to nothing.
///
/// Expected: Err(BadRequest) for both
#[test]
fn rejects_invalid_payloads() {
    assert!(matches!(
        decode_base64_image("not!!valid@@base64"),
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        decode_base64_image(""),
        Err(AppError::BadRequest(_))
    ));
}

/// Tests storing an image writes a file with a sniffed extension.
///
/// Expected: a `.png` file exists under the store root with the decoded bytes
#[tokio::test]
async fn store_writes_sniffed_file() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let store = ImageStore::new(dir.path())?;

    let file_name = store.store(&BASE64.encode(PNG_BYTES)).await?;

    assert!(file_name.ends_with(".png"));
    let written = tokio::fs::read(dir.path().join(&file_name)).await?;
    assert_eq!(written, PNG_BYTES);

    Ok(())
}

/// Tests removing a stored image.
///
/// Removing twice must stay silent; replacement flows delete old images that
/// may already be gone.
///
/// Expected: file gone after the first remove, second remove harmless
#[tokio::test]
async fn remove_deletes_file() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let store = ImageStore::new(dir.path())?;

    let file_name = store.store(&BASE64.encode(PNG_BYTES)).await?;
    assert!(dir.path().join(&file_name).exists());

    store.remove(&file_name).await;
    assert!(!dir.path().join(&file_name).exists());

    store.remove(&file_name).await;

    Ok(())
}

/// Tests unknown magic bytes fall back to a jpg extension.
///
/// Expected: stored name ends with `.jpg`
#[tokio::test]
async fn unknown_bytes_default_to_jpg() -> Result<(), AppError> {
    let dir = tempfile::tempdir()?;
    let store = ImageStore::new(dir.path())?;

    let file_name = store.store(&BASE64.encode(b"\xFF\xD8\xFFsomething")).await?;

    assert!(file_name.ends_with(".jpg"));

    Ok(())
}
