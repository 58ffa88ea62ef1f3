// src/web/upload_handlers.rs
use crate::{
    error::AppResult,
    models::analysis::UploadedImage,
    services::{analysis_service, backend_client::BackendClient},
    templates::IndexPage,
    web::page_handlers::render_page,
};
use axum::{
    extract::{Multipart, State},
    response::Response,
};
use uuid::Uuid;

// Campos lidos do `uploadForm`
#[derive(Debug, Default)]
struct UploadFields {
    crop_type: String,
    file: Option<UploadedImage>,
}

async fn read_upload_fields(mut multipart: Multipart) -> AppResult<UploadFields> {
    let mut fields = UploadFields::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("crop_type") => fields.crop_type = field.text().await?,
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                fields.file = Some(UploadedImage { file_name, content_type, bytes });
            }
            other => tracing::debug!("Campo multipart ignorado: {:?}", other),
        }
    }

    Ok(fields)
}

/// Handler para POST /upload-image - valida, envia ao backend e mostra o resultado.
pub async fn handle_upload(
    State(backend): State<BackendClient>,
    multipart: Multipart,
) -> AppResult<Response> {
    let submission_id = Uuid::new_v4();
    let fields = read_upload_fields(multipart).await?;
    tracing::info!(%submission_id, "POST /upload-image: cultura '{}'", fields.crop_type);

    let mut page = IndexPage::new().with_crop_type(&fields.crop_type);

    let outcome = match analysis_service::validate_upload(&fields.crop_type, fields.file) {
        Ok(request) => analysis_service::analyze_image(&backend, request, submission_id).await,
        Err(e) => {
            tracing::warn!(%submission_id, "Upload inválido, nada enviado ao backend: {}", e);
            Err(e)
        }
    };

    match outcome {
        Ok(analysis) => {
            tracing::info!(%submission_id, "Análise concluída: {}", analysis.predicted_disease);
            page.show_analysis(&analysis);
        }
        Err(e) => page.notify(analysis_service::notice_for(&e)),
    }

    render_page(&page)
}
