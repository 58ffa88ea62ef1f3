// src/services/analysis_service.rs
use crate::{
    error::{FlowError, FlowResult},
    models::analysis::{AnalysisResponse, AnalysisResult, UploadRequest, UploadedImage},
    services::backend_client::{BackendClient, UPLOAD_IMAGE_PATH},
};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use uuid::Uuid;

pub const MISSING_UPLOAD_FIELDS: &str = "Please select a crop type and upload an image.";
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format.";
pub const UPLOAD_FAILED: &str = "An error occurred while uploading the image.";

/// Valida os campos do `uploadForm` antes de qualquer pedido de rede.
pub fn validate_upload(crop_type: &str, file: Option<UploadedImage>) -> FlowResult<UploadRequest> {
    let crop_type = crop_type.trim();
    match file {
        Some(file) if !crop_type.is_empty() && !file.is_empty() => Ok(UploadRequest {
            crop_type: crop_type.to_string(),
            file,
        }),
        _ => Err(FlowError::Validation(MISSING_UPLOAD_FIELDS)),
    }
}

/// Envia a imagem para POST /upload-image/ e extrai o par doença/solução.
pub async fn analyze_image(
    client: &BackendClient,
    request: UploadRequest,
    submission_id: Uuid,
) -> FlowResult<AnalysisResult> {
    let url = client.endpoint(UPLOAD_IMAGE_PATH)?;
    tracing::info!(
        %submission_id,
        crop_type = %request.crop_type,
        file_name = %request.file.file_name,
        bytes = request.file.bytes.len(),
        "A enviar imagem para análise: {}", url
    );

    let mut part = Part::bytes(request.file.bytes).file_name(request.file.file_name);
    if let Some(content_type) = request.file.content_type.as_deref() {
        part = part.mime_str(content_type).map_err(|e| {
            tracing::warn!(%submission_id, "Content-type inválido ({}): {}", content_type, e);
            FlowError::Transport(e)
        })?;
    }
    let form = Form::new().text("crop_type", request.crop_type).part("file", part);

    let response = client.http().post(url).multipart(form).send().await?;
    let status = response.status();
    tracing::debug!(%submission_id, "Backend respondeu {}", status);

    if !status.is_success() {
        // O texto do backend é mostrado tal como vem
        let body = response.text().await?;
        tracing::warn!(%submission_id, "Análise recusada ({}): {}", status, body);
        return Err(FlowError::Rejected { status, body });
    }

    let body = response.bytes().await?;
    parse_analysis(&body, submission_id)
}

/// Interpreta o corpo de uma resposta 2xx.
/// JSON inválido é `Decode`; JSON válido sem o formato certo é `MalformedResponse`.
pub fn parse_analysis(body: &[u8], submission_id: Uuid) -> FlowResult<AnalysisResult> {
    let value: Value = serde_json::from_slice(body)?;

    let analysis = serde_json::from_value::<AnalysisResponse>(value.clone())
        .ok()
        .and_then(|envelope| {
            if let Some(report_id) = envelope.report_id {
                tracing::debug!(%submission_id, report_id, message = ?envelope.message, "Relatório criado no backend");
            }
            envelope.analysis()
        });

    analysis.ok_or_else(|| {
        tracing::warn!(%submission_id, "Resposta com formato inesperado: {}", value);
        FlowError::MalformedResponse(value.to_string())
    })
}

/// Mensagem mostrada ao utilizador para cada falha do fluxo de upload.
pub fn notice_for(error: &FlowError) -> String {
    match error {
        FlowError::Validation(message) => message.to_string(),
        FlowError::MalformedResponse(_) => UNEXPECTED_FORMAT.to_string(),
        FlowError::Rejected { body, .. } => format!("Failed to analyze image: {body}"),
        FlowError::Transport(_) | FlowError::Decode(_) | FlowError::Endpoint(_) => UPLOAD_FAILED.to_string(),
    }
}
