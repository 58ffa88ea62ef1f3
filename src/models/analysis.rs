// src/models/analysis.rs
use serde::Deserialize;
use serde_json::Value;

/// Culturas para as quais o backend tem modelo treinado.
pub const KNOWN_CROP_TYPES: &[&str] = &["apple", "cherry", "corn", "grape", "tomato"];

/// Ficheiro escolhido no input `formFile`.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    /// Um `<input type="file">` vazio chega como parte sem nome e sem conteúdo.
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.bytes.is_empty()
    }
}

/// Pedido de análise já validado.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub crop_type: String,
    pub file: UploadedImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub predicted_disease: String,
    pub solution: String,
}

// Envelope devolvido por POST /upload-image/
// `result` fica como Value: a forma é verificada à parte para distinguir
// "JSON inválido" de "JSON com formato inesperado".
#[derive(Debug, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub report_id: Option<i64>,
}

impl AnalysisResponse {
    /// Só aceita `result` com `predicted_disease` e `solution` como strings não vazias.
    pub fn analysis(&self) -> Option<AnalysisResult> {
        let result = self.result.as_object()?;
        let non_empty = |key: &str| {
            result
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Some(AnalysisResult {
            predicted_disease: non_empty("predicted_disease")?,
            solution: non_empty("solution")?,
        })
    }
}
