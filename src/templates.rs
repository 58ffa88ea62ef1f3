// src/templates.rs
use askama::Template; // Trait necessário para Askama
use crate::models::{
    analysis::{AnalysisResult, KNOWN_CROP_TYPES},
    user::UserRecord,
};

// Opção do select `cropType`
#[derive(Clone, Debug)]
pub struct CropOption {
    pub value: &'static str,
    pub selected: bool,
}

// Painel `resultSection`: só fica visível depois de uma análise bem formada
#[derive(Clone, Debug, Default)]
pub struct ResultPanel {
    pub visible: bool,
    pub predicted_disease: String,
    pub solution: String,
}

// Linha do `userTable`, já formatada para mostrar
#[derive(Clone, Debug)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub registered_on: String,
}

#[derive(Clone, Debug, Default)]
pub struct UserListPanel {
    pub visible: bool,
    pub rows: Vec<UserRow>,
}

/// A página com os dois formulários (`uploadForm` e `adminLoginForm`).
/// Cada pedido constrói uma nova; nada é partilhado entre submissões.
#[derive(Template, Clone, Debug)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub crop_options: Vec<CropOption>,
    // Valores ecoados para o utilizador poder voltar a submeter (nunca a password)
    pub admin_email: String,
    pub result: ResultPanel,
    pub users: UserListPanel,
    pub notice: Option<String>,
}

impl Default for IndexPage {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexPage {
    pub fn new() -> Self {
        Self {
            crop_options: crop_options(""),
            admin_email: String::new(),
            result: ResultPanel::default(),
            users: UserListPanel::default(),
            notice: None,
        }
    }

    /// Mantém a cultura escolhida selecionada no select.
    pub fn with_crop_type(mut self, crop_type: &str) -> Self {
        self.crop_options = crop_options(crop_type);
        self
    }

    pub fn with_admin_email(mut self, email: &str) -> Self {
        self.admin_email = email.to_string();
        self
    }

    pub fn show_analysis(&mut self, analysis: &AnalysisResult) {
        self.result = ResultPanel {
            visible: true,
            predicted_disease: analysis.predicted_disease.clone(),
            solution: analysis.solution.clone(),
        };
    }

    /// Substitui as linhas da tabela (limpa as anteriores) e mostra o painel.
    pub fn show_users(&mut self, users: &[UserRecord]) {
        self.users.visible = true;
        self.users.rows.clear();
        self.users.rows.extend(users.iter().map(|user| UserRow {
            id: user.id,
            email: user.email.clone(),
            registered_on: user.registered_on_display(),
        }));
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }
}

fn crop_options(selected: &str) -> Vec<CropOption> {
    KNOWN_CROP_TYPES
        .iter()
        .map(|&value| CropOption { value, selected: value == selected })
        .collect()
}
