use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sparc_core::types::AiProvider;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProviderInfo {
    pub id: AiProvider,
    pub name: &'static str,
    pub configured: bool,
}

/// GET /providers: every known provider and whether it has credentials.
pub async fn list_providers(State(app): State<AppState>) -> Json<Vec<ProviderInfo>> {
    let list = AiProvider::all()
        .iter()
        .map(|&p| ProviderInfo {
            id: p,
            name: p.display_name(),
            configured: app.providers.is_configured(p),
        })
        .collect();
    Json(list)
}
