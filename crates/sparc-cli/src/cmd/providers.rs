use crate::output::{print_json, print_table};
use sparc_agent::ProviderConfig;
use sparc_core::types::AiProvider;

pub fn run(providers: &ProviderConfig, default: AiProvider, json: bool) -> anyhow::Result<()> {
    if json {
        let list: Vec<serde_json::Value> = AiProvider::all()
            .iter()
            .map(|&p| {
                serde_json::json!({
                    "id": p,
                    "name": p.display_name(),
                    "configured": providers.is_configured(p),
                    "default": p == default,
                })
            })
            .collect();
        return print_json(&list);
    }

    let rows = AiProvider::all()
        .iter()
        .map(|&p| {
            vec![
                p.to_string(),
                p.display_name().to_string(),
                if providers.is_configured(p) { "yes" } else { "no" }.to_string(),
                if p == default { "*" } else { "" }.to_string(),
            ]
        })
        .collect();
    print_table(&["ID", "NAME", "CONFIGURED", "DEFAULT"], rows);
    Ok(())
}
