use anyhow::Context;
use sparc_agent::ProviderConfig;
use sparc_core::config::Config;
use sparc_server::AppState;

pub fn run(config: Config, providers: ProviderConfig, port: Option<u16>) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.server.port);
    let state = AppState::new(config, providers).context("cannot start server")?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
            .await
            .with_context(|| format!("failed to bind port {port}"))?;
        let actual_port = listener.local_addr()?.port();
        println!("SPARC server → http://localhost:{actual_port}");

        tokio::select! {
            res = sparc_server::serve_on(state, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
