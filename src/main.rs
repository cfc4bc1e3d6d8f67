use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use oidc_discovery_certs::common::common::setup_logging;
use oidc_discovery_certs::config::structs::configuration::Configuration;
use oidc_discovery_certs::http::http::https_service;
use oidc_discovery_certs::ssl::ssl::generate_self_signed;
use oidc_discovery_certs::ssl::structs::disk_cert_manager::DiskCertManager;
use oidc_discovery_certs::ssl::structs::log_cert_logger::LogCertLogger;
use oidc_discovery_certs::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    if args.create_selfsigned {
        match generate_self_signed(&args.selfsigned_domain, &args.selfsigned_keyfile, &args.selfsigned_certfile) {
            Ok(_) => exit(0),
            Err(e) => {
                eprintln!("[CERTGEN] {}", e);
                exit(1)
            }
        }
    }

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(e) = setup_logging(&config) {
        eprintln!("{}", e);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let manager = match DiskCertManager::new(config.serving_cert_file.clone(), Arc::new(LogCertLogger)) {
                Ok(manager) => Arc::new(manager),
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            };
            info!("[BOOT] Serving certificate loaded from {}", manager.config().cert_file_path);

            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to register the shutdown signal handlers");
                    exit(1);
                }
            };

            let (watch_tx, watch_rx) = tokio::sync::watch::channel(false);
            let watcher = manager.clone();
            info!("[BOOT] Starting thread for certificate file changes with {:?} delay...", manager.config().sync_interval());
            let watch_handle = tokio::spawn(async move {
                watcher.watch_file_changes(watch_rx).await;
            });

            let address = match config.server.socket_addr() {
                Ok(address) => address,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    exit(1);
                }
            };
            let (handle, server) = https_service(address, manager.clone(), &config.server)?;
            let server_handle = tokio::spawn(server);

            tokio_shutdown.handle().await;
            info!("Shutdown request received, shutting down...");

            let _ = watch_tx.send(true);
            handle.stop(true).await;
            let _ = watch_handle.await;
            match server_handle.await {
                Ok(Err(e)) => error!("[HTTPS] Server stopped with error: {}", e),
                Err(e) => error!("[HTTPS] Server task failed: {}", e),
                Ok(Ok(_)) => {}
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
