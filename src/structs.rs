use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create a development self-signed key and certificate file, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,
    /// Extra subject alternative name for the self-signed certificate.
    #[arg(long, default_value = "localhost")]
    pub selfsigned_domain: String,
    /// Where to write the self-signed private key.
    #[arg(long, default_value = "key.pem")]
    pub selfsigned_keyfile: String,
    /// Where to write the self-signed certificate.
    #[arg(long, default_value = "cert.pem")]
    pub selfsigned_certfile: String
}
