//! Showroom - native desktop entry point

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Result;
    use clap::Parser;
    use std::path::PathBuf;
    use tracing::{info, Level};
    use tracing_subscriber::FmtSubscriber;

    #[derive(Parser, Debug)]
    #[command(name = "showroom")]
    #[command(about = "Rotating 3D product showcase")]
    #[command(version)]
    struct Args {
        /// Path to configuration file
        #[arg(short, long, default_value = "showroom.toml")]
        config: PathBuf,

        /// Log level (trace, debug, info, warn, error)
        #[arg(short, long, default_value = "info")]
        log_level: String,

        /// Write the default configuration to the config path and exit
        #[arg(long)]
        write_default_config: bool,
    }

    pub fn main() -> Result<()> {
        let args = Args::parse();

        // Initialize logging
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        info!("Showroom v{}", env!("CARGO_PKG_VERSION"));

        if args.write_default_config {
            showroom_core::save_default_config(&args.config)?;
            info!(path = %args.config.display(), "Wrote default configuration");
            return Ok(());
        }

        let config = showroom_core::load_config(&args.config)?;
        showroom_web::run(config);

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

// The web build starts from the library's wasm_bindgen entry point
#[cfg(target_arch = "wasm32")]
fn main() {}
