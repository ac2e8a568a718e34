//! # logo-tool
//!
//! Command line front end for `mtk-logo`.
//!
//! ```sh
//! logo_tool unpack --logo logo.img
//! logo_tool repack --logo logo.img --output logo.repack.img
//! logo_tool info --logo logo.img
//! ```
//!
//! Set `RUST_LOG=debug` to see the per-image offset table.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mtk_logo::{LogoConfig, LogoLayout, LogoStorage};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "logo_tool")]
#[command(author, version, about = "Unpack and repack MediaTek logo images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract every image into the image directory
    Unpack(PathArgs),
    /// Rebuild a logo image from the image directory
    Repack(PathArgs),
    /// Print the offset table without extracting
    Info(PathArgs),
}

#[derive(Args)]
struct PathArgs {
    /// Original logo file (template for repack)
    #[arg(long, default_value = "logo.img")]
    logo: PathBuf,
    /// Output logo file
    #[arg(long, default_value = "out.bin")]
    output: PathBuf,
    /// Directory holding Img<index>.bin files
    #[arg(long, default_value = "logo.d")]
    image_dir: PathBuf,
}

impl From<PathArgs> for LogoConfig {
    fn from(args: PathArgs) -> Self {
        LogoConfig::new()
            .with_logo_path(args.logo)
            .with_output_path(args.output)
            .with_image_dir(args.image_dir)
    }
}

fn print_layout(layout: &LogoLayout) {
    println!("    img   |   offset   | size (bytes)");
    println!("{}", "-".repeat(37));
    for entry in &layout.entries {
        println!(
            "     {:02}   | 0x{:08X} | {:10} ",
            entry.index, entry.offset, entry.size
        );
    }
    println!("{}", "-".repeat(37));
    println!("{:>35}", layout.payload_size());
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Unpack(args) => {
            let storage = LogoStorage::new(args.into());
            let unpacked = storage.unpack().with_context(|| {
                format!("Failed to unpack {}", storage.config().logo_path.display())
            })?;
            print_layout(&unpacked.layout);
            info!(
                "Unpacked {} images into {}",
                unpacked.images.len(),
                storage.config().image_dir.display()
            );
        }
        Commands::Repack(args) => {
            let storage = LogoStorage::new(args.into());
            let layout = storage.repack().with_context(|| {
                format!(
                    "Failed to repack {} into {}",
                    storage.config().image_dir.display(),
                    storage.config().output_path.display()
                )
            })?;
            print_layout(&layout);
        }
        Commands::Info(args) => {
            let storage = LogoStorage::new(args.into());
            let layout = storage.info().with_context(|| {
                format!("Failed to read {}", storage.config().logo_path.display())
            })?;
            println!(
                "signature: {}, images: {}, block size: {}",
                if layout.header.has_signature() {
                    "logo"
                } else {
                    "missing"
                },
                layout.header.image_count,
                layout.header.block_size
            );
            print_layout(&layout);
        }
    }
    Ok(())
}
