use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Lambda binaries and the zip artifact each one is packaged into.
const LAMBDA_ARTIFACTS: &[(&str, &str)] = &[
    ("publish_article_lambda", "publish_article.zip"),
    ("list_articles_lambda", "list_articles.zip"),
    ("get_article_lambda", "get_article.zip"),
];

const DIST_DIR: &str = "dist";

#[derive(Parser)]
#[command(name = "xtask", about = "Packages the article Lambda handlers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the three article handlers and zip each binary as `bootstrap`
    ServerlessPackage {
        /// Compilation target triple for Lambda binaries
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
        /// Directory the zips are written to
        #[arg(long, default_value = DIST_DIR)]
        out_dir: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

fn build_article_lambdas(target: &str, profile: BuildProfile) {
    let mut args = vec!["build", "-p", "articles_lambda", "--target", target];
    for &(bin_name, _) in LAMBDA_ARTIFACTS {
        args.extend(["--bin", bin_name]);
    }
    if let BuildProfile::Release = profile {
        args.push("--release");
    }

    eprintln!("+ cargo {}", args.join(" "));
    let status = Command::new("cargo")
        .args(&args)
        .status()
        .expect("failed to execute cargo");
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn zip_as_bootstrap(binary_path: &Path, zip_path: &Path) {
    let binary = fs::read(binary_path).unwrap_or_else(|error| {
        panic!("expected lambda binary at '{}': {error}", binary_path.display())
    });

    let mut zip = ZipWriter::new(fs::File::create(zip_path).expect("failed to create lambda zip"));
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);
    zip.start_file("bootstrap", options)
        .expect("failed to start bootstrap entry");
    zip.write_all(&binary)
        .expect("failed to write bootstrap entry");
    zip.finish().expect("failed to finish lambda zip");
}

fn main() {
    let Commands::ServerlessPackage {
        target,
        profile,
        out_dir,
    } = Cli::parse().command;

    eprintln!("\n=== Build article lambda binaries ===");
    build_article_lambdas(&target, profile);

    eprintln!("\n=== Package lambda zip artifacts ===");
    let target_dir = Path::new("target").join(&target).join(profile.dir_name());
    fs::create_dir_all(&out_dir).expect("failed to create lambda dist directory");

    for (bin_name, zip_name) in LAMBDA_ARTIFACTS {
        let zip_path = out_dir.join(zip_name);
        zip_as_bootstrap(&target_dir.join(bin_name), &zip_path);
        eprintln!("- {}", zip_path.display());
    }
}
