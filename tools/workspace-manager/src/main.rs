//! Workspace Manager - plugin workspace maintenance tool
//!
//! Keeps the workspace manifest's member list in sync with the plugin
//! sub-projects that ship with the repository, and renames the
//! plugin-manager package across member manifests when a project is
//! generated from the template.
//!
//! # Usage
//!
//! ```bash
//! # Ensure the plugin sub-projects are listed in ./Cargo.toml
//! workspace-manager
//!
//! # Same, against another workspace directory or manifest file
//! workspace-manager ensure-members path/to/workspace
//!
//! # Rename the plugin-manager package after template instantiation
//! workspace-manager rename-manifests my-plugins
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use workspace_manifest::{
    ensure_members, rename_dependency, rename_package, Manifest, MemberOutcome,
    DEPENDENCY_SECTIONS,
};

/// Sub-project paths that must always be listed in `workspace.members`.
const REQUIRED_MEMBERS: &[&str] = &[
    "tests/plugin_inventory",
    "tests/plugin_mods",
    "tests/plugin_tasks",
    "milas/plugin",
];

/// Package name the template ships with; `rename-manifests` replaces it.
const TEMPLATE_PACKAGE_NAME: &str = "plugin-manager";

/// Member manifests the rename pass visits.
const RENAME_MANIFESTS: &[&str] = &[
    "plugin_manager/Cargo.toml",
    "tests/plugin_tasks/Cargo.toml",
    "tests/plugin_mods/Cargo.toml",
    "tests/plugin_inventory/Cargo.toml",
];

/// Workspace Manager - keep the plugin workspace manifest in sync
#[derive(Parser)]
#[command(name = "workspace-manager")]
#[command(author, version)]
#[command(about = "Ensure plugin sub-projects are listed in the workspace manifest")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Ensure the plugin sub-projects are listed in the workspace manifest
    EnsureMembers {
        /// Workspace directory or manifest path (default: ./Cargo.toml)
        destination: Option<PathBuf>,
    },

    /// Rename the template's plugin-manager package across member manifests
    RenameManifests {
        /// New project name to substitute for the template package name
        project_name: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    // Invoked with no subcommand, the tool runs the membership update
    // against the manifest in the current directory.
    match args
        .command
        .unwrap_or(Command::EnsureMembers { destination: None })
    {
        Command::EnsureMembers { destination } => ensure_workspace_members(destination),
        Command::RenameManifests { project_name } => rename_manifests(&project_name),
    }
}

fn ensure_workspace_members(destination: Option<PathBuf>) -> Result<()> {
    let manifest_path = match destination {
        Some(path) if path.is_dir() => path.join("Cargo.toml"),
        Some(path) => path,
        None => PathBuf::from("Cargo.toml"),
    };
    let label = manifest_path.display().to_string();

    tracing::debug!("Using manifest path: {:?}", manifest_path);

    let mut manifest =
        Manifest::load(&manifest_path).with_context(|| format!("Failed to load {label}"))?;

    print_header(&label);
    print!("{manifest}");

    let report = ensure_members(&mut manifest, REQUIRED_MEMBERS)
        .with_context(|| format!("Failed to update workspace members in {label}"))?;

    for (member, outcome) in report.iter() {
        match outcome {
            MemberOutcome::AlreadyPresent => {
                println!("{member} is included in the workspace.");
            }
            MemberOutcome::Added => {
                println!("Added {member} to the workspace.");
            }
        }
    }

    if report.changed() {
        manifest
            .save()
            .with_context(|| format!("Failed to write {label}"))?;
        println!("Cargo.toml updated successfully.");
    } else {
        println!("No changes were required.");
    }

    Ok(())
}

fn rename_manifests(project_name: &str) -> Result<()> {
    for path in RENAME_MANIFESTS {
        rename_manifest(project_name, Path::new(path))?;
    }
    Ok(())
}

fn rename_manifest(project_name: &str, path: &Path) -> Result<()> {
    let label = path.display().to_string();

    let mut manifest = Manifest::load(path).with_context(|| format!("Failed to load {label}"))?;

    let mut changed = false;
    if rename_package(&mut manifest, TEMPLATE_PACKAGE_NAME, project_name) {
        println!("Set package name to '{project_name}' in {label}");
        changed = true;
    }

    for section in DEPENDENCY_SECTIONS {
        if rename_dependency(&mut manifest, section, TEMPLATE_PACKAGE_NAME, project_name) {
            println!(
                "Renamed '{section}.{TEMPLATE_PACKAGE_NAME}' to '{section}.{project_name}' in {label}"
            );
            changed = true;
        }
    }

    if changed {
        manifest
            .save()
            .with_context(|| format!("Failed to write {label}"))?;
    } else {
        println!("No changes required for {label}");
    }

    Ok(())
}

/// Print the manifest label centered in an 80-column rule of `-` fill.
fn print_header(label: &str) {
    const WIDTH: usize = 80;
    let fill = WIDTH.saturating_sub(label.len());
    let left = fill / 2;
    println!("{}{}{}", "-".repeat(left), label, "-".repeat(fill - left));
}
