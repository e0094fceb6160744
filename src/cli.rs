use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};

/// Drive SBOM generation and validation for build drop directories
#[derive(Parser, Debug)]
#[command(name = "sbom-task")]
#[command(version)]
#[command(about = "Generate and validate SBOM manifests for build drop directories", long_about = None)]
pub struct Args {
    /// Path to a sbom-task.toml config file (auto-discovered in the
    /// working directory when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an SBOM manifest for a build drop
    Generate(GenerateArgs),
    /// Validate a previously generated manifest against its build drop
    Validate(ValidateArgs),
}

/// Arguments map 1:1 to the generation request fields; absent optional
/// arguments are omitted from the engine invocation entirely.
#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    /// Absolute path to the drop directory the SBOM will describe
    #[arg(long)]
    pub build_drop_path: PathBuf,

    /// Supplier of the package the SBOM represents
    #[arg(long)]
    pub package_supplier: String,

    /// Name of the package the SBOM represents
    #[arg(long)]
    pub package_name: String,

    /// Version of the package the SBOM represents
    #[arg(long)]
    pub package_version: String,

    /// Base of the SBOM document namespace URI
    #[arg(long)]
    pub namespace_base_uri: String,

    /// Path to the directory containing build components and package
    /// information (e.g. a project file)
    #[arg(long)]
    pub build_component_path: Option<PathBuf>,

    /// GUID appended to the namespace base URI; generated when omitted
    #[arg(long)]
    pub namespace_uri_unique_part: Option<String>,

    /// File listing external SBOMs to merge into the generated document
    #[arg(long)]
    pub external_document_list_file: Option<PathBuf>,

    /// Directory where the SBOM will be generated (defaults to the drop)
    #[arg(long)]
    pub manifest_dir_path: Option<PathBuf>,

    /// Delete a previously generated manifest directory before generating
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub delete_manifest_dir_if_present: bool,

    /// Fetch licensing information for detected packages
    #[arg(long)]
    pub fetch_license_information: bool,

    /// Parse licensing and supplier information from package metadata
    #[arg(long)]
    pub enable_package_metadata_parsing: bool,

    /// Logging verbosity (Critical, Error, Warning, Informational, Verbose,
    /// LogAlways; unrecognized values fall back to Verbose)
    #[arg(long)]
    pub verbosity: Option<String>,

    /// Manifest format and version, e.g. "SPDX:2.2"
    #[arg(long)]
    pub manifest_info: Option<String>,

    /// Path to the external SBOM tool executable
    #[arg(long)]
    pub tool_path: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct ValidateArgs {
    /// Absolute path to the drop directory the manifest describes
    #[arg(long)]
    pub build_drop_path: PathBuf,

    /// Manifest root directory (defaults to the build drop)
    #[arg(long)]
    pub manifest_dir_path: Option<PathBuf>,

    /// Manifest format and version, e.g. "SPDX:2.2"
    #[arg(long)]
    pub manifest_info: Option<String>,

    /// Where the validator writes its findings report
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Path to the external SBOM tool executable
    #[arg(long)]
    pub tool_path: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
