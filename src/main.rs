use std::path::{Path, PathBuf};
use std::process;

use anyhow::anyhow;

use sbom_task::adapters::outbound::console::StderrProgressReporter;
use sbom_task::adapters::outbound::process::SbomToolEngine;
use sbom_task::application::dto::{GenerationRequest, ValidationRequest};
use sbom_task::application::use_cases::{GenerateManifestUseCase, ValidateManifestUseCase};
use sbom_task::cli::{Args, Command, GenerateArgs, ValidateArgs};
use sbom_task::config::{discover_config, load_config_from_path, ConfigFile};
use sbom_task::generation::domain::SbomSpecification;
use sbom_task::shared::error::{ExitCode, SbomTaskError};
use sbom_task::shared::Result;

#[tokio::main]
async fn main() {
    // clap itself exits with code 2 on argument errors.
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e));
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<SbomTaskError>()
        .map(SbomTaskError::exit_code)
        .unwrap_or(ExitCode::ApplicationError)
        .as_i32()
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    }
    .unwrap_or_default();

    match args.command {
        Command::Generate(generate) => run_generate(generate, config).await,
        Command::Validate(validate) => run_validate(validate, config).await,
    }
}

async fn run_generate(args: GenerateArgs, config: ConfigFile) -> Result<ExitCode> {
    let tool_path = resolve_tool_path(args.tool_path, &config)?;
    let specification = resolve_specification(args.manifest_info, &config)?;

    let mut builder = GenerationRequest::builder()
        .build_drop_path(args.build_drop_path)
        .package_supplier(args.package_supplier)
        .package_name(args.package_name)
        .package_version(args.package_version)
        .namespace_base_uri(args.namespace_base_uri)
        .delete_manifest_dir_if_present(args.delete_manifest_dir_if_present)
        .fetch_license_information(args.fetch_license_information)
        .enable_package_metadata_parsing(args.enable_package_metadata_parsing)
        .specification(specification);

    if let Some(component_path) = args.build_component_path {
        builder = builder.build_component_path(component_path);
    }
    if let Some(unique_part) = args.namespace_uri_unique_part {
        builder = builder.namespace_uri_unique_part(unique_part);
    }
    if let Some(list_file) = args.external_document_list_file {
        builder = builder.external_document_list_file(list_file);
    }
    if let Some(manifest_dir) = args.manifest_dir_path {
        builder = builder.manifest_dir_path(manifest_dir);
    }
    if let Some(verbosity) = args.verbosity.or(config.verbosity) {
        builder = builder.verbosity(verbosity);
    }

    let request = builder.build()?;

    let use_case = GenerateManifestUseCase::new(
        SbomToolEngine::new(tool_path),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(request).await?;

    // The manifest path goes to stdout so build scripts can consume it.
    println!("{}", response.manifest_path.display());
    Ok(ExitCode::Success)
}

async fn run_validate(args: ValidateArgs, config: ConfigFile) -> Result<ExitCode> {
    let tool_path = resolve_tool_path(args.tool_path, &config)?;
    let specification = resolve_specification(args.manifest_info, &config)?;

    let manifest_root = args
        .manifest_dir_path
        .unwrap_or_else(|| args.build_drop_path.clone());
    let request = ValidationRequest {
        build_drop_path: args.build_drop_path,
        manifest_root,
        output_path: args.output_path,
        specification,
    };

    let use_case = ValidateManifestUseCase::new(
        SbomToolEngine::new(tool_path),
        StderrProgressReporter::new(),
    );
    let outcome = use_case.execute(request).await?;

    if outcome.is_success {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::EngineFailure)
    }
}

fn resolve_tool_path(cli_value: Option<PathBuf>, config: &ConfigFile) -> Result<PathBuf> {
    cli_value
        .or_else(|| config.tool_path.clone())
        .ok_or_else(|| {
            anyhow!(
                "No SBOM tool configured.\n\n💡 Hint: Pass --tool-path or set tool_path in sbom-task.toml"
            )
        })
}

fn resolve_specification(
    cli_value: Option<String>,
    config: &ConfigFile,
) -> Result<SbomSpecification> {
    match cli_value.or_else(|| config.manifest_info.clone()) {
        Some(text) => Ok(text.parse::<SbomSpecification>()?),
        None => Ok(SbomSpecification::spdx_2_2()),
    }
}
