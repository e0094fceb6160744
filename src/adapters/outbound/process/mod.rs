mod sbom_tool;

pub use sbom_tool::SbomToolEngine;
