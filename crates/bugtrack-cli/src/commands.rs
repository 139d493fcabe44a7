use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use bugtrack_model::ModuleCatalog;
use bugtrack_report::{TemplateOptions, summarize, write_template};

use crate::cli::{GenerateArgs, ModulesArgs};
use crate::summary::apply_table_style;
use crate::types::GenerateResult;

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let options = TemplateOptions {
        title: args.title.clone(),
        data_rows: args.rows,
        sample_row: !args.no_sample_row,
        instructions: !args.no_instructions,
    };

    if args.dry_run {
        catalog.validate()?;
        info!(modules = catalog.len(), "dry run, nothing written");
        return Ok(GenerateResult {
            summary: summarize(&args.output, &catalog, &options),
            dry_run: true,
        });
    }

    let summary = write_template(&args.output, &catalog, &options)?;
    Ok(GenerateResult {
        summary,
        dry_run: false,
    })
}

pub fn run_modules(args: &ModulesArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Module", "Named Range", "Sections"]);
    apply_table_style(&mut table);
    for module in &catalog.modules {
        table.add_row(vec![
            module.name.clone(),
            module.range_name(),
            module.sections.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<ModuleCatalog> {
    match path {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("read catalog {}", path.display()))?;
            let catalog = ModuleCatalog::from_toml_str(&contents)
                .with_context(|| format!("load catalog {}", path.display()))?;
            info!(path = %path.display(), modules = catalog.len(), "catalog loaded");
            Ok(catalog)
        }
        None => Ok(ModuleCatalog::crm_default()),
    }
}
