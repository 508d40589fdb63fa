//! The four documentation update steps.
//!
//! Each step reads its sources fresh from disk and writes exactly one file,
//! so steps are independent and individually retryable. [`Orchestrator::run`]
//! executes them in order and stops at the first failure.

use std::fmt;
use std::path::PathBuf;

use docgen_lua::{LuaFunction, TypeCatalog, parse_directory};
use docgen_render::{Vimdoc, VimdocSection, generate_toc, indent, render_md_api, render_vimdoc_api};
use docgen_sections::{Document, replace_section};

use crate::config::DocgenConfig;
use crate::error::{CliError, Result};

const API_START: &str = r"^<!-- API -->$";
const API_END: &str = r"^<!-- /API -->$";
const OPTIONS_START: &str = r"^<!-- OPTIONS -->$";
const OPTIONS_END: &str = r"^<!-- /OPTIONS -->$";
const TOC_START: &str = r"^<!-- TOC -->$";
const TOC_END: &str = r"^<!-- /TOC -->$";

/// Opening line of the defaults table in the plugin's config file.
const DEFAULTS_START: &str = r"^\s*local default_config =";
/// The defaults table ends at the first unindented closing brace.
const DEFAULTS_END: &str = r"^}$";

/// One documentation update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Api,
    Options,
    Toc,
    Vimdoc,
}

impl Step {
    /// All steps in execution order.
    pub const ALL: [Step; 4] = [Step::Api, Step::Options, Step::Toc, Step::Vimdoc];
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Api => "README API update",
            Self::Options => "README options update",
            Self::Toc => "README table of contents update",
            Self::Vimdoc => "vimdoc generation",
        };
        f.write_str(name)
    }
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub path: PathBuf,
    /// Whether the file content changed.
    pub changed: bool,
}

/// Outcomes of a full run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<StepOutcome>,
}

impl RunReport {
    pub fn changed(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes.iter().filter(|o| o.changed)
    }
}

/// Runs the documentation update steps for one plugin.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: DocgenConfig,
}

impl Orchestrator {
    pub fn new(config: DocgenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DocgenConfig {
        &self.config
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// Files written by earlier steps stay written; each write is atomic on
    /// its own.
    pub fn run(&self) -> Result<RunReport> {
        let mut report = RunReport::default();
        for step in Step::ALL {
            let outcome = self.run_step(step).map_err(|source| CliError::Step {
                step,
                source: Box::new(source),
            })?;
            report.outcomes.push(outcome);
        }
        Ok(report)
    }

    /// Run a single step.
    pub fn run_step(&self, step: Step) -> Result<StepOutcome> {
        tracing::debug!(%step, "running step");
        let (path, changed) = match step {
            Step::Api => (self.config.readme.clone(), self.update_md_api()?),
            Step::Options => (self.config.readme.clone(), self.update_options()?),
            Step::Toc => (self.config.readme.clone(), self.update_readme_toc()?),
            Step::Vimdoc => (self.config.vimdoc.clone(), self.generate_vimdoc()?),
        };
        if changed {
            tracing::info!(%step, path = %path.display(), "updated");
        }
        Ok(StepOutcome {
            step,
            path,
            changed,
        })
    }

    /// Regenerate the README API reference from the module's annotations.
    pub fn update_md_api(&self) -> Result<bool> {
        let catalog = self.catalog()?;
        let funcs = self.module_functions(&catalog)?;

        let mut rendered = render_md_api(funcs, &catalog, self.config.api_heading_level);
        // Drop the blank line that closes the last function block.
        rendered.pop();
        let mut lines = vec!["\n".to_string()];
        lines.extend(rendered);

        Ok(replace_section(&self.config.readme, API_START, API_END, &lines)?)
    }

    /// Copy the default configuration table into the README as a setup call.
    pub fn update_options(&self) -> Result<bool> {
        let plugin = &self.config.plugin;
        let mut lines = vec![
            "```lua\n".to_string(),
            format!("require(\"{plugin}\").setup({{\n"),
        ];
        lines.extend(self.default_config()?);
        lines.extend(["})\n".to_string(), "```\n".to_string(), "\n".to_string()]);

        Ok(replace_section(
            &self.config.readme,
            OPTIONS_START,
            OPTIONS_END,
            &lines,
        )?)
    }

    /// Rebuild the README table of contents from its own headings.
    pub fn update_readme_toc(&self) -> Result<bool> {
        let readme = Document::load(&self.config.readme)?;
        let mut lines = vec!["\n".to_string()];
        lines.extend(generate_toc(readme.lines(), self.config.toc_max_level));
        lines.push("\n".to_string());

        Ok(replace_section(&self.config.readme, TOC_START, TOC_END, &lines)?)
    }

    /// Render the full help file and write it over the previous one.
    pub fn generate_vimdoc(&self) -> Result<bool> {
        let plugin = &self.config.plugin;
        let catalog = self.catalog()?;
        let funcs = self.module_functions(&catalog)?;

        let mut doc = Vimdoc::new(self.config.vimdoc_filename(), plugin.as_str());
        doc.sections.push(self.options_vimdoc()?);
        doc.sections.push(VimdocSection::new(
            "API",
            format!("{plugin}-api"),
            render_vimdoc_api(plugin, funcs, &catalog),
        ));

        Ok(docgen_fs::write_if_changed(
            &self.config.vimdoc,
            &doc.render().concat(),
        )?)
    }

    fn options_vimdoc(&self) -> Result<VimdocSection> {
        let plugin = &self.config.plugin;
        let mut code = vec![format!("require(\"{plugin}\").setup({{\n")];
        code.extend(self.default_config()?);
        code.push("})\n".to_string());

        let mut body = vec!["\n".to_string(), ">lua\n".to_string()];
        body.extend(indent(&code, 4));
        body.push("<\n".to_string());
        Ok(VimdocSection::new("Options", format!("{plugin}-options"), body))
    }

    /// Interior of the `local default_config = { ... }` table.
    fn default_config(&self) -> Result<Vec<String>> {
        let path = &self.config.config_file;
        docgen_sections::read_section(path, DEFAULTS_START, DEFAULTS_END).map_err(|e| match e {
            docgen_sections::Error::MarkerNotFound { kind, .. } => CliError::MalformedConfigBlock {
                path: path.clone(),
                reason: match kind {
                    docgen_sections::MarkerKind::Start => {
                        "no `local default_config =` line".to_string()
                    }
                    docgen_sections::MarkerKind::End => {
                        "defaults table is not closed by a `}` line".to_string()
                    }
                },
            },
            other => other.into(),
        })
    }

    fn catalog(&self) -> Result<TypeCatalog> {
        Ok(parse_directory(&self.config.lua_dir)?)
    }

    fn module_functions<'a>(&self, catalog: &'a TypeCatalog) -> Result<&'a [LuaFunction]> {
        catalog
            .functions(&self.config.module)
            .ok_or_else(|| CliError::ModuleNotFound {
                module: self.config.module.clone(),
                lua_dir: self.config.lua_dir.clone(),
            })
    }
}
