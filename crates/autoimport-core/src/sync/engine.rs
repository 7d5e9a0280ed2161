//! SyncEngine implementation
//!
//! One run regenerates the aggregate module from the import roots and then
//! refreshes the leading import of every script under the modify roots.
//! Everything is recomputed from the files on disk; nothing is cached
//! between runs.

use autoimport_blocks::{OwnedNames, first_code_line};
use autoimport_fs::io::{read_text, trimmed_eq, write_if_changed};
use autoimport_fs::{Collector, NormalizedPath, PathFilter};
use tracing::{debug, info, warn};

use crate::Result;
use crate::aggregate::Aggregate;
use crate::config::{SyncConfig, load_config};
use crate::custom::{CustomHandler, TemplateHandler};
use crate::extract::{DeclarationParser, Extractor, SourceState, TreeSitterParser};
use crate::filter::ExcludeFilter;
use crate::kind::FileKind;
use crate::rewrite::Rewriter;

use super::report::{CheckReport, SyncReport};

/// Options for sync operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute every outcome without modifying the filesystem.
    /// Actions are prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Equivalence deciding whether an existing file needs a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Equal after trimming surrounding whitespace (generated module)
    Trimmed,
    /// Same effective first statement (consumer files)
    FirstCodeLine,
}

impl Comparison {
    pub fn unchanged(self, old: &str, new: &str) -> bool {
        match self {
            Comparison::Trimmed => trimmed_eq(old, new),
            Comparison::FirstCodeLine => first_code_line(old) == first_code_line(new),
        }
    }
}

/// Engine keeping the generated module and its consumers in sync
///
/// The parser, the custom handler and the path filter are injected; [`SyncEngine::new`]
/// wires the configuration-driven defaults.
pub struct SyncEngine {
    root: NormalizedPath,
    config: SyncConfig,
    parser: Box<dyn DeclarationParser>,
    custom: Box<dyn CustomHandler>,
    filter: Box<dyn PathFilter>,
}

impl SyncEngine {
    /// Create an engine for the project at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, e.g. an exclude
    /// pattern does not compile.
    pub fn new(root: NormalizedPath, config: SyncConfig) -> Result<Self> {
        config.validate()?;

        let filter = ExcludeFilter::new(&config.exclude)?;
        let parser = TreeSitterParser::new(config.parser.dialect)
            .with_declaration_names(config.parser.declaration_names);
        let custom = TemplateHandler::new(config.custom.clone(), config.specifier_prefix.clone());

        Ok(Self {
            root: root.canonicalize(),
            config,
            parser: Box::new(parser),
            custom: Box::new(custom),
            filter: Box::new(filter),
        })
    }

    /// Create an engine from the configuration file found in `root`.
    pub fn load(root: NormalizedPath) -> Result<Self> {
        let config = load_config(&root)?;
        Self::new(root, config)
    }

    pub fn with_parser(mut self, parser: impl DeclarationParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn with_custom_handler(mut self, handler: impl CustomHandler + 'static) -> Self {
        self.custom = Box::new(handler);
        self
    }

    pub fn with_filter(mut self, filter: impl PathFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    fn owned_names(&self) -> OwnedNames {
        OwnedNames::new(self.config.output.as_deref(), &self.config.previous_outputs)
    }

    fn output_path(&self) -> Option<NormalizedPath> {
        self.config.output.as_deref().map(NormalizedPath::new)
    }

    /// Identifiers the file at `path` exports, after purging generated
    /// imports.
    pub fn exports_of(&self, path: &NormalizedPath) -> Result<Vec<String>> {
        let text = read_text(path)?;
        let owned = self.owned_names();
        let extractor = Extractor::new(self.parser.as_ref(), &owned);
        Ok(extractor.try_exports(&text, SourceState::Raw)?)
    }

    /// Synchronize with default options
    pub fn sync(&self) -> SyncReport {
        self.sync_with_options(&SyncOptions::default())
    }

    /// Run the full synchronization.
    ///
    /// No per-file failure aborts the run; each one is logged and listed in
    /// [`SyncReport::errors`].
    pub fn sync_with_options(&self, options: &SyncOptions) -> SyncReport {
        let mut report = SyncReport::new(options.dry_run);
        let owned = self.owned_names();
        let extractor = Extractor::new(self.parser.as_ref(), &owned);

        let mut collector = Collector::new(self.root.clone(), self.filter.as_ref());
        if let Some(output) = self.output_path() {
            collector = collector.exclude(output);
        }

        let imports = collector.collect_all(&self.config.import);
        for error in &imports.errors {
            report.error(error.to_string());
        }

        let aggregate = self.build_aggregate(&imports.files, &extractor, &mut report);
        report.exports = aggregate.exports().iter().cloned().collect();

        if let Some(output) = self.output_path() {
            let outcome = write_if_changed(
                &self.root.join(output.as_str()),
                &aggregate.render(),
                |old, new| Comparison::Trimmed.unchanged(old, new),
                options.dry_run,
            );
            match outcome {
                Ok(outcome) => report.record(&output, outcome),
                Err(e) => {
                    warn!(output = %output, error = %e, "Failed to write generated module");
                    report.error(format!("{}: {}", output, e));
                }
            }
        }

        let consumers = collector.collect_all(&self.config.modify);
        for error in &consumers.errors {
            report.error(error.to_string());
        }

        let rewriter = Rewriter::new(
            &owned,
            &extractor,
            aggregate.exports(),
            self.config.output.as_deref(),
        );

        for file in consumers
            .files
            .iter()
            .filter(|file| FileKind::classify(file, &self.config.extensions) == FileKind::Script)
        {
            let absolute = self.root.join(file.as_str());
            let original = match read_text(&absolute) {
                Ok(text) => text,
                Err(e) => {
                    warn!(file = %file, error = %e, "Cannot read consumer, skipping");
                    report.error(format!("{}: {}", file, e));
                    continue;
                }
            };

            let rewrite = rewriter.rewrite(file, &original);
            if let Some(e) = &rewrite.parse_error {
                report.error(format!("{}: {}", file, e));
            }

            let outcome = write_if_changed(
                &absolute,
                &rewrite.text,
                |old, new| Comparison::FirstCodeLine.unchanged(old, new),
                options.dry_run,
            );
            match outcome {
                Ok(outcome) => report.record(file, outcome),
                Err(e) => {
                    warn!(file = %file, error = %e, "Failed to rewrite consumer");
                    report.error(format!("{}: {}", file, e));
                }
            }
        }

        info!(
            changed = report.changed.len(),
            unchanged = report.unchanged,
            errors = report.errors.len(),
            dry_run = options.dry_run,
            "Sync finished"
        );
        report
    }

    /// Dry-run the synchronization and report every file that is out of date.
    pub fn check(&self) -> CheckReport {
        let report = self.sync_with_options(&SyncOptions { dry_run: true });
        let output = self.output_path();
        CheckReport::from_dry_run(report, output.as_ref().map(NormalizedPath::as_str))
    }

    fn build_aggregate(
        &self,
        files: &[NormalizedPath],
        extractor: &Extractor<'_>,
        report: &mut SyncReport,
    ) -> Aggregate {
        files.iter().fold(Aggregate::default(), |aggregate, file| {
            let specifier = format!("{}{}", self.config.specifier_prefix, file);
            let kind = FileKind::classify(file, &self.config.extensions);
            debug!(file = %file, ?kind, "Aggregating");

            match kind {
                FileKind::Script => {
                    let text = match read_text(&self.root.join(file.as_str())) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(file = %file, error = %e, "Cannot read import file, skipping");
                            report.error(format!("{}: {}", file, e));
                            return aggregate;
                        }
                    };
                    let names = match extractor.try_exports(&text, SourceState::Raw) {
                        Ok(names) => names,
                        Err(e) => {
                            warn!(file = %file, error = %e, "Could not parse file, it exports nothing");
                            report.error(format!("{}: {}", file, e));
                            Vec::new()
                        }
                    };
                    aggregate.push_script(&specifier, names)
                }
                FileKind::Include => aggregate.push_include(&specifier),
                FileKind::Custom => match self.custom.handle(file) {
                    Some(output) => aggregate.push_custom(output),
                    None => aggregate,
                },
            }
        })
    }
}
