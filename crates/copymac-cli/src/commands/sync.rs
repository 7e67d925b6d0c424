use anyhow::Context;
use copymac::config::{ConfigDiscovery, ConfigManager};
use copymac::sync::{SyncEngine, SyncReporter};
use copymac::tagging::XattrTagger;

use super::common::{SyncOptions, workspace_root};

pub struct SyncCommand;

impl SyncCommand {
    pub fn execute(options: &SyncOptions) -> anyhow::Result<()> {
        let explicit = ConfigDiscovery::from_env();
        let config =
            ConfigManager::load(explicit.as_deref()).context("Failed to load configuration")?;
        let default_root = workspace_root();
        let layout = ConfigManager::resolve_layout(config, &default_root).with_context(|| {
            format!(
                "Failed to resolve sync layout (default local root is the build checkout {}; \
                 set local_root in the config file to sync another directory)",
                default_root.display()
            )
        })?;

        if options.verbose {
            let (source, dest) = layout.roots(options.direction);
            eprintln!("Source: {}", source.display());
            eprintln!("Dest:   {}", dest.display());
        }

        let engine = SyncEngine::new(layout, options.direction).with_dry_run(options.dry_run);
        let tagger = XattrTagger::default();
        let result = engine.sync(&tagger).context("Sync operation failed")?;

        let summary = SyncReporter::generate_summary(options.direction, &result);
        println!("{summary}");

        Ok(())
    }
}
