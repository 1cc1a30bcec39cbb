//! Runtime wired to a fixture directory for the commands

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use armoury_content::ContentFactory;
use armoury_core::{Actor, ActorId, Catalog};
use armoury_runtime::{
    Armoury, ArmouryHandle, InMemoryHost, Notification, NotificationKind, Notifier, SeededRandom,
};
use clap::Args;
use console::style;

use crate::dirs;

/// Options shared by every command that reads fixtures
#[derive(Args, Debug)]
pub struct FixtureArgs {
    /// Fixture directory (defaults to $ARMOURY_DATA_DIR, then the bundled fixtures)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Locale for messages (defaults to $ARMOURY_LOCALE, then "en")
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<String>,
}

impl FixtureArgs {
    pub fn factory(&self) -> Result<ContentFactory> {
        Ok(ContentFactory::new(dirs::data_dir(self.data_dir.clone())?))
    }
}

/// Prints notifications to the terminal as they arrive
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let label = match notification.kind {
            NotificationKind::Info => style("info").green().bold(),
            NotificationKind::Warning => style("warning").yellow().bold(),
            NotificationKind::Chat => style("chat").cyan().bold(),
        };
        match notification.kind {
            NotificationKind::Chat => {
                println!("{}", label);
                for line in notification.text.lines() {
                    println!("  {}", line);
                }
            }
            _ => println!("{} {}", label, notification.text),
        }
    }
}

/// In-memory host seeded from fixtures, with a running runtime on top
pub struct Workbench {
    pub armoury: Armoury,
    pub host: Arc<InMemoryHost>,
    pub localizer: Arc<Catalog>,
}

impl Workbench {
    /// Loads fixtures and starts the runtime. `seed` makes armour hits repeatable.
    pub async fn start(args: &FixtureArgs, seed: Option<u64>) -> Result<Self> {
        let factory = args.factory()?;
        let lang = dirs::locale(args.lang.clone());

        let config = factory
            .load_config()
            .with_context(|| {
                format!("Failed to load settings from {}", factory.data_dir().display())
            })?;
        let localizer = Arc::new(
            factory
                .load_locale(&lang)
                .with_context(|| format!("Failed to load locale {lang}"))?,
        );
        let host = Arc::new(
            InMemoryHost::new()
                .with_actors(factory.load_actors().context("Failed to load actor fixtures")?)
                .with_spells(factory.load_spells().context("Failed to load spell fixtures")?),
        );

        let mut builder = Armoury::builder()
            .armoury_config(config)
            .host(host.clone())
            .notifier(Arc::new(ConsoleNotifier))
            .localizer(localizer.clone());
        if let Some(seed) = seed {
            builder = builder.random(SeededRandom::new(seed));
        }
        let armoury = builder.build().await?;

        Ok(Self {
            armoury,
            host,
            localizer,
        })
    }

    pub fn handle(&self) -> ArmouryHandle {
        self.armoury.handle()
    }

    pub fn actor(&self, id: &ActorId) -> Result<Actor> {
        self.host
            .actor(id)
            .with_context(|| format!("Actor not found in fixtures: {id}"))
    }

    /// Stops the runtime. Every handle taken from [`Self::handle`] must be dropped first.
    pub async fn shutdown(self) -> Result<()> {
        self.armoury.shutdown().await?;
        Ok(())
    }
}
