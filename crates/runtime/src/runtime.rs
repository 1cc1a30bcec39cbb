//! High-level runtime orchestrator.
//!
//! The runtime owns the dispatch worker, wires up the command channel and the
//! event bus, and exposes a builder-based API for hosts to plug in their ports.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use armoury_core::{ArmouryConfig, Catalog, Localizer, RandomSource};

use crate::api::{ArmouryHandle, Result, RuntimeError};
use crate::events::EventBus;
use crate::hooks::{ArmouryHook, HookRegistry};
use crate::host::{
    ActorStore, FixedAnswer, InMemoryHost, ItemStore, Notifier, Prompter, ThreadRandom,
    TracingNotifier,
};
use crate::services::Services;
use crate::workers::{Command, DispatchWorker};

/// Runtime configuration shared across the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct ArmouryRuntimeConfig {
    pub armoury: ArmouryConfig,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for ArmouryRuntimeConfig {
    fn default() -> Self {
        Self {
            armoury: ArmouryConfig::default(),
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that reacts to host events.
///
/// Design: Armoury owns the worker. [`ArmouryHandle`] provides a cloneable
/// façade for clients.
pub struct Armoury {
    handle: ArmouryHandle,
    worker_handle: JoinHandle<()>,
}

impl Armoury {
    /// Create a new runtime builder
    pub fn builder() -> ArmouryBuilder {
        ArmouryBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> ArmouryHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// The worker stops once every handle clone has been dropped.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Armoury`] with flexible configuration.
pub struct ArmouryBuilder {
    config: ArmouryRuntimeConfig,
    items: Option<Arc<dyn ItemStore>>,
    actors: Option<Arc<dyn ActorStore>>,
    prompter: Option<Arc<dyn Prompter>>,
    notifier: Option<Arc<dyn Notifier>>,
    localizer: Option<Arc<dyn Localizer>>,
    random: Option<Box<dyn RandomSource>>,
    hooks: Option<HookRegistry>,
}

impl ArmouryBuilder {
    fn new() -> Self {
        Self {
            config: ArmouryRuntimeConfig::default(),
            items: None,
            actors: None,
            prompter: None,
            notifier: None,
            localizer: None,
            random: None,
            hooks: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: ArmouryRuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the item-rule settings
    pub fn armoury_config(mut self, armoury: ArmouryConfig) -> Self {
        self.config.armoury = armoury;
        self
    }

    /// Use an in-memory host for items, actors and prompts
    pub fn host(self, host: Arc<InMemoryHost>) -> Self {
        self.item_store(host.clone())
            .actor_store(host.clone())
            .prompter(host)
    }

    /// Set required item store
    pub fn item_store(mut self, store: Arc<dyn ItemStore>) -> Self {
        self.items = Some(store);
        self
    }

    /// Set required actor store
    pub fn actor_store(mut self, store: Arc<dyn ActorStore>) -> Self {
        self.actors = Some(store);
        self
    }

    /// Set the confirmation dialog (default: decline every prompt)
    pub fn prompter(mut self, prompter: Arc<dyn Prompter>) -> Self {
        self.prompter = Some(prompter);
        self
    }

    /// Set the notification sink (default: log through `tracing`)
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Set the localizer (default: built-in English catalog)
    pub fn localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = Some(localizer);
        self
    }

    /// Set the random source (default: [`ThreadRandom`])
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Set custom hooks.
    ///
    /// If not provided, [`HookRegistry::default_hooks`] is used.
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = Some(hooks);
        self
    }

    /// Adds hooks to the default hook set.
    pub fn add_hooks(mut self, additional: Vec<Arc<dyn ArmouryHook>>) -> Self {
        use crate::hooks::{RepairReportHook, RingNameHook, TemporaryRuneHook};

        let mut hooks = vec![
            Arc::new(TemporaryRuneHook) as Arc<dyn ArmouryHook>,
            Arc::new(RingNameHook) as Arc<dyn ArmouryHook>,
            Arc::new(RepairReportHook) as Arc<dyn ArmouryHook>,
        ];
        hooks.extend(additional);

        self.hooks = Some(HookRegistry::new(hooks));
        self
    }

    /// Build the runtime and spawn its worker
    pub async fn build(self) -> Result<Armoury> {
        let items = self.items.ok_or(RuntimeError::MissingPort("an item store"))?;
        let actors = self.actors.ok_or(RuntimeError::MissingPort("an actor store"))?;

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let services = Services::new(
            items,
            actors,
            self.prompter.unwrap_or_else(|| Arc::new(FixedAnswer(false))),
            self.notifier.unwrap_or_else(|| Arc::new(TracingNotifier)),
            self.localizer.unwrap_or_else(|| Arc::new(Catalog::english())),
            self.random.unwrap_or_else(|| Box::new(ThreadRandom)),
            self.config.armoury,
            event_bus.clone(),
        );

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let handle = ArmouryHandle::new(command_tx, event_bus);

        let hooks = self.hooks.unwrap_or_default();
        let worker = DispatchWorker::new(Arc::new(services), hooks, command_rx);

        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Armoury {
            handle,
            worker_handle,
        })
    }
}
