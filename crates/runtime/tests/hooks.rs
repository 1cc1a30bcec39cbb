//! Custom hooks registered next to the built-in ones.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use armoury_core::{Actor, ActorKind, Item};
use armoury_runtime::{
    Armoury, ArmouryHook, Event, HookContext, HookCriticality, HookOutcome, HookRegistry,
    InMemoryHost, InventoryEvent, Result, RingRename, RuntimeError,
};

/// Counts inventory requests and then fails with the configured criticality.
struct Failing {
    criticality: HookCriticality,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ArmouryHook for Failing {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn criticality(&self) -> HookCriticality {
        self.criticality
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        matches!(ctx.event, Event::Inventory(_))
    }

    async fn run(&self, _ctx: &HookContext<'_>) -> Result<HookOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RuntimeError::UnexpectedEvent { hook: self.name() })
    }
}

/// Always succeeds with a fixed outcome.
struct Quiet;

#[async_trait]
impl ArmouryHook for Quiet {
    fn name(&self) -> &'static str {
        "quiet"
    }

    fn priority(&self) -> i32 {
        50
    }

    fn should_trigger(&self, ctx: &HookContext<'_>) -> bool {
        matches!(ctx.event, Event::Inventory(_))
    }

    async fn run(&self, _ctx: &HookContext<'_>) -> Result<HookOutcome> {
        Ok(HookOutcome::RingRename(RingRename::Skipped))
    }
}

fn host() -> Arc<InMemoryHost> {
    Arc::new(InMemoryHost::new().with_actors([Actor::new("anna", "Anna", ActorKind::Character)
        .with_item(Item::weapon("sword", "Sword", "+SB+4"))]))
}

fn request() -> InventoryEvent {
    InventoryEvent::RepairReportRequested {
        actor: "anna".into(),
    }
}

#[test]
fn registry_orders_hooks_by_priority() {
    let calls = Arc::new(AtomicUsize::new(0));
    let registry = HookRegistry::new(vec![
        Arc::new(Quiet) as Arc<dyn ArmouryHook>,
        Arc::new(Failing {
            criticality: HookCriticality::Optional,
            calls,
        }),
    ]);
    let order: Vec<_> = registry.hooks().collect();
    assert_eq!(order, [("failing", -100), ("quiet", 50)]);

    let defaults: Vec<_> = HookRegistry::default_hooks().hooks().map(|(name, _)| name).collect();
    assert_eq!(defaults, ["temporary_rune", "ring_name", "repair_report"]);
}

#[tokio::test]
async fn optional_failures_do_not_stop_later_hooks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let armoury = Armoury::builder()
        .host(host())
        .add_hooks(vec![
            Arc::new(Failing {
                criticality: HookCriticality::Optional,
                calls: calls.clone(),
            }) as Arc<dyn ArmouryHook>,
            Arc::new(Quiet),
        ])
        .build()
        .await
        .expect("runtime should build");

    let results = armoury.handle().dispatch(request()).await.expect("dispatch");
    let names: Vec<_> = results.iter().map(|r| r.hook).collect();
    assert_eq!(names, ["repair_report", "quiet"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn critical_failures_abort_the_dispatch() {
    let calls = Arc::new(AtomicUsize::new(0));
    let armoury = Armoury::builder()
        .host(host())
        .with_hooks(HookRegistry::new(vec![Arc::new(Failing {
            criticality: HookCriticality::Critical,
            calls: calls.clone(),
        }) as Arc<dyn ArmouryHook>]))
        .build()
        .await
        .expect("runtime should build");

    let err = armoury
        .handle()
        .dispatch(request())
        .await
        .expect_err("critical hook failure should surface");
    assert!(matches!(err, RuntimeError::UnexpectedEvent { hook: "failing" }));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn builder_requires_store_ports() {
    let err = Armoury::builder()
        .build()
        .await
        .err()
        .expect("stores are required");
    assert!(matches!(err, RuntimeError::MissingPort(_)));
}
