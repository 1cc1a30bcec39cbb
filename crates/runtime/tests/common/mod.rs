#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use armoury_content::ContentFactory;
use armoury_core::{ActiveEffect, ActorId, ArmouryConfig, RandomSource, ScriptedRandom};
use armoury_runtime::{
    Armoury, ArmouryHandle, EffectChange, EffectEvent, EffectOwner, HookOutcome, HookResult,
    InMemoryHost, RecordingNotifier, RingRename, RuneRemoval,
};

/// Running runtime plus the host it talks to.
pub struct Harness {
    pub armoury: Armoury,
    pub handle: ArmouryHandle,
    pub host: Arc<InMemoryHost>,
    pub notes: Arc<RecordingNotifier>,
}

pub async fn start(host: InMemoryHost) -> Harness {
    start_with(host, ScriptedRandom::default(), ArmouryConfig::default()).await
}

pub async fn start_with(
    host: InMemoryHost,
    random: impl RandomSource + 'static,
    config: ArmouryConfig,
) -> Harness {
    let host = Arc::new(host);
    let notes = Arc::new(RecordingNotifier::new());

    let armoury = Armoury::builder()
        .armoury_config(config)
        .host(host.clone())
        .notifier(notes.clone())
        .random(random)
        .build()
        .await
        .expect("runtime should build");
    let handle = armoury.handle();

    Harness {
        armoury,
        handle,
        host,
        notes,
    }
}

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../armoury/content/data")
}

/// Host seeded from the bundled actor and spell fixtures.
pub fn fixture_host() -> InMemoryHost {
    let factory = ContentFactory::new(data_dir());
    InMemoryHost::new()
        .with_actors(factory.load_actors().expect("actor fixtures should load"))
        .with_spells(factory.load_spells().expect("spell fixtures should load"))
}

pub fn rune(id: &str, origin: &str) -> ActiveEffect {
    ActiveEffect::new(id, "Rune of Fury (Temporary)").with_origin(origin)
}

pub fn disabled(actor: &str, effect: ActiveEffect) -> EffectEvent {
    EffectEvent::Updated {
        owner: EffectOwner::Actor(ActorId::from(actor)),
        effect,
        change: EffectChange::disabled(),
    }
}

pub fn deleted(actor: &str, effect: ActiveEffect) -> EffectEvent {
    EffectEvent::Deleted {
        owner: EffectOwner::Actor(ActorId::from(actor)),
        effect,
    }
}

pub fn single_removal(results: Vec<HookResult>) -> RuneRemoval {
    assert_eq!(results.len(), 1, "exactly one hook should react: {results:?}");
    match results.into_iter().next().map(|r| r.outcome) {
        Some(HookOutcome::RuneExpired(removal)) => removal,
        other => panic!("expected a rune removal, got {other:?}"),
    }
}

pub fn single_rename(results: Vec<HookResult>) -> RingRename {
    assert_eq!(results.len(), 1, "exactly one hook should react: {results:?}");
    match results.into_iter().next().map(|r| r.outcome) {
        Some(HookOutcome::RingRename(rename)) => rename,
        other => panic!("expected a ring rename, got {other:?}"),
    }
}
