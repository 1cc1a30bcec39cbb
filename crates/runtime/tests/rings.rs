//! Magic rings: creation defaults, renaming, worn state and casting.

mod common;

use armoury_core::ring::{RING_ICON, effect_uuid};
use armoury_core::{
    Actor, ActorKind, ArmouryConfig, Availability, Item, ItemKind, NameChangePolicy, RingCastTest,
    RingData, RingSettings, ScriptedRandom, SpellRef,
};
use armoury_runtime::{
    InMemoryHost, ItemChange, ItemEvent, NotificationKind, RingRename, RuntimeError,
};
use common::{Harness, fixture_host, single_rename, start, start_with};

const DART: &str = "Compendium.wfrp4e-core.spells.Item.dart";
const FIREBALL: &str = "Compendium.wfrp4e-core.spells.Item.fireball";

fn spell_linked(actor: &str, item: &str, spell: &str, skip_ask: bool) -> ItemEvent {
    ItemEvent::Updated {
        actor: actor.into(),
        item: item.into(),
        change: ItemChange {
            spell: Some(SpellRef::from(spell)),
        },
        skip_ask,
    }
}

fn plain_ring(id: &str, data: RingData) -> Item {
    let mut ring = Item::new(id, "Plain Ring", ItemKind::Ring(data));
    ring.description = "A plain silver band.".into();
    ring
}

async fn with_policy(policy: NameChangePolicy) -> Harness {
    let config = ArmouryConfig::with_rings(RingSettings {
        update_name: policy,
        ..RingSettings::default()
    });
    let host = fixture_host();
    host.insert_actor(
        Actor::new("mage", "Mage", ActorKind::Character)
            .with_item(plain_ring("band", RingData::with_spell(DART))),
    )
    .expect("actor stored");
    start_with(host, ScriptedRandom::default(), config).await
}

fn stored_band(harness: &Harness) -> Item {
    harness.host.item(&"mage".into(), &"band".into()).expect("ring kept")
}

#[tokio::test]
async fn asks_before_renaming() {
    let harness = with_policy(NameChangePolicy::Ask).await;
    harness.host.script_answers([true]);

    let rename = single_rename(
        harness
            .handle
            .dispatch(spell_linked("mage", "band", DART, false))
            .await
            .expect("rename should succeed"),
    );
    assert_eq!(
        rename,
        RingRename::Renamed {
            name: "Ring of Dart".into(),
        }
    );

    let prompts = harness.host.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].0, "Change Ring Name");
    assert!(prompts[0].1.starts_with("Do you want to change the ring's name to \"Ring of Dart\"?"));

    let ring = stored_band(&harness);
    assert_eq!(ring.name, "Ring of Dart");
    assert_eq!(ring.description, "You fling a small dart of magic at a target.");
}

#[tokio::test]
async fn declined_prompt_keeps_the_name() {
    let harness = with_policy(NameChangePolicy::Ask).await;

    let rename = single_rename(
        harness
            .handle
            .dispatch(spell_linked("mage", "band", DART, false))
            .await
            .expect("rename should succeed"),
    );
    assert_eq!(rename, RingRename::Declined);
    assert_eq!(harness.host.prompts().len(), 1);

    let ring = stored_band(&harness);
    assert_eq!(ring.name, "Plain Ring");
    assert_eq!(ring.description, "A plain silver band.");
}

#[tokio::test]
async fn always_renames_without_asking() {
    let harness = with_policy(NameChangePolicy::Always).await;

    let rename = single_rename(
        harness
            .handle
            .dispatch(spell_linked("mage", "band", FIREBALL, false))
            .await
            .expect("rename should succeed"),
    );
    assert_eq!(
        rename,
        RingRename::Renamed {
            name: "Ring of Fireball".into(),
        }
    );
    assert!(harness.host.prompts().is_empty());
    assert_eq!(stored_band(&harness).name, "Ring of Fireball");
}

#[tokio::test]
async fn never_policy_skips_unless_told_not_to_ask() {
    let harness = with_policy(NameChangePolicy::Never).await;

    let rename = single_rename(
        harness
            .handle
            .dispatch(spell_linked("mage", "band", DART, false))
            .await
            .expect("dispatch should succeed"),
    );
    assert_eq!(rename, RingRename::Skipped);
    assert_eq!(stored_band(&harness).name, "Plain Ring");

    let rename = single_rename(
        harness
            .handle
            .dispatch(spell_linked("mage", "band", DART, true))
            .await
            .expect("rename should succeed"),
    );
    assert_eq!(
        rename,
        RingRename::Renamed {
            name: "Ring of Dart".into(),
        }
    );
    assert!(harness.host.prompts().is_empty());
    assert_eq!(stored_band(&harness).description, "You fling a small dart of magic at a target.");
}

#[tokio::test]
async fn unknown_spell_is_reported_without_failing_dispatch() {
    let harness = with_policy(NameChangePolicy::Always).await;

    let results = harness
        .handle
        .dispatch(spell_linked("mage", "band", "Compendium.missing", false))
        .await
        .expect("rename failures are not fatal");
    assert!(results.is_empty());
    assert_eq!(stored_band(&harness).name, "Plain Ring");
}

#[tokio::test]
async fn toggles_worn_state() {
    let harness = with_policy(NameChangePolicy::Never).await;

    assert!(harness.handle.toggle_ring("mage".into(), "band".into()).await.expect("toggle"));
    assert!(stored_band(&harness).is_equipped());
    assert!(!harness.handle.toggle_ring("mage".into(), "band".into()).await.expect("toggle"));
    assert!(!stored_band(&harness).is_equipped());

    let err = harness
        .handle
        .toggle_ring("gunther".into(), "sword".into())
        .await
        .expect_err("a sword is not a ring");
    assert!(matches!(err, RuntimeError::Ring(_)));
}

#[tokio::test]
async fn prepares_a_cast_from_a_worn_ring() {
    let host = fixture_host();
    host.insert_actor(Actor::new("mage", "Mage", ActorKind::Character).with_item(plain_ring(
        "band",
        RingData {
            worn: true,
            ..RingData::with_spell(FIREBALL)
        },
    )))
    .expect("actor stored");
    let harness = start(host).await;

    let test = harness
        .handle
        .prepare_ring_test("mage".into(), "band".into())
        .await
        .expect("ring test should prepare")
        .expect("a worn ring can be used");

    assert_eq!(test.spell.name, "Fireball");
    assert_eq!(test.spell.cn, 0);
    assert!(test.spell.memorized);
    assert!(test.hit_location);
    assert_eq!(test.roll, RingCastTest::UNROLLED);
    assert_eq!(test.sl_label(), "+0");

    let spell = SpellRef::from(FIREBALL);
    assert_eq!(test.damage_effects.len(), 1);
    assert_eq!(test.damage_effects[0].uuid, effect_uuid(&spell, &"ablaze".into()));
    assert!(test.target_effects.is_empty());
    assert_eq!(test.area_effects[0].name, "Smoke");
}

#[tokio::test]
async fn unworn_ring_warns_instead_of_casting() {
    let harness = with_policy(NameChangePolicy::Never).await;

    let test = harness
        .handle
        .prepare_ring_test("mage".into(), "band".into())
        .await
        .expect("ring test should not fail");
    assert!(test.is_none());

    let warnings = harness.notes.of_kind(NotificationKind::Warning);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].text, "Mage can't use Plain Ring. The ring has to be worn first.");
}

#[tokio::test]
async fn ring_test_without_actor_is_a_no_op() {
    let harness = start(InMemoryHost::new()).await;

    let test = harness
        .handle
        .prepare_ring_test("nobody".into(), "band".into())
        .await
        .expect("missing actor is not an error");
    assert!(test.is_none());
    assert!(harness.notes.notifications().is_empty());
}

#[tokio::test]
async fn new_rings_get_creation_defaults() {
    let host = fixture_host();
    let harness = start(host).await;

    let mut copy = Item::new("r2", "Ring (2)", ItemKind::Ring(RingData::default()));
    copy.img = Some("icons/svg/item-bag.svg".into());

    let npc_ring = harness
        .handle
        .prepare_ring(Some("bandit".into()), copy.clone())
        .await
        .expect("ring prepared");
    assert_eq!(npc_ring.name, "New Ring (2)");
    assert_eq!(npc_ring.img.as_deref(), Some(RING_ICON));
    let data = npc_ring.ring().expect("still a ring");
    assert!(data.worn);
    assert_eq!(data.encumbrance, Some(0));
    assert_eq!(data.availability, Some(Availability::Exotic));

    let pc_ring = harness
        .handle
        .prepare_ring(Some("gunther".into()), copy.clone())
        .await
        .expect("ring prepared");
    assert!(!pc_ring.is_equipped());

    let world_ring = harness.handle.prepare_ring(None, copy).await.expect("ring prepared");
    assert!(!world_ring.is_equipped());
}

#[tokio::test]
async fn lists_ring_properties() {
    let harness = start(fixture_host()).await;

    let properties = harness
        .handle
        .ring_properties("gunther".into(), "ring".into())
        .await
        .expect("properties");
    assert_eq!(properties, ["Dart", "Magic Missile"]);
}
