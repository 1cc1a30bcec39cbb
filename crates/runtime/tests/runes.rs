//! Temporary runes expiring through dispatched effect events.

mod common;

use armoury_core::{
    ActiveEffect, Actor, ActorKind, ArmouryConfig, DegradationOutcome, HitLocation, Item, ItemKind,
    LocationProtection, ScriptedRandom,
};
use armoury_runtime::{
    EffectChange, EffectEvent, EffectOwner, Event, HookOutcome, InMemoryHost, ItemEvent,
    NotificationKind, RuntimeError, StoreError, Topic,
};
use common::{deleted, disabled, rune, single_removal, start, start_with};

fn weapon_damage(item: &Item) -> u32 {
    match &item.kind {
        ItemKind::Weapon(data) => data.damage_to_item,
        other => panic!("not a weapon: {other:?}"),
    }
}

fn armoury_host(items: impl IntoIterator<Item = Item>) -> InMemoryHost {
    runed_host(items, [])
}

/// Anna owning `items` and carrying `effects`.
fn runed_host(
    items: impl IntoIterator<Item = Item>,
    effects: impl IntoIterator<Item = ActiveEffect>,
) -> InMemoryHost {
    let mut actor = Actor::new("anna", "Anna", ActorKind::Character);
    for item in items {
        actor = actor.with_item(item);
    }
    for effect in effects {
        actor = actor.with_effect(effect);
    }
    InMemoryHost::new().with_actors([actor])
}

#[tokio::test]
async fn weapon_reaches_capacity_exactly_once() {
    let effect = rune("fury", "Actor.anna.Item.dagger");
    let dagger = Item::weapon("dagger", "Dagger", "+SB+2").with_effect(effect.clone());
    let anna = Actor::new("anna", "Anna", ActorKind::Character)
        .with_item(dagger)
        .with_effect(effect.clone());
    let harness = start(InMemoryHost::new().with_actors([anna])).await;

    let mut outcomes = Vec::new();
    for _ in 0..4 {
        harness
            .host
            .grant_rune(&"anna".into(), &effect)
            .expect("rune applied");
        let results = harness
            .handle
            .dispatch(disabled("anna", effect.clone()))
            .await
            .expect("rune expiry should succeed");
        outcomes.push(single_removal(results).outcome);
    }

    assert_eq!(
        outcomes,
        [
            DegradationOutcome::WeaponDamaged {
                damage: 1,
                max: 2,
                ruined: false,
            },
            DegradationOutcome::WeaponDamaged {
                damage: 2,
                max: 2,
                ruined: true,
            },
            DegradationOutcome::WeaponAlreadyRuined,
            DegradationOutcome::WeaponAlreadyRuined,
        ]
    );
    assert_eq!(outcomes.iter().filter(|o| o.ruined_now()).count(), 1);

    let stored = harness.host.item(&"anna".into(), &"dagger".into()).expect("dagger kept");
    assert_eq!(weapon_damage(&stored), 2);
    assert_eq!(stored.name, "Dagger (damaged)");
    assert!(!stored.is_equipped());
    assert!(stored.effects.is_empty());

    let actor = harness.host.actor(&"anna".into()).expect("actor kept");
    assert!(actor.effect(&"fury".into()).is_none());

    let infos = harness.notes.of_kind(NotificationKind::Info);
    assert_eq!(infos.len(), 4);
    assert!(infos.iter().all(|n| n.permanent));
    assert_eq!(
        infos[0].text,
        "Removed \"Rune of Fury (Temporary)\" effect from Actor \"Anna\" and Item \"Dagger\". \
         It was Temporary Rune that got disabled. Weapon received 1 Damage."
    );
    assert!(infos[2].text.ends_with("Weapon is already ruined and can't be damaged more."));
}

#[tokio::test]
async fn disable_then_delete_damages_once() {
    let effect = rune("fury", "Actor.anna.Item.sword");
    let sword = Item::weapon("sword", "Sword", "+SB+4").with_effect(effect.clone());
    let harness = start(runed_host([sword], [effect.clone()])).await;

    let removal = single_removal(
        harness
            .handle
            .dispatch(disabled("anna", effect.clone()))
            .await
            .expect("rune expiry should succeed"),
    );
    assert_eq!(
        removal.outcome,
        DegradationOutcome::WeaponDamaged {
            damage: 1,
            max: 4,
            ruined: false,
        }
    );

    // The host reports the deletion the expiry caused, then redelivers the
    // original update.
    for event in [deleted("anna", effect.clone()), disabled("anna", effect)] {
        let results = harness
            .handle
            .dispatch(event)
            .await
            .expect("spent rune should not fail");
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].outcome,
            HookOutcome::RuneAlreadySpent {
                actor: "anna".into(),
                effect: "fury".into(),
            }
        );
    }

    let stored = harness
        .host
        .item(&"anna".into(), &"sword".into())
        .expect("sword kept");
    assert_eq!(weapon_damage(&stored), 1);
    assert_eq!(harness.notes.of_kind(NotificationKind::Info).len(), 1);
}

#[tokio::test]
async fn armour_damages_a_random_eligible_location() {
    let effect = rune("warding", "Actor.anna.Item.jack");
    let jack = Item::armour(
        "jack",
        "Leather Jack",
        [
            (HitLocation::Head, LocationProtection::new(1, 0)),
            (HitLocation::LeftArm, LocationProtection::new(0, 0)),
            (HitLocation::Body, LocationProtection::new(2, 0)),
        ],
    )
    .with_effect(effect.clone());
    let harness = start_with(
        armoury_host([jack]),
        ScriptedRandom::new([1]),
        ArmouryConfig::default(),
    )
    .await;

    let removal = single_removal(
        harness
            .handle
            .dispatch(deleted("anna", effect))
            .await
            .expect("rune expiry should succeed"),
    );

    assert_eq!(
        removal.outcome,
        DegradationOutcome::ArmourDamaged {
            location: HitLocation::Body,
            damage: 1,
            capacity: 2,
        }
    );
    assert!(removal.summary.ends_with("Armour received 1 Damage on Body."));

    let stored = harness.host.item(&"anna".into(), &"jack".into()).expect("jack kept");
    let ItemKind::Armour(armour) = &stored.kind else {
        panic!("jack should stay armour");
    };
    assert_eq!(armour.locations[&HitLocation::Body].damage, 1);
    assert_eq!(armour.locations[&HitLocation::Head].damage, 0);
    assert_eq!(armour.locations[&HitLocation::LeftArm].damage, 0);
}

#[tokio::test]
async fn saturated_armour_is_left_alone() {
    let effect = rune("warding", "Actor.anna.Item.jack");
    let jack = Item::armour(
        "jack",
        "Leather Jack",
        [(HitLocation::Body, LocationProtection::new(1, 1))],
    );
    let harness = start(runed_host([jack.clone()], [effect.clone()])).await;

    let removal = single_removal(
        harness
            .handle
            .dispatch(disabled("anna", effect))
            .await
            .expect("rune expiry should succeed"),
    );

    assert_eq!(removal.outcome, DegradationOutcome::ArmourSaturated);
    assert!(removal.summary.ends_with("Armour couldn't be damaged more."));
    assert_eq!(harness.host.item(&"anna".into(), &"jack".into()), Some(jack));
}

#[tokio::test]
async fn trapping_without_durability_breaks_on_first_hit() {
    let effect = rune("knot", "Actor.anna.Item.rope");
    let rope = Item::trapping("rope", "Rope")
        .with_equipped(true)
        .with_effect(effect.clone());
    let harness = start(armoury_host([rope])).await;

    let first = single_removal(
        harness
            .handle
            .dispatch(deleted("anna", effect.clone()))
            .await
            .expect("rune expiry should succeed"),
    );
    assert_eq!(first.outcome, DegradationOutcome::ItemBroken { unequipped: true });
    assert!(first.summary.ends_with("Item got Damaged and got unequipped because of it."));

    let stored = harness.host.item(&"anna".into(), &"rope".into()).expect("rope kept");
    assert_eq!(stored.name, "Rope (damaged)");
    assert!(!stored.is_equipped());

    harness
        .host
        .grant_rune(&"anna".into(), &effect)
        .expect("rune applied");
    let second = single_removal(
        harness
            .handle
            .dispatch(deleted("anna", effect))
            .await
            .expect("rune expiry should succeed"),
    );
    assert_eq!(second.outcome, DegradationOutcome::ItemAlreadyRuined);
    assert_eq!(
        harness.host.item(&"anna".into(), &"rope".into()).expect("rope kept").name,
        "Rope (damaged)"
    );
}

#[tokio::test]
async fn world_item_origin_is_persisted_in_the_world() {
    let effect = rune("glow", "Item.lantern");
    let lantern = Item::trapping("lantern", "Lantern")
        .with_durable(1)
        .with_effect(effect.clone());
    let harness = start(armoury_host([]).with_world_item(lantern)).await;

    let removal = single_removal(
        harness
            .handle
            .dispatch(deleted("anna", effect))
            .await
            .expect("rune expiry should succeed"),
    );

    assert_eq!(
        removal.outcome,
        DegradationOutcome::ItemDamaged {
            damage: 1,
            max: 1,
            ruined: true,
            unequipped: false,
        }
    );
    let stored = harness.host.world_item(&"lantern".into()).expect("lantern kept");
    assert_eq!(stored.name, "Lantern (damaged)");
    assert!(stored.effects.is_empty());
}

#[tokio::test]
async fn missing_item_fails_with_partial_summary() {
    let effect = rune("fury", "Actor.anna.Item.ghost");
    let anna = Actor::new("anna", "Anna", ActorKind::Character).with_effect(effect.clone());
    let harness = start(InMemoryHost::new().with_actors([anna])).await;

    let err = harness
        .handle
        .dispatch(disabled("anna", effect))
        .await
        .expect_err("missing item should fail");

    let RuntimeError::ItemNotFound { item, partial_summary } = err else {
        panic!("expected ItemNotFound, got {err:?}");
    };
    assert_eq!(item, "Actor.anna.Item.ghost");
    assert_eq!(
        partial_summary,
        "Removed \"Rune of Fury (Temporary)\" effect from Actor \"Anna\"."
    );

    // The actor's effect is gone even though the item was not found.
    let actor = harness.host.actor(&"anna".into()).expect("actor kept");
    assert!(actor.effects.is_empty());

    let warnings = harness.notes.of_kind(NotificationKind::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].text.starts_with(&partial_summary));
    assert!(harness.notes.of_kind(NotificationKind::Info).is_empty());
}

#[tokio::test]
async fn item_without_linked_effect_still_takes_damage() {
    let effect = rune("fury", "Actor.anna.Item.sword");
    let sword = Item::weapon("sword", "Sword", "+SB+4");
    let harness = start(runed_host([sword], [effect.clone()])).await;

    let removal = single_removal(
        harness
            .handle
            .dispatch(disabled("anna", effect))
            .await
            .expect("rune expiry should succeed"),
    );

    assert_eq!(
        removal.outcome,
        DegradationOutcome::WeaponDamaged {
            damage: 1,
            max: 4,
            ruined: false,
        }
    );
}

#[tokio::test]
async fn rejected_update_leaves_item_unchanged() {
    let effect = rune("fury", "Actor.anna.Item.sword");
    let sword = Item::weapon("sword", "Sword", "+SB+1").with_effect(effect.clone());
    let harness = start(runed_host([sword], [effect.clone()])).await;
    harness.host.reject_updates(true);

    let err = harness
        .handle
        .dispatch(disabled("anna", effect))
        .await
        .expect_err("persistence failure should surface");
    assert!(matches!(err, RuntimeError::Persistence(StoreError::Rejected(_))));

    let stored = harness.host.item(&"anna".into(), &"sword".into()).expect("sword kept");
    assert_eq!(weapon_damage(&stored), 0);
    assert_eq!(stored.name, "Sword");
    assert!(stored.is_equipped());
    assert_eq!(stored.effects.len(), 1, "the item keeps its rune");
}

#[tokio::test]
async fn ignores_effects_that_are_not_expiring_runes() {
    let harness = start(armoury_host([Item::weapon("sword", "Sword", "+SB+4")])).await;
    let blessing =
        ActiveEffect::new("bless", "Blessing of Sigmar").with_origin("Actor.anna.Item.sword");
    let fury = rune("fury", "Actor.anna.Item.sword");

    let events = [
        disabled("anna", blessing),
        // Re-enabled rather than disabled.
        EffectEvent::Updated {
            owner: EffectOwner::Actor("anna".into()),
            effect: fury.clone(),
            change: EffectChange {
                disabled: Some(false),
            },
        },
        // Owned by an item, not an actor.
        EffectEvent::Deleted {
            owner: EffectOwner::Item("Actor.anna.Item.sword".parse().expect("valid path")),
            effect: fury.clone(),
        },
        // Deleted without a parseable origin.
        deleted("anna", ActiveEffect::new("x", "Rune of Fury (Temporary)")),
    ];

    for event in events {
        let results = harness.handle.dispatch(event).await.expect("dispatch should succeed");
        assert!(results.is_empty(), "no hook should react: {results:?}");
    }
    let stored = harness.host.item(&"anna".into(), &"sword".into()).expect("sword kept");
    assert_eq!(weapon_damage(&stored), 0);
}

#[tokio::test]
async fn degradation_is_published_on_the_items_topic() {
    let effect = rune("fury", "Actor.anna.Item.sword");
    let sword = Item::weapon("sword", "Sword", "+SB+4").with_effect(effect.clone());
    let harness = start(armoury_host([sword])).await;
    let mut items = harness.handle.subscribe(Topic::Items).expect("subscription");

    harness
        .handle
        .dispatch(deleted("anna", effect))
        .await
        .expect("rune expiry should succeed");

    match items.recv().await.expect("degradation event") {
        Event::Item(ItemEvent::Degraded { actor, item, outcome }) => {
            assert_eq!(actor.as_str(), "anna");
            assert_eq!(item.as_str(), "sword");
            assert!(outcome.is_mutation());
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn fixture_runes_damage_their_items() {
    let harness = start(common::fixture_host()).await;
    let gunther = harness.host.actor(&"gunther".into()).expect("fixture actor");
    let fury = gunther.effect(&"fury".into()).expect("fixture rune").clone();

    let removal = single_removal(
        harness
            .handle
            .dispatch(disabled("gunther", fury))
            .await
            .expect("rune expiry should succeed"),
    );
    assert_eq!(
        removal.outcome,
        DegradationOutcome::WeaponDamaged {
            damage: 3,
            max: 4,
            ruined: false,
        }
    );

    let bandit = harness.host.actor(&"bandit".into()).expect("fixture actor");
    let spite = bandit.effect(&"spite".into()).expect("fixture rune").clone();
    let removal = single_removal(
        harness
            .handle
            .dispatch(disabled("bandit", spite))
            .await
            .expect("rune expiry should succeed"),
    );
    assert!(removal.outcome.ruined_now());
    let club = harness.host.item(&"bandit".into(), &"club".into()).expect("club kept");
    assert_eq!(club.name, "Club (damaged)");
    assert!(club.effects.is_empty());

    drop(harness.handle);
    harness.armoury.shutdown().await.expect("runtime should stop");
}
