//! Integration tests for pickups, monster contact and the weapon.

use bevy::prelude::*;
use haunt::{
    GameOutcome, Inventory, Monster, MonsterTemper, NearestGhostRegistry, PickupKind,
    PlayerActions, PlayerInput,
};
use rstest::{fixture, rstest};
use test_utils::{
    headless_app, seeded_config, spawn_test_monster, spawn_test_pickup, spawn_test_player, tick,
};

struct Scene {
    app: App,
    player: Entity,
}

impl Scene {
    fn inventory(&self) -> Inventory {
        self.app
            .world()
            .get::<Inventory>(self.player)
            .cloned()
            .unwrap_or_default()
    }

    fn outcome(&self) -> GameOutcome {
        *self.app.world().resource::<GameOutcome>()
    }

    fn monsters(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&Monster>().iter(world).count()
    }

    fn press(&mut self, toggle_equip: bool, attack: bool) {
        *self.app.world_mut().resource_mut::<PlayerActions>() = PlayerActions {
            toggle_equip,
            attack,
        };
    }
}

#[fixture]
fn scene() -> Scene {
    let mut app = headless_app(seeded_config(11));
    let player = spawn_test_player(&mut app, Vec3::ZERO);
    Scene { app, player }
}

#[rstest]
fn pickups_in_reach_are_collected(mut scene: Scene) {
    spawn_test_pickup(&mut scene.app, PickupKind::Candy, Vec3::new(0.5, 0.0, 0.0));
    spawn_test_pickup(&mut scene.app, PickupKind::Weapon, Vec3::new(0.0, 0.0, 6.0));
    tick(&mut scene.app, 1);

    let inventory = scene.inventory();
    assert!(inventory.holding_candy());
    assert!(!inventory.has_weapon());
}

#[rstest]
fn candy_for_the_friendly_monster_wins(mut scene: Scene) {
    spawn_test_pickup(&mut scene.app, PickupKind::Candy, Vec3::ZERO);
    spawn_test_monster(&mut scene.app, MonsterTemper::Friendly, Vec3::new(3.0, 0.0, 0.0));
    tick(&mut scene.app, 10);
    assert_eq!(scene.outcome(), GameOutcome::Won);
}

#[rstest]
#[case::friendly_without_candy(MonsterTemper::Friendly)]
#[case::dangerous(MonsterTemper::Dangerous)]
fn touching_a_monster_kills(mut scene: Scene, #[case] temper: MonsterTemper) {
    spawn_test_monster(&mut scene.app, temper, Vec3::new(3.0, 0.0, 0.0));
    tick(&mut scene.app, 10);
    assert_eq!(scene.outcome(), GameOutcome::Died);
}

#[rstest]
fn weapon_destroys_dangerous_monster(mut scene: Scene) {
    spawn_test_pickup(&mut scene.app, PickupKind::Weapon, Vec3::ZERO);
    spawn_test_monster(&mut scene.app, MonsterTemper::Dangerous, Vec3::new(5.0, 0.0, 0.0));
    tick(&mut scene.app, 1);
    assert!(scene
        .app
        .world()
        .resource::<NearestGhostRegistry>()
        .held()
        .is_some());

    scene.press(true, true);
    tick(&mut scene.app, 1);

    assert_eq!(scene.monsters(), 0);
    assert_eq!(scene.inventory().weapon_uses(), 19);
    assert!(scene.inventory().weapon_equipped());
    assert_eq!(
        scene.app.world().resource::<NearestGhostRegistry>().held(),
        None
    );
    tick(&mut scene.app, 5);
    assert_eq!(scene.outcome(), GameOutcome::Playing);
}

#[rstest]
fn holstered_weapon_does_not_swing(mut scene: Scene) {
    spawn_test_pickup(&mut scene.app, PickupKind::Weapon, Vec3::ZERO);
    spawn_test_monster(&mut scene.app, MonsterTemper::Dangerous, Vec3::new(6.0, 0.0, 0.0));
    tick(&mut scene.app, 1);

    scene.press(false, true);
    tick(&mut scene.app, 1);

    assert_eq!(scene.monsters(), 1);
    assert_eq!(scene.inventory().weapon_uses(), 20);
}

#[rstest]
fn striking_the_friendly_monster_kills(mut scene: Scene) {
    spawn_test_pickup(&mut scene.app, PickupKind::Weapon, Vec3::ZERO);
    spawn_test_monster(&mut scene.app, MonsterTemper::Friendly, Vec3::new(5.0, 0.0, 0.0));
    tick(&mut scene.app, 1);

    scene.press(true, true);
    tick(&mut scene.app, 1);

    assert_eq!(scene.outcome(), GameOutcome::Died);
    assert_eq!(scene.monsters(), 1);
}

#[rstest]
fn gameplay_freezes_once_settled(mut scene: Scene) {
    spawn_test_monster(&mut scene.app, MonsterTemper::Dangerous, Vec3::new(2.0, 0.0, 0.0));
    tick(&mut scene.app, 5);
    assert_eq!(scene.outcome(), GameOutcome::Died);

    scene.app.world_mut().resource_mut::<PlayerInput>().movement = Vec2::Y;
    tick(&mut scene.app, 5);
    let position = scene
        .app
        .world()
        .get::<Transform>(scene.player)
        .map(|transform| transform.translation);
    assert_eq!(position, Some(Vec3::ZERO));
}
