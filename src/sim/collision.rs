//! Collision detection and response
//!
//! Everything collides as circles. Two passes run each tick, bullets against
//! enemies and then enemies against the player, both scanning enemies in
//! insertion order so simultaneous overlaps resolve the same way every run.

use glam::Vec2;

use super::particles::{Burst, BurstKind};
use super::state::{BulletOwner, GameEvent, GamePhase, GameState};
use crate::distance_sq;

/// Boundary-inclusive circle overlap: touching counts as a hit
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    distance_sq(a, b) <= reach * reach
}

/// Bullet vs enemy pass.
///
/// Each live player bullet damages at most one enemy (the first overlapping
/// one in insertion order) and is consumed. Bursts for hits and kills are
/// appended to `bursts`.
pub fn resolve_bullets_vs_enemies(state: &mut GameState, bursts: &mut Vec<Burst>) {
    let reward = state.tuning.kill_reward;
    let mut kills = 0u64;
    let mut events = Vec::new();

    for bullet in state.bullets.iter_mut() {
        if !bullet.alive || bullet.owner != BulletOwner::Player {
            continue;
        }
        let Some(enemy) = state
            .enemies
            .iter_mut()
            .filter(|e| e.alive)
            .find(|e| circles_overlap(bullet.pos, bullet.radius, e.pos, e.radius))
        else {
            continue;
        };

        bullet.alive = false;
        enemy.hp = enemy.hp.saturating_sub(1);
        bursts.push(Burst::new(enemy.pos, BurstKind::Hit));
        events.push(GameEvent::EnemyHit { id: enemy.id });

        if enemy.hp == 0 {
            enemy.alive = false;
            kills += 1;
            bursts.push(Burst::new(enemy.pos, BurstKind::Death));
            events.push(GameEvent::EnemyKilled { id: enemy.id });
            log::trace!("Enemy {} destroyed at {:?}", enemy.id, enemy.pos);
        }
    }

    for event in events {
        state.push_event(event);
    }
    if kills > 0 {
        state.add_score(kills * reward);
    }
}

/// Enemy vs player pass.
///
/// The first live enemy (insertion order) touching the player is consumed and
/// the player takes one hit. At most one hit per tick. Returns true on a hit.
pub fn resolve_enemies_vs_player(state: &mut GameState, bursts: &mut Vec<Burst>) -> bool {
    let Some(player) = state.player.as_ref().filter(|p| p.alive) else {
        return false;
    };
    let (pos, radius) = (player.pos, player.radius);

    let Some(enemy) = state
        .enemies
        .iter_mut()
        .filter(|e| e.alive)
        .find(|e| circles_overlap(pos, radius, e.pos, e.radius))
    else {
        return false;
    };
    enemy.alive = false;

    player_hit(state, bursts);
    true
}

/// Player-hit procedure: damage burst, lose a life, then respawn or end the session.
///
/// The player is vulnerable again immediately after respawning.
pub fn player_hit(state: &mut GameState, bursts: &mut Vec<Burst>) {
    let Some(pos) = state.player.as_ref().map(|p| p.pos) else {
        return;
    };
    bursts.push(Burst::new(pos, BurstKind::PlayerHit));
    state.push_event(GameEvent::PlayerHit);

    let lives = state.lose_life();
    log::debug!("Player hit at {:?}, {} lives left", pos, lives);

    if lives == 0 {
        if let Some(player) = state.player.as_mut() {
            player.alive = false;
            player.vel = Vec2::ZERO;
        }
        bursts.push(Burst::new(pos, BurstKind::GameOver));
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver { score: state.score });
        log::info!("Game over - final score {}", state.score);
    } else {
        let start = state.tuning.player_start;
        if let Some(player) = state.player.as_mut() {
            player.pos = start;
            player.vel = Vec2::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy, EnemyPattern};

    fn running_state() -> GameState {
        let mut state = GameState::new(11);
        state.start_session();
        state.clear_events();
        state
    }

    fn add_enemy(state: &mut GameState, pos: Vec2, hp: u32) -> u32 {
        let id = state.next_entity_id();
        state.enemies.push(Enemy {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: 10.0,
            alive: true,
            hp,
            pattern: EnemyPattern::Direct,
            age: 0.0,
        });
        id
    }

    fn add_bullet(state: &mut GameState, pos: Vec2) {
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: 4.0,
            alive: true,
            owner: BulletOwner::Player,
        });
    }

    #[test]
    fn test_overlap_is_boundary_inclusive() {
        let a = Vec2::new(0.0, 0.0);
        assert!(circles_overlap(a, 4.0, Vec2::new(14.0, 0.0), 10.0));
        assert!(!circles_overlap(a, 4.0, Vec2::new(14.001, 0.0), 10.0));
        // 3-4-5 triangle scaled: exact distance 15 along a diagonal
        assert!(circles_overlap(a, 5.0, Vec2::new(9.0, 12.0), 10.0));
        assert!(!circles_overlap(a, 5.0, Vec2::new(9.0, 12.01), 10.0));
    }

    #[test]
    fn test_one_hp_enemy_dies_and_scores() {
        let mut state = running_state();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 1);
        add_bullet(&mut state, Vec2::new(100.0, 110.0));

        let mut bursts = Vec::new();
        resolve_bullets_vs_enemies(&mut state, &mut bursts);

        assert_eq!(state.score, 100);
        assert!(!state.enemies[0].alive);
        assert!(!state.bullets[0].alive);
        assert!(bursts.iter().any(|b| b.kind == BurstKind::Death));
        assert!(state.events().contains(&GameEvent::ScoreChanged(100)));
    }

    #[test]
    fn test_killing_hit_emits_hit_and_death_bursts() {
        let mut state = running_state();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 1);
        add_bullet(&mut state, Vec2::new(100.0, 100.0));

        let mut bursts = Vec::new();
        resolve_bullets_vs_enemies(&mut state, &mut bursts);

        let kinds: Vec<BurstKind> = bursts.iter().map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BurstKind::Hit, BurstKind::Death]);
    }

    #[test]
    fn test_two_hp_enemy_survives_one_hit() {
        let mut state = running_state();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 2);
        add_bullet(&mut state, Vec2::new(100.0, 100.0));

        let mut bursts = Vec::new();
        resolve_bullets_vs_enemies(&mut state, &mut bursts);
        assert!(state.enemies[0].alive);
        assert_eq!(state.enemies[0].hp, 1);
        assert_eq!(state.score, 0);
        assert_eq!(bursts, vec![Burst::new(Vec2::new(100.0, 100.0), BurstKind::Hit)]);

        state.cull_dead();
        add_bullet(&mut state, Vec2::new(100.0, 100.0));
        resolve_bullets_vs_enemies(&mut state, &mut bursts);
        assert!(!state.enemies[0].alive);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_bullet_damages_only_first_enemy() {
        let mut state = running_state();
        let first = add_enemy(&mut state, Vec2::new(100.0, 100.0), 1);
        add_enemy(&mut state, Vec2::new(102.0, 100.0), 1);
        add_bullet(&mut state, Vec2::new(101.0, 100.0));

        let mut bursts = Vec::new();
        resolve_bullets_vs_enemies(&mut state, &mut bursts);

        assert!(!state.enemies[0].alive);
        assert_eq!(state.enemies[0].id, first);
        assert!(state.enemies[1].alive);
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_enemy_fire_is_ignored() {
        let mut state = running_state();
        add_enemy(&mut state, Vec2::new(100.0, 100.0), 1);
        add_bullet(&mut state, Vec2::new(100.0, 100.0));
        state.bullets[0].owner = BulletOwner::Enemy;

        let mut bursts = Vec::new();
        resolve_bullets_vs_enemies(&mut state, &mut bursts);
        assert!(state.enemies[0].alive);
        assert!(state.bullets[0].alive);
    }

    #[test]
    fn test_player_hit_consumes_first_enemy_only() {
        let mut state = running_state();
        let player_pos = Vec2::new(200.0, 300.0);
        state.player.as_mut().unwrap().pos = player_pos;
        add_enemy(&mut state, player_pos, 1);
        add_enemy(&mut state, player_pos, 1);

        let mut bursts = Vec::new();
        assert!(resolve_enemies_vs_player(&mut state, &mut bursts));

        assert!(!state.enemies[0].alive);
        assert!(state.enemies[1].alive);
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Running);
        // Respawned at the start position
        assert_eq!(state.player.as_ref().unwrap().pos, state.tuning.player_start);
        assert_eq!(bursts.len(), 1);
        assert_eq!(bursts[0].origin, player_pos);
    }

    #[test]
    fn test_last_life_ends_session() {
        let mut state = running_state();
        state.lives = 1;
        let pos = state.player.as_ref().unwrap().pos;
        add_enemy(&mut state, pos, 1);

        let mut bursts = Vec::new();
        resolve_enemies_vs_player(&mut state, &mut bursts);

        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!state.player.as_ref().unwrap().alive);
        assert!(bursts.iter().any(|b| b.kind == BurstKind::GameOver));
        assert!(
            state
                .events()
                .contains(&GameEvent::GameOver { score: 0 })
        );
    }

    #[test]
    fn test_no_player_is_noop() {
        let mut state = GameState::new(1);
        add_enemy(&mut state, Vec2::ZERO, 1);
        let mut bursts = Vec::new();
        assert!(!resolve_enemies_vs_player(&mut state, &mut bursts));
        player_hit(&mut state, &mut bursts);
        assert!(bursts.is_empty());
        assert_eq!(state.lives, 3);
    }
}
