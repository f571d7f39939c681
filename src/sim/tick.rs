//! Per-frame simulation tick
//!
//! Advances the game by one frame. Sub-steps run in a fixed order and later
//! steps see the results of earlier ones within the same tick.

use glam::Vec2;
use rand::Rng;

use super::collision::{slide_move, within};
use super::input::{HeldKeys, InputTracker};
use super::state::{GamePhase, GameState, SpiderState};
use crate::consts::{MAX_FRAME_MS, NOMINAL_FRAME_MS};

/// Advance the game state by one frame of `elapsed_ms` real time
pub fn tick(state: &mut GameState, input: &InputTracker, elapsed_ms: f64) {
    // Simulation halts once lives run out
    if state.phase == GamePhase::GameOver {
        return;
    }

    let elapsed_ms = if elapsed_ms.is_finite() {
        elapsed_ms.max(0.0)
    } else {
        0.0
    };
    // Timers follow real elapsed time; only movement is clamped
    state.time_ms += elapsed_ms;
    state.time_ticks += 1;

    // Speeds are per nominal frame; scale to the real frame length
    let frame_scale = (elapsed_ms.min(MAX_FRAME_MS) / NOMINAL_FRAME_MS) as f32;

    move_character(state, input.held(), frame_scale);
    refill_arrows(state);
    advance_arrows(state);
    prune_arrows(state);
    spawn_spiders(state);
    update_spiders(state, frame_scale);
    resolve_arrow_hits(state);
}

/// Held keys to a wall-sliding move
fn move_character(state: &mut GameState, held: HeldKeys, frame_scale: f32) {
    let (dx, dy) = held.axis();
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    let character = &mut state.character;
    let delta = Vec2::new(dx, dy) * character.speed * frame_scale;
    let (pos, _) = slide_move(&state.maze, character.pos, delta);
    character.pos = pos;
}

fn refill_arrows(state: &mut GameState) {
    let interval = state.tuning.refill_interval_ms;
    if state.character.refill(state.time_ms, interval) {
        log::trace!("Arrow refilled ({})", state.character.arrow_count);
    }
}

fn advance_arrows(state: &mut GameState) {
    for arrow in &mut state.character.arrows {
        arrow.advance();
    }
}

/// Drop arrows that left the grid or flew into a wall
fn prune_arrows(state: &mut GameState) {
    let maze = &state.maze;
    state
        .character
        .arrows
        .retain(|arrow| !maze.is_wall_cell(arrow.col, arrow.row));
}

fn spawn_spiders(state: &mut GameState) {
    for i in 0..state.nests.len() {
        if state.rng.random::<f64>() < state.tuning.spawn_probability {
            let nest = &state.nests[i];
            let (nest_id, pos) = (nest.id, nest.pos());
            let id = state.add_spider(pos);
            log::debug!("Nest {} spawned spider {}", nest_id, id);
        }
    }
}

/// Pick each spider's behavior, move it, and resolve contact with the character
fn update_spiders(state: &mut GameState, frame_scale: f32) {
    let tuning = &state.tuning;
    let character = &mut state.character;
    let spiders = std::mem::take(&mut state.spiders);
    let mut survivors = Vec::with_capacity(spiders.len());

    for mut spider in spiders {
        let arrow_near = character
            .arrows
            .iter()
            .any(|arrow| within(arrow.pos(), spider.pos, tuning.detection_radius));

        if arrow_near {
            spider.state = SpiderState::Chasing;
            spider.speed = character.speed * tuning.chase_speed_factor;
        } else {
            spider.state = SpiderState::Wandering;
            spider.speed = tuning.wander_speed;
        }

        let delta = match spider.state {
            // Pure pursuit of where the character is now
            SpiderState::Chasing => (character.pos - spider.pos).normalize_or_zero() * spider.speed,
            SpiderState::Wandering => {
                let jitter = Vec2::new(
                    state.rng.random::<f32>() - 0.5,
                    state.rng.random::<f32>() - 0.5,
                );
                jitter * spider.speed
            }
        };
        let (pos, _) = slide_move(&state.maze, spider.pos, delta * frame_scale);
        spider.pos = pos;

        if within(spider.pos, character.pos, tuning.contact_radius) {
            character.lives = character.lives.saturating_sub(1);
            log::info!(
                "Character hit by spider {}! Lives left: {}",
                spider.id,
                character.lives
            );
            if character.lives == 0 && state.phase != GamePhase::GameOver {
                state.phase = GamePhase::GameOver;
                log::warn!("Game over after {} ticks", state.time_ticks);
            }
            continue;
        }
        survivors.push(spider);
    }

    state.spiders = survivors;
}

/// Each arrow resolves against at most one target: a spider if any is in
/// range, otherwise a nest.
fn resolve_arrow_hits(state: &mut GameState) {
    let hit_radius = state.tuning.hit_radius;
    let arrows = std::mem::take(&mut state.character.arrows);
    let mut spider_alive = vec![true; state.spiders.len()];
    let mut kept = Vec::with_capacity(arrows.len());

    for arrow in arrows {
        let pos = arrow.pos();

        // Newest spiders are checked first
        let spider_hit = state
            .spiders
            .iter()
            .enumerate()
            .rev()
            .find(|(i, spider)| spider_alive[*i] && within(spider.pos, pos, hit_radius))
            .map(|(i, spider)| (i, spider.id));
        if let Some((i, id)) = spider_hit {
            spider_alive[i] = false;
            log::debug!("Arrow killed spider {}", id);
            continue;
        }

        let nest_hit = state
            .nests
            .iter_mut()
            .find(|nest| nest.hp > 0 && within(nest.pos(), pos, hit_radius));
        if let Some(nest) = nest_hit {
            nest.hp -= 1;
            if nest.hp == 0 {
                log::info!("Nest {} destroyed!", nest.id);
            } else {
                log::debug!("Nest {} hit, {} hp left", nest.id, nest.hp);
            }
            continue;
        }

        kept.push(arrow);
    }

    state.character.arrows = kept;
    let mut alive = spider_alive.into_iter();
    state.spiders.retain(|_| alive.next().unwrap_or(true));
    state.nests.retain(|nest| nest.hp > 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Key;
    use crate::sim::maze::Maze;
    use crate::sim::state::{Arrow, Direction};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const FRAME: f64 = NOMINAL_FRAME_MS;

    fn open_maze(width: usize, height: usize) -> Maze {
        let row = ".".repeat(width);
        let text = vec![row; height].join("\n");
        Maze::parse(&text).expect("valid maze")
    }

    /// Open 10x10 session, no nests, no random spawning
    fn quiet_state(maze: Maze) -> GameState {
        let tuning = Tuning {
            nest_count: 0,
            spawn_probability: 0.0,
            ..Default::default()
        };
        GameState::with_maze(2024, maze, tuning).expect("placement")
    }

    #[test]
    fn test_held_keys_move_character() {
        let mut state = quiet_state(open_maze(10, 10));
        let mut input = InputTracker::new();
        state.character.pos = Vec2::new(5.0, 5.0);

        input.key_down(Key::Down, &mut state);
        tick(&mut state, &input, FRAME);
        assert!((state.character.pos.y - (5.0 + state.tuning.character_speed)).abs() < 1e-5);
        assert_eq!(state.character.pos.x, 5.0);

        input.key_up(Key::Down);
        let before = state.character.pos;
        tick(&mut state, &input, FRAME);
        assert_eq!(state.character.pos, before);
    }

    #[test]
    fn test_movement_scales_with_elapsed_time() {
        let mut slow = quiet_state(open_maze(10, 10));
        let mut fast = quiet_state(open_maze(10, 10));
        let mut input = InputTracker::new();
        slow.character.pos = Vec2::new(2.0, 2.0);
        fast.character.pos = Vec2::new(2.0, 2.0);
        input.key_down(Key::Down, &mut slow);

        // Two nominal frames cover the same ground as one double-length frame
        tick(&mut slow, &input, FRAME);
        tick(&mut slow, &input, FRAME);
        tick(&mut fast, &input, FRAME * 2.0);
        assert!((slow.character.pos.y - fast.character.pos.y).abs() < 1e-5);
    }

    #[test]
    fn test_diagonal_into_corner_slides() {
        let maze = Maze::parse("...\n.#.\n...").expect("valid maze");
        let mut state = quiet_state(maze);
        let mut input = InputTracker::new();
        input.key_down(Key::Right, &mut state);
        input.key_down(Key::Down, &mut state);

        // Diagonal blocked by (1,1); X alone is free
        state.character.pos = Vec2::new(0.98, 0.98);
        tick(&mut state, &input, FRAME);
        assert!(state.character.pos.x > 1.0);
        assert_eq!(state.character.pos.y, 0.98);

        // Diagonal and X blocked by (1,1); Y alone is free
        state.character.pos = Vec2::new(0.98, 1.5);
        tick(&mut state, &input, FRAME);
        assert_eq!(state.character.pos.x, 0.98);
        assert!(state.character.pos.y > 1.5);
    }

    #[test]
    fn test_fully_blocked_move_stays_put() {
        let maze = Maze::parse(".#\n##").expect("valid maze");
        let mut state = quiet_state(maze);
        let mut input = InputTracker::new();
        input.key_down(Key::Right, &mut state);
        input.key_down(Key::Down, &mut state);
        state.character.pos = Vec2::new(0.98, 0.98);
        tick(&mut state, &input, FRAME);
        assert_eq!(state.character.pos, Vec2::new(0.98, 0.98));
    }

    #[test]
    fn test_fired_arrow_travels_one_cell_per_tick() {
        let mut state = quiet_state(open_maze(10, 10));
        let mut input = InputTracker::new();
        state.character.pos = Vec2::new(5.0, 5.0);
        state.character.facing = Direction::Right;

        input.key_down(Key::Fire, &mut state);
        assert_eq!(state.character.arrow_count, 2);
        assert_eq!(
            state.character.arrows,
            vec![Arrow {
                col: 5,
                row: 5,
                direction: Direction::Right
            }]
        );

        for _ in 0..3 {
            tick(&mut state, &input, FRAME);
        }
        assert_eq!(state.character.arrows.len(), 1);
        assert_eq!(
            (state.character.arrows[0].col, state.character.arrows[0].row),
            (8, 5)
        );
    }

    #[test]
    fn test_arrows_pruned_at_edges_and_walls() {
        let maze = Maze::parse("....#\n.....").expect("valid maze");
        let mut state = quiet_state(maze);
        state.character.pos = Vec2::new(0.0, 1.0);
        state.character.arrows = vec![
            Arrow {
                col: 3,
                row: 0,
                direction: Direction::Right,
            },
            Arrow {
                col: 4,
                row: 1,
                direction: Direction::Right,
            },
            Arrow {
                col: 0,
                row: 0,
                direction: Direction::Up,
            },
            Arrow {
                col: 1,
                row: 0,
                direction: Direction::Down,
            },
        ];
        tick(&mut state, &InputTracker::new(), FRAME);
        assert_eq!(
            state.character.arrows,
            vec![Arrow {
                col: 1,
                row: 1,
                direction: Direction::Down
            }]
        );
    }

    #[test]
    fn test_refill_one_arrow_per_interval() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.arrow_count = 0;
        state.character.last_refill_ms = 0.0;

        // 400ms: nothing yet
        for _ in 0..4 {
            tick(&mut state, &input, 100.0);
        }
        assert_eq!(state.character.arrow_count, 0);
        tick(&mut state, &input, 100.0);
        assert_eq!(state.character.arrow_count, 1);
        assert_eq!(state.character.last_refill_ms, 500.0);
    }

    #[test]
    fn test_slow_frames_keep_real_time_timers() {
        let mut state = quiet_state(open_maze(10, 10));
        let mut input = InputTracker::new();
        state.character.arrow_count = 0;
        state.character.last_refill_ms = 0.0;
        state.character.facing = Direction::Up;

        // 4 fps: each frame is well past the movement clamp
        tick(&mut state, &input, 250.0);
        assert_eq!(state.character.arrow_count, 0);
        tick(&mut state, &input, 250.0);
        assert_eq!(state.time_ms, 500.0);
        assert_eq!(state.character.arrow_count, 1);

        input.key_down(Key::Left, &mut state);
        assert_eq!(state.character.facing, Direction::Left);
        input.key_up(Key::Left);

        tick(&mut state, &input, 250.0);
        tick(&mut state, &input, 250.0);
        assert_eq!(state.time_ms, 1000.0);
        assert_eq!(state.character.arrow_count, 2);
    }

    #[test]
    fn test_long_frame_movement_is_clamped() {
        let mut clamped = quiet_state(open_maze(10, 10));
        let mut capped = quiet_state(open_maze(10, 10));
        let mut input = InputTracker::new();
        clamped.character.pos = Vec2::new(1.0, 1.0);
        capped.character.pos = Vec2::new(1.0, 1.0);
        input.key_down(Key::Down, &mut clamped);

        tick(&mut clamped, &input, 250.0);
        tick(&mut capped, &input, MAX_FRAME_MS);
        assert!((clamped.character.pos.y - capped.character.pos.y).abs() < 1e-5);
        assert_eq!(clamped.time_ms, 250.0);
    }

    #[test]
    fn test_refill_does_not_catch_up() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.arrow_count = 0;
        state.character.last_refill_ms = 0.0;
        state.time_ms = 10_000.0;

        tick(&mut state, &input, 0.0);
        assert_eq!(state.character.arrow_count, 1);
        tick(&mut state, &input, 0.0);
        assert_eq!(state.character.arrow_count, 1);
    }

    #[test]
    fn test_firing_delays_refill() {
        let mut state = quiet_state(open_maze(10, 10));
        let mut input = InputTracker::new();
        state.character.arrow_count = 2;
        state.character.last_refill_ms = 0.0;
        state.time_ms = 450.0;

        input.key_down(Key::Fire, &mut state);
        tick(&mut state, &input, 100.0);
        // 550ms since the old refill, but only 100ms since the shot
        assert_eq!(state.character.arrow_count, 1);
    }

    #[test]
    fn test_spawning_follows_probability() {
        let maze = open_maze(10, 10);
        let always = Tuning {
            nest_count: 2,
            spawn_probability: 1.0,
            ..Default::default()
        };
        let mut state = GameState::with_maze(1, maze.clone(), always).expect("placement");
        tick(&mut state, &InputTracker::new(), 0.0);
        assert_eq!(state.spiders.len(), 2);
        for spider in &state.spiders {
            assert_eq!(spider.state, SpiderState::Wandering);
            assert!(state.nests.iter().any(|n| n.pos() == spider.pos));
        }

        let never = Tuning {
            nest_count: 2,
            spawn_probability: 0.0,
            ..Default::default()
        };
        let mut state = GameState::with_maze(1, maze, never).expect("placement");
        for _ in 0..100 {
            tick(&mut state, &InputTracker::new(), FRAME);
        }
        assert!(state.spiders.is_empty());
    }

    #[test]
    fn test_wandering_spider_without_arrows_never_chases() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(0.0, 0.0);
        state.add_spider(Vec2::new(8.5, 8.5));

        for _ in 0..300 {
            tick(&mut state, &input, FRAME);
            let spider = &state.spiders[0];
            assert_eq!(spider.state, SpiderState::Wandering);
            assert_eq!(spider.speed, state.tuning.wander_speed);
        }
        // Jitter only: at most half a step per axis per frame
        let spider = &state.spiders[0];
        assert!((spider.pos.x - 8.5).abs() <= 300.0 * 0.025 + 1e-3);
    }

    #[test]
    fn test_arrow_in_range_triggers_chase() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(8.0, 5.0);
        state.add_spider(Vec2::new(3.5, 5.0));
        state.character.arrows.push(Arrow {
            col: 2,
            row: 6,
            direction: Direction::Up,
        });

        tick(&mut state, &input, FRAME);
        let spider = &state.spiders[0];
        assert_eq!(spider.state, SpiderState::Chasing);
        assert!((spider.speed - state.tuning.chase_speed()).abs() < 1e-6);
        assert!(spider.speed > state.character.speed);
        // Straight toward the character along +x
        assert!((spider.pos.x - (3.5 + spider.speed)).abs() < 1e-5);
        assert_eq!(spider.pos.y, 5.0);

        // Arrow flies out of range: back to wandering
        tick(&mut state, &input, FRAME);
        tick(&mut state, &input, FRAME);
        assert_eq!(state.spiders[0].state, SpiderState::Wandering);
        assert_eq!(state.spiders[0].speed, state.tuning.wander_speed);
    }

    #[test]
    fn test_chase_follows_moving_character() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(8.0, 5.0);
        state.add_spider(Vec2::new(3.5, 5.0));
        let near_spider = Arrow {
            col: 2,
            row: 7,
            direction: Direction::Up,
        };

        // The arrow lands at (2, 6): inside detection range, outside hit range
        state.character.arrows = vec![near_spider];
        tick(&mut state, &input, FRAME);
        let first = state.spiders[0].pos;
        assert_eq!(state.spiders[0].state, SpiderState::Chasing);
        assert!(first.x > 3.5);
        assert_eq!(first.y, 5.0);

        // Character moves straight below the spider; bearing follows
        state.character.pos = first + Vec2::new(0.0, 4.0);
        state.character.arrows = vec![near_spider];
        tick(&mut state, &input, FRAME);
        let spider = &state.spiders[0];
        assert_eq!(spider.state, SpiderState::Chasing);
        let step = spider.pos - first;
        assert!(step.x.abs() < 1e-6);
        assert!((step.y - spider.speed).abs() < 1e-5);
    }

    #[test]
    fn test_spider_contact_costs_life_until_game_over() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(5.0, 5.0);

        for expected in [2u8, 1, 0] {
            state.add_spider(Vec2::new(5.2, 5.0));
            tick(&mut state, &input, FRAME);
            assert_eq!(state.character.lives, expected);
            assert!(state.spiders.is_empty(), "contact removes the spider");
        }
        assert_eq!(state.phase, GamePhase::GameOver);

        // Terminal: nothing advances any more
        let ticks = state.time_ticks;
        state.add_spider(Vec2::new(5.0, 5.0));
        tick(&mut state, &input, FRAME);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.character.lives, 0);
    }

    #[test]
    fn test_arrow_and_spider_destroy_each_other() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(0.0, 9.0);
        state.add_spider(Vec2::new(5.5, 5.0));
        state.character.arrows.push(Arrow {
            col: 4,
            row: 5,
            direction: Direction::Right,
        });

        tick(&mut state, &input, 0.0);
        assert!(state.spiders.is_empty());
        assert!(state.character.arrows.is_empty());
    }

    #[test]
    fn test_spider_takes_priority_over_nest() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(0.0, 9.0);
        state.add_nest(5, 5);
        state.add_spider(Vec2::new(5.5, 5.0));
        state.character.arrows.push(Arrow {
            col: 4,
            row: 5,
            direction: Direction::Right,
        });

        tick(&mut state, &input, 0.0);
        assert!(state.spiders.is_empty());
        assert!(state.character.arrows.is_empty());
        assert_eq!(state.nests[0].hp, 3);
    }

    #[test]
    fn test_one_arrow_hits_one_spider() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(0.0, 9.0);
        let older = state.add_spider(Vec2::new(5.3, 5.0));
        state.add_spider(Vec2::new(4.7, 5.0));
        state.character.arrows.push(Arrow {
            col: 4,
            row: 5,
            direction: Direction::Right,
        });

        tick(&mut state, &input, 0.0);
        assert_eq!(state.spiders.len(), 1);
        assert_eq!(state.spiders[0].id, older);
        assert!(state.character.arrows.is_empty());
    }

    #[test]
    fn test_nest_destroyed_on_third_hit() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(0.0, 9.0);
        state.add_nest(8, 5);

        for expected_hp in [2u8, 1] {
            state.character.arrows.push(Arrow {
                col: 7,
                row: 5,
                direction: Direction::Right,
            });
            tick(&mut state, &input, 0.0);
            assert!(state.character.arrows.is_empty());
            assert_eq!(state.nests.len(), 1);
            assert_eq!(state.nests[0].hp, expected_hp);
        }

        state.character.arrows.push(Arrow {
            col: 7,
            row: 5,
            direction: Direction::Right,
        });
        tick(&mut state, &input, 0.0);
        assert!(state.nests.is_empty());
        assert!(state.character.arrows.is_empty());
    }

    #[test]
    fn test_two_arrows_same_tick_on_nest() {
        let mut state = quiet_state(open_maze(10, 10));
        let input = InputTracker::new();
        state.character.pos = Vec2::new(0.0, 9.0);
        state.add_nest(5, 5);
        state.nests[0].hp = 1;
        state.character.arrows = vec![
            Arrow {
                col: 4,
                row: 5,
                direction: Direction::Right,
            },
            Arrow {
                col: 5,
                row: 4,
                direction: Direction::Down,
            },
        ];

        tick(&mut state, &input, 0.0);
        // First arrow destroys the nest; the second has nothing left to hit
        assert!(state.nests.is_empty());
        assert_eq!(state.character.arrows.len(), 1);
        assert_eq!(state.character.arrows[0].direction, Direction::Down);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999).expect("placement");
        let mut state2 = GameState::new(99999).expect("placement");
        let mut input1 = InputTracker::new();
        let mut input2 = InputTracker::new();

        for frame in 0..600u32 {
            if frame % 50 == 0 {
                input1.key_down(Key::Fire, &mut state1);
                input2.key_down(Key::Fire, &mut state2);
            }
            let key = [Key::Up, Key::Right, Key::Down, Key::Left][(frame / 40) as usize % 4];
            input1.release_all();
            input2.release_all();
            input1.key_down(key, &mut state1);
            input2.key_down(key, &mut state2);

            tick(&mut state1, &input1, FRAME);
            tick(&mut state2, &input2, FRAME);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.character.pos, state2.character.pos);
        assert_eq!(state1.character.lives, state2.character.lives);
        assert_eq!(state1.spiders.len(), state2.spiders.len());
        for (a, b) in state1.spiders.iter().zip(&state2.spiders) {
            assert_eq!(a.pos, b.pos);
        }
        let hp1: Vec<_> = state1.nests.iter().map(|n| n.hp).collect();
        let hp2: Vec<_> = state2.nests.iter().map(|n| n.hp).collect();
        assert_eq!(hp1, hp2);
    }

    fn key_strategy() -> impl Strategy<Value = (bool, Key, f64)> {
        (
            any::<bool>(),
            prop_oneof![
                Just(Key::Up),
                Just(Key::Down),
                Just(Key::Left),
                Just(Key::Right),
                Just(Key::Fire),
            ],
            0.0..120.0f64,
        )
    }

    proptest! {
        #[test]
        fn prop_nothing_settles_in_walls(
            seed in any::<u64>(),
            frames in prop::collection::vec(key_strategy(), 1..300),
        ) {
            let mut state = GameState::new(seed).expect("placement");
            let mut input = InputTracker::new();

            for (press, key, elapsed) in frames {
                if press {
                    input.key_down(key, &mut state);
                } else {
                    input.key_up(key);
                }
                tick(&mut state, &input, elapsed);

                let pos = state.character.pos;
                prop_assert!(!state.maze.is_wall(pos.x, pos.y));
                for spider in &state.spiders {
                    prop_assert!(!state.maze.is_wall(spider.pos.x, spider.pos.y));
                }
                for arrow in &state.character.arrows {
                    prop_assert!(!state.maze.is_wall_cell(arrow.col, arrow.row));
                }
                prop_assert!(state.character.arrow_count <= state.character.max_arrows);
                prop_assert!(state.character.lives <= state.tuning.starting_lives);
                prop_assert_eq!(state.is_game_over(), state.character.lives == 0);
            }
        }
    }
}
