use battleship_rules::{
    AttackResult, InMemoryStore, LogNotifier, Player, RulesEngine, DEFAULT_BOARD_SIZE,
};
use proptest::prelude::*;

fn engine_with_game(board_size: i32) -> RulesEngine<InMemoryStore, LogNotifier> {
    let mut engine = RulesEngine::new(InMemoryStore::new(), LogNotifier);
    assert!(engine.create_game(board_size, false).success);
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every non-positive requested size succeeds with the default size.
    #[test]
    fn non_positive_board_size_falls_back_to_default(size in i32::MIN..=0) {
        let mut engine = RulesEngine::new(InMemoryStore::new(), LogNotifier);
        let response = engine.create_game(size, false);
        prop_assert!(response.success);
        let expected = format!("default size {}", DEFAULT_BOARD_SIZE);
        prop_assert!(response.message.contains(&expected));
    }

    /// Placement is all-or-nothing: either every cell of the ship lands
    /// strictly inside the board, or nothing is written at all.
    #[test]
    fn placement_is_atomic_and_in_bounds(
        x in -3i32..14,
        y in -3i32..14,
        length in 1i32..7,
        horizontal in any::<bool>(),
    ) {
        let mut engine = engine_with_game(10);
        let response = engine.place_ship(1, x, y, length, horizontal);
        let cells = engine.game_board().cells;

        if response.success {
            prop_assert_eq!(cells.len() as i32, length);
            for cell in &cells {
                prop_assert!(cell.x > 0 && cell.x < 10, "x out of bounds: {}", cell.x);
                prop_assert!(cell.y > 0 && cell.y < 10, "y out of bounds: {}", cell.y);
                prop_assert!(!cell.hit);
            }
        } else {
            prop_assert!(cells.is_empty());
            prop_assert!(!response.message.is_empty());
        }
    }

    /// The board query is sorted by (player, x, y) no matter how the ships
    /// were interleaved at placement time.
    #[test]
    fn board_is_sorted_for_any_placement_order(
        placements in proptest::collection::vec(
            (1i32..=2, 1i32..10, 1i32..10, 1i32..5, any::<bool>()),
            1..12,
        ),
    ) {
        let mut engine = engine_with_game(10);
        for (player, x, y, length, horizontal) in placements {
            // rejected placements are fine; ordering must hold regardless
            let _ = engine.place_ship(player, x, y, length, horizontal);
        }

        let cells = engine.game_board().cells;
        let keys: Vec<(Player, i32, i32)> = cells.iter().map(|c| (c.player, c.x, c.y)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
    }

    /// Attacking never changes the number of cells, and a miss changes
    /// nothing at all.
    #[test]
    fn attacks_never_change_board_shape(
        ship_x in 1i32..6,
        ship_y in 1i32..10,
        target_x in 1i32..10,
        target_y in 1i32..10,
    ) {
        let mut engine = engine_with_game(10);
        prop_assert!(engine.place_ship(1, ship_x, ship_y, 4, true).success);
        let before = engine.game_board().cells;

        let response = engine.attack(2, 1, target_x, target_y);
        prop_assert!(response.success);
        let after = engine.game_board().cells;
        prop_assert_eq!(after.len(), before.len());

        let occupied = target_y == ship_y && (ship_x..ship_x + 4).contains(&target_x);
        if occupied {
            prop_assert_eq!(response.result, AttackResult::Hit);
            prop_assert_eq!(after.iter().filter(|c| c.hit).count(), 1);
        } else {
            prop_assert_eq!(response.result, AttackResult::Miss);
            prop_assert_eq!(after, before);
        }
    }
}
