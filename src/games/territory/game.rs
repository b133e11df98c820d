//! Territory game implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::cascade::{apply_grid_move, check_target};
use super::enclosure::find_enclosed_areas;
use super::legality::can_place_at;
use crate::core::{Coord, GridRules, MoveError, PlayerId, RulesError, StoreError};
use crate::rules::{GameRules, MoveOutcome, MoveValidation, Scores, WinCheck};
use crate::spatial::{LocalSnapshot, SpatialEngine};
use crate::store::CellStore;

/// A placement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMove {
    pub x: i32,
    pub y: i32,

    /// Set by the caller for a player's opening move on an untouched
    /// board; skips the adjacency requirement.
    #[serde(default)]
    pub is_first_move: bool,
}

impl GridMove {
    /// A regular placement at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_first_move: false,
        }
    }

    /// A bootstrap placement at `(x, y)`.
    #[must_use]
    pub const fn first(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_first_move: true,
        }
    }

    /// Target coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// Game-level configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryConfig {
    pub rules: GridRules,

    /// Owned-cell count that wins outright. `None` disables the rule.
    #[serde(default)]
    pub win_cells: Option<usize>,
}

impl TerritoryConfig {
    /// Configuration with no outright cell target.
    #[must_use]
    pub fn new(rules: GridRules) -> Self {
        Self {
            rules,
            win_cells: None,
        }
    }

    /// Set the winning cell count.
    #[must_use]
    pub fn with_win_cells(mut self, cells: usize) -> Self {
        self.win_cells = Some(cells);
        self
    }
}

/// Snapshot of a territory game for clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryState {
    pub rules: GridRules,
    pub move_count: u64,
    pub scores: Scores,
}

/// Territory capture game over a `CellStore`.
///
/// Each move loads one snapshot, runs legality, cascade and enclosure
/// against it in memory, and saves the changed cells in one batch. Moves
/// on one instance must be serialized by the caller.
///
/// ## Example
///
/// ```
/// use rust_grid::core::{GridRules, PlayerId};
/// use rust_grid::games::territory::{GridMove, TerritoryConfig, TerritoryGame};
/// use rust_grid::rules::GameRules;
/// use rust_grid::store::MemoryCellStore;
///
/// let config = TerritoryConfig::new(GridRules::finite(32, 32));
/// let mut game = TerritoryGame::new(config, MemoryCellStore::new()).unwrap();
/// let alice = PlayerId::new(1);
///
/// let outcome = game.apply_move(alice, &GridMove::first(4, 4)).unwrap();
/// assert_eq!(outcome.changed_cells.len(), 1);
///
/// // Not connected to anything Alice owns.
/// assert!(!game.validate_move(alice, &GridMove::new(9, 9)).is_valid);
/// ```
pub struct TerritoryGame<S: CellStore> {
    config: TerritoryConfig,
    engine: SpatialEngine,
    store: S,
    move_count: u64,
}

impl<S: CellStore> TerritoryGame<S> {
    /// Create a game over `store`. Fails if the grid rules are invalid.
    pub fn new(config: TerritoryConfig, store: S) -> Result<Self, RulesError> {
        config.rules.validate()?;
        Ok(Self {
            engine: SpatialEngine::new(config.rules),
            config,
            store,
            move_count: 0,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &TerritoryConfig {
        &self.config
    }

    /// Get the spatial engine.
    #[must_use]
    pub fn engine(&self) -> &SpatialEngine {
        &self.engine
    }

    /// Get the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the backing store mutably (seeding, administration).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Number of committed moves.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Load the snapshot window around `target`.
    pub fn load_snapshot(&self, target: Coord) -> Result<LocalSnapshot, StoreError> {
        let window = self.engine.snapshot_window(target);
        let cells = self.store.load_cells(&window)?;
        Ok(LocalSnapshot::from_cells(window, cells))
    }

    /// Placement legality against an already-loaded snapshot.
    #[must_use]
    pub fn can_place_at(&self, snapshot: &LocalSnapshot, target: Coord, player: PlayerId, is_first_move: bool) -> bool {
        can_place_at(snapshot, target, player, is_first_move)
    }

    /// Legality and target checks against a loaded snapshot. No mutation.
    fn check_move(&self, snapshot: &LocalSnapshot, player: PlayerId, mv: &GridMove) -> Result<(), MoveError> {
        let target = mv.coord();
        if !can_place_at(snapshot, target, player, mv.is_first_move) {
            return Err(MoveError::NotAdjacent { x: mv.x, y: mv.y });
        }
        check_target(snapshot, &self.engine, target, player)
    }

    /// Run the whole move against a fresh snapshot and commit it.
    fn run_move(&mut self, player: PlayerId, mv: &GridMove) -> Result<MoveOutcome, MoveError> {
        let target = mv.coord();
        self.engine.grid().validate_coord(target)?;

        let mut snapshot = self.load_snapshot(target).map_err(|err| {
            warn!(player = %player, x = mv.x, y = mv.y, error = %err, "snapshot load failed");
            err
        })?;

        if !can_place_at(&snapshot, target, player, mv.is_first_move) {
            return Err(MoveError::NotAdjacent { x: mv.x, y: mv.y });
        }
        apply_grid_move(&mut snapshot, &self.engine, target, player)?;
        let captured = find_enclosed_areas(&mut snapshot, &self.engine, player);

        let changed_cells = snapshot.changed_cells();
        self.store.save_cells(&changed_cells).map_err(|err| {
            warn!(player = %player, x = mv.x, y = mv.y, error = %err, "batch save failed, move aborted");
            err
        })?;
        self.move_count += 1;

        let affected_chunks = self.engine.affected_chunks(&changed_cells).into_iter().collect();
        debug!(
            player = %player,
            x = mv.x,
            y = mv.y,
            changed = changed_cells.len(),
            captured,
            "move committed"
        );

        Ok(MoveOutcome {
            changed_cells,
            affected_chunks,
        })
    }
}

impl<S: CellStore> GameRules for TerritoryGame<S> {
    type Move = GridMove;
    type State = TerritoryState;

    fn validate_move(&self, player: PlayerId, mv: &GridMove) -> MoveValidation {
        if let Err(err) = self.engine.grid().validate_coord(mv.coord()) {
            return MoveValidation::invalid(err);
        }
        let snapshot = match self.load_snapshot(mv.coord()) {
            Ok(snapshot) => snapshot,
            Err(err) => return MoveValidation::invalid(err.into()),
        };
        self.check_move(&snapshot, player, mv).into()
    }

    fn apply_move(&mut self, player: PlayerId, mv: &GridMove) -> Result<MoveOutcome, MoveError> {
        let result = self.run_move(player, mv);
        if let Err(err) = &result {
            debug!(player = %player, x = mv.x, y = mv.y, error = %err, "move rejected");
        }
        result
    }

    fn calculate_score(&self) -> Result<Scores, StoreError> {
        let mut scores = Scores::new();
        for cell in self.store.load_all()? {
            if let Some(owner) = cell.owner {
                *scores.entry(owner).or_insert(0) += 1;
            }
        }
        Ok(scores)
    }

    fn check_win_condition(&self) -> Result<WinCheck, StoreError> {
        let scores = self.calculate_score()?;

        // Highest count; ties go to the lower player id.
        let leader = scores
            .iter()
            .max_by(|(pa, a), (pb, b)| a.cmp(b).then(pb.cmp(pa)))
            .map(|(&p, &n)| (p, n));

        let Some((leader, count)) = leader else {
            return Ok(WinCheck::ongoing());
        };

        if let Some(target) = self.config.win_cells {
            if count >= target {
                return Ok(WinCheck::winner(leader, format!("{} owns {} cells", leader, count)));
            }
        }

        if let Some(total) = self.config.rules.cell_count() {
            let owned: usize = scores.values().sum();
            if owned >= total {
                let tied = scores.values().filter(|&&n| n == count).count() > 1;
                if tied {
                    return Ok(WinCheck::draw("board full with tied leaders"));
                }
                return Ok(WinCheck::winner(leader, "board full"));
            }
        }

        Ok(WinCheck::ongoing())
    }

    fn game_state(&self) -> Result<TerritoryState, StoreError> {
        Ok(TerritoryState {
            rules: self.config.rules,
            move_count: self.move_count,
            scores: self.calculate_score()?,
        })
    }
}
