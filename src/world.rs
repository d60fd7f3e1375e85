use tracing::debug;
use tracing::trace;

use crate::cell::Cell;
use crate::cell::Row;
use crate::error::DomainError;
use crate::error::InvariantViolation;
use crate::rule_set::Neighborhood;
use crate::rule_set::Rule;
use crate::rule_set::TransitionTable;

/// Compute the generation following `row`.
///
/// Positions outside of the row are read as [`Cell::BOUNDARY`](crate::cell::Cell::BOUNDARY), so
/// the grid neither wraps nor grows.
pub fn next_row(row: &Row, table: &TransitionTable) -> Result<Row, InvariantViolation> {
    (0..row.len() as isize)
        .map(|j| {
            let nbhd = Neighborhood::new(
                row.get_or_boundary(j - 1),
                row.get_or_boundary(j),
                row.get_or_boundary(j + 1),
            );

            table.get(nbhd)
        })
        .collect()
}

/// Widest row a `Vec<Cell>` can hold.
pub const MAX_WIDTH: usize = isize::MAX as usize / std::mem::size_of::<Cell>();

/// Check that `steps` is usable, returning it as a `usize`.
///
/// Besides rejecting negatives, this makes sure a row of width `2 * steps + 1` fits in a `Vec`.
/// Whether it fits in memory is only known once [`World::new`] allocates it.
pub fn validate_steps(steps: i64) -> Result<usize, DomainError> {
    if steps < 0 {
        return Err(DomainError::NegativeSteps(steps));
    }

    usize::try_from(steps)
        .ok()
        .filter(|&n| n <= (MAX_WIDTH - 1) / 2)
        .ok_or(DomainError::TooManySteps(steps as u64))
}

pub struct World {
    /// Indexing into this table with a neighborhood yields its next center cell.
    pub rules: TransitionTable,

    /// The current generation
    pub row: Row,

    /// Number of times [`World::next`] has been applied
    pub generation: usize,

    /// Generation at which the world stops evolving
    pub steps: usize,
}

impl World {
    /// Create a world of width `2 * steps + 1`, seeded with a single live center cell.
    pub fn new(rule: Rule, steps: usize) -> Result<Self, DomainError> {
        let too_many = || DomainError::TooManySteps(steps as u64);

        let width = steps
            .checked_mul(2)
            .and_then(|n| n.checked_add(1))
            .ok_or_else(too_many)?;
        let row = Row::seeded(width).map_err(|_| too_many())?;
        let rules = rule.compute_rules();

        debug!(%rule, binary = %rule.to_binary(), steps, width, "seeded world");

        Ok(Self {
            rules,
            row,
            generation: 0,
            steps,
        })
    }

    pub fn width(&self) -> usize {
        self.row.len()
    }

    /// Number of rows in a full run, including the seed.
    pub fn height(&self) -> usize {
        self.steps + 1
    }

    pub fn is_done(&self) -> bool {
        self.generation >= self.steps
    }

    /// Advance the world by one generation.
    pub fn next(&mut self) -> Result<&Row, InvariantViolation> {
        let row = next_row(&self.row, &self.rules)?;
        debug_assert_eq!(row.len(), self.row.len());

        self.row = row;
        self.generation += 1;

        trace!(generation = self.generation, alive = self.row.count_alive(), "evolved row");

        Ok(&self.row)
    }

    /// Visit the seed row and then every generation up to `steps`, in order.
    ///
    /// Stops at the first error returned by `f`, without evolving any further.
    pub fn run<F, E>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&Row) -> Result<(), E>,
        E: From<InvariantViolation>,
    {
        f(&self.row)?;

        while !self.is_done() {
            f(self.next()?)?;
        }

        Ok(())
    }

    /// Collect every row of a full run, seed included.
    pub fn rows(mut self) -> Result<Vec<Row>, InvariantViolation> {
        let mut rows = Vec::with_capacity(self.height());
        self.run(|row| {
            rows.push(row.clone());
            Ok::<_, InvariantViolation>(())
        })?;

        Ok(rows)
    }
}
