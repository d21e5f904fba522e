use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One cell of the seat grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatState {
    /// The aisle cell: rendered but disabled, never selectable
    Gap,
    /// Pre-assigned when the map is rolled; immutable for the life of the map
    Booked,
    Available,
    Selected,
}

/// Grid shape. `gap_col` seats sit left of the aisle and the remaining
/// `seat_cols - gap_col` right of it; seat numbers 1..=seat_cols skip the
/// aisle cell entirely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatLayout {
    pub rows: u32,
    pub seat_cols: u32,
    pub gap_col: u32,
}

impl Default for SeatLayout {
    fn default() -> Self {
        Self {
            rows: 8,
            seat_cols: 5,
            gap_col: 2,
        }
    }
}

impl SeatLayout {
    /// Grid columns including the aisle cell
    pub fn grid_cols(&self) -> u32 {
        self.seat_cols + 1
    }

    /// Selectable positions in the grid
    pub fn seat_count(&self) -> u32 {
        self.rows * self.seat_cols
    }

    /// Seat label for a grid cell ("C4"), None for the aisle
    fn label(&self, row: u32, col: u32) -> Option<String> {
        let number = match col {
            c if c < self.gap_col => c + 1,
            c if c == self.gap_col => return None,
            c => c,
        };
        let letter = char::from(b'A' + row as u8);
        Some(format!("{letter}{number}"))
    }

    /// Parse a seat id back into (row, grid column)
    fn locate(&self, seat_id: &str) -> Option<(u32, u32)> {
        let mut chars = seat_id.chars();
        let letter = chars.next()?;
        let row = (letter as u32).checked_sub('A' as u32)?;
        if row >= self.rows {
            return None;
        }
        let number: u32 = chars.as_str().parse().ok()?;
        if number < 1 || number > self.seat_cols {
            return None;
        }
        let col = if number <= self.gap_col { number - 1 } else { number };
        Some((row, col))
    }
}

/// Which way a successful toggle flipped the seat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatToggle {
    Selected,
    Released,
}

/// Occupancy grid for one bus opening.
///
/// Booked cells are rolled fresh every time a bus is opened; nothing is
/// persisted per bus, so two viewers of the "same" bus each see their own
/// roll. Known limitation of the demo inventory model, kept as-is.
#[derive(Debug, Clone, Serialize)]
pub struct SeatMap {
    layout: SeatLayout,
    cells: Vec<SeatState>,
    capacity: usize,
    selection: Vec<String>,
}

impl SeatMap {
    /// Roll a fresh map. A uniform random count of non-aisle cells in
    /// `[min_booked, max_booked]` is pre-marked Booked; `capacity` caps
    /// how many seats can be Selected at once.
    pub fn generate(
        layout: SeatLayout,
        min_booked: u32,
        max_booked: u32,
        capacity: u32,
        rng: &mut impl Rng,
    ) -> Self {
        // Row letters run A..Z, which bounds the grid at 26 rows
        let layout = SeatLayout {
            rows: layout.rows.min(26),
            ..layout
        };
        let grid_cols = layout.grid_cols();
        let mut cells = vec![SeatState::Available; (layout.rows * grid_cols) as usize];
        for row in 0..layout.rows {
            cells[(row * grid_cols + layout.gap_col) as usize] = SeatState::Gap;
        }

        let booked_target = rng
            .gen_range(min_booked..=max_booked.max(min_booked))
            .min(layout.seat_count());
        let mut booked = HashSet::new();
        while (booked.len() as u32) < booked_target {
            let row = rng.gen_range(0..layout.rows);
            let col = rng.gen_range(0..grid_cols);
            if col != layout.gap_col && booked.insert((row, col)) {
                cells[(row * grid_cols + col) as usize] = SeatState::Booked;
            }
        }

        Self {
            layout,
            cells,
            capacity: capacity as usize,
            selection: Vec::new(),
        }
    }

    /// Flip a seat between Available and Selected.
    ///
    /// Selecting is rejected once the selection already holds `capacity`
    /// seats; Booked cells, the aisle, and unknown ids are rejected as
    /// invalid. Rejections leave the map untouched.
    pub fn toggle(&mut self, seat_id: &str) -> Result<SeatToggle, SeatMapError> {
        let Some(index) = self.index_of(seat_id) else {
            return Err(SeatMapError::InvalidSeat(seat_id.to_string()));
        };

        match self.cells[index] {
            SeatState::Available => {
                if self.selection.len() >= self.capacity {
                    return Err(SeatMapError::CapacityReached {
                        capacity: self.capacity,
                    });
                }
                self.cells[index] = SeatState::Selected;
                self.selection.push(seat_id.to_string());
                Ok(SeatToggle::Selected)
            }
            SeatState::Selected => {
                self.cells[index] = SeatState::Available;
                self.selection.retain(|s| s != seat_id);
                Ok(SeatToggle::Released)
            }
            // No control is offered for booked or aisle cells; an id
            // pointing at one fails the same way as an unknown id
            SeatState::Booked | SeatState::Gap => {
                Err(SeatMapError::InvalidSeat(seat_id.to_string()))
            }
        }
    }

    /// Selected seat ids in the order they were chosen, not grid order.
    /// This order carries through to the ticket's seat listing.
    pub fn selected_seats(&self) -> &[String] {
        &self.selection
    }

    pub fn state(&self, seat_id: &str) -> Option<SeatState> {
        self.index_of(seat_id).map(|index| self.cells[index])
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn layout(&self) -> SeatLayout {
        self.layout
    }

    pub fn booked_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == SeatState::Booked).count()
    }

    /// Row-major cell listing for rendering; aisle cells carry no label
    pub fn cells(&self) -> Vec<(Option<String>, SeatState)> {
        let grid_cols = self.layout.grid_cols();
        (0..self.layout.rows)
            .flat_map(|row| {
                (0..grid_cols).map(move |col| (row, col))
            })
            .map(|(row, col)| {
                (
                    self.layout.label(row, col),
                    self.cells[(row * grid_cols + col) as usize],
                )
            })
            .collect()
    }

    /// Ids of currently Available seats, in grid order
    pub fn available_seats(&self) -> Vec<String> {
        self.cells()
            .into_iter()
            .filter(|(_, state)| *state == SeatState::Available)
            .filter_map(|(label, _)| label)
            .collect()
    }

    fn index_of(&self, seat_id: &str) -> Option<usize> {
        self.layout
            .locate(seat_id)
            .map(|(row, col)| (row * self.layout.grid_cols() + col) as usize)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SeatMapError {
    #[error("only {capacity} seat(s) can be selected")]
    CapacityReached { capacity: usize },

    #[error("seat {0} cannot be selected")]
    InvalidSeat(String),
}
