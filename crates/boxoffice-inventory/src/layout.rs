//! Seat-map generation.
//!
//! Auditoriums are laid out in rows of ten: the last two rows are VIP,
//! the two middle seats of every other row are couple seats, the rest
//! standard.

use boxoffice_core::{AppError, AppResult};
use boxoffice_entity::seat::{Seat, SeatCategory};
use boxoffice_core::types::seat_code::SeatId;

const SEATS_PER_ROW: u32 = 10;
const MAX_ROWS: u32 = 26;

/// Generate the seat set for an inventory of `capacity` seats.
///
/// Rows are lettered `A`.. and filled ten seats at a time; the final
/// row may be partial. Capacity is bounded by the 26-letter row space.
pub fn generate_seats(capacity: u32) -> AppResult<Vec<Seat>> {
    if capacity == 0 {
        return Err(AppError::validation("Seat capacity must be positive"));
    }
    if capacity > SEATS_PER_ROW * MAX_ROWS {
        return Err(AppError::validation(format!(
            "Seat capacity {capacity} exceeds the {} seat layout limit",
            SEATS_PER_ROW * MAX_ROWS
        )));
    }

    let rows = capacity.div_ceil(SEATS_PER_ROW);
    let mut seats = Vec::with_capacity(capacity as usize);

    for row_index in 0..rows {
        let row_letter = (b'A' + row_index as u8) as char;
        for number in 1..=SEATS_PER_ROW {
            if seats.len() as u32 == capacity {
                break;
            }
            let category = if row_index >= rows.saturating_sub(2) && rows > 2 {
                SeatCategory::Vip
            } else if number == 5 || number == 6 {
                SeatCategory::Couple
            } else {
                SeatCategory::Standard
            };
            let id = SeatId::new(row_letter, number as u8)
                .map_err(|e| AppError::internal(format!("Seat layout produced bad code: {e}")))?;
            seats.push(Seat::new(id, category));
        }
    }

    Ok(seats)
}
