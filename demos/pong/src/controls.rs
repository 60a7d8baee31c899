//! Key-slot assignments. The host maps whatever physical keys it likes
//! (classically W/S and the arrow keys) onto these slots.

pub const P1_UP: usize = 0;
pub const P1_DOWN: usize = 1;
pub const P2_UP: usize = 2;
pub const P2_DOWN: usize = 3;
