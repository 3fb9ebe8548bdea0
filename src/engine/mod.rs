//! Match state machine: phases, seats, and the pure action reducers.

mod phase;
mod seat;
mod state;

pub use phase::Phase;
pub use seat::{BoardState, Seat, MAX_ATTACHED_MEALS, OPENING_HAND_SIZE};
pub use state::{
    FaceoffState, MatchState, RestaurantChoice, SeatConfig, STARS_TO_WIN,
};
