//! Crate root module declarations for the Arbiter Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move rules, and
//! utility helpers) so the demo binary, tests, and external tooling can
//! import stable module paths. The engine accepts moves in 4-character
//! coordinate notation, adjudicates legality, and tracks check, checkmate,
//! stalemate, and draw outcomes.

pub mod errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_rules {
    pub mod apply_move;
    pub mod king_safety;
    pub mod path_clearance;
    pub mod piece_patterns;
    pub mod special_moves;
}

pub mod utils {
    pub mod coordinate;
    pub mod render_game_state;
}
