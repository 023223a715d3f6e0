pub mod d100_pantry_performance;
