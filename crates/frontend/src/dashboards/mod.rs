pub mod d100_manager;
