//! Board evaluation functions for the search in [minimax](crate::ai::minimax).
pub mod checkers;
