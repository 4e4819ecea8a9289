//! Application layer - Resolution orchestration

pub mod resolve_usecase;

pub use resolve_usecase::{resolve_target, ResolveUseCase, ResolveUseCaseImpl};
