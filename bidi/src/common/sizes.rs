// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these tuning parameters. Smaller inline sizes are better
//! than larger ones. The stacks below only spill onto the heap for pathological input
//! (deeply nested embeddings or brackets), which terminal lines almost never contain.

use smallvec::SmallVec;

/// Inline capacity of the directional status stack (X1 to X8). The stack can grow to
/// [`MAX_DEPTH`] + 2 entries before the overflow counters take over.
///
/// [`MAX_DEPTH`]: crate::MAX_DEPTH
pub const STATUS_STACK_INLINE_SIZE: usize = 16;

/// Inline capacity of the bracket pair stack (BD16).
pub const BRACKET_STACK_INLINE_SIZE: usize = 8;

/// Maximum number of open brackets tracked at once in an isolating run sequence. When
/// a new opening bracket does not fit, pairing stops for the rest of that sequence.
pub const MAX_BRACKET_STACK_DEPTH: usize = 63;

/// Inline capacity for small short lived lists, eg: the level runs of a sequence.
pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated storage for the directional status stack. When this gets larger than
/// [`STATUS_STACK_INLINE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the heap.
pub type StatusStackVec<T> = SmallVec<[T; STATUS_STACK_INLINE_SIZE]>;

/// Stack allocated storage for the bracket stack. When this gets larger than
/// [`BRACKET_STACK_INLINE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type BracketStackVec<T> = SmallVec<[T; BRACKET_STACK_INLINE_SIZE]>;

/// When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
