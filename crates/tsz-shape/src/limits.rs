//! Centralized limits for type graph resolution.

/// Maximum nesting depth of a single resolution pass.
///
/// Cycles through object types are cut by the visited set long before this
/// matters. The limit only stops pathological non-object nesting from
/// overflowing the stack, e.g.
///
/// ```typescript
/// type Deep = string[][][][][] /* ... hundreds of levels ... */;
/// ```
///
/// Matches the checker's type node depth limit.
pub const MAX_RESOLUTION_DEPTH: u32 = 500;

/// Initial capacity of the per-pass visited set.
pub const VISITED_SET_INITIAL_CAPACITY: usize = 16;
