//! A fixed-region, single-threaded allocator for `no_std` targets with a
//! known upper bound on heap usage.
//!
//! The allocator owns a single contiguous byte region handed to it once at
//! construction and never grown afterwards. Free chunks are tracked in a
//! fixed array of segregated free lists (see [`bin`]), bucketed by a log2
//! size class, and searched with a bounded-then-unbounded two-pass scan that
//! trades strict best-fit for a constant-ish worst case per call. Chunk
//! metadata lives in-band, immediately before each chunk's payload (see
//! [`node`]).
//!
//! # Usage
//! ```no_run
//! #[global_allocator]
//! static ALLOCATOR: fixalloc::HeapAllocator<{ 64 * 1024 }, false> =
//!     fixalloc::HeapAllocator::new();
//!
//! extern crate alloc;
//! ```
//!
//! # Design
//! Every chunk, free or used, is prefixed by a header carrying its size, a
//! back-pointer to the physically preceding chunk, and two slots reused
//! either as a free-list's `next`/`prev` links or, once the chunk is handed
//! to a caller, as a fixed non-pointer sentinel pair. Because every chunk is
//! aligned and sized to a multiple of [`ALLOC_ALIGN`], the low bits of a real
//! link pointer are always zero, which is what makes the sentinel
//! unambiguous. No two physically adjacent chunks are ever both free: a
//! chunk split off by [`heap::Heap::realloc`]'s shrink path is coalesced
//! forward with a free right neighbour the same way a `dealloc`'d chunk is,
//! so that invariant holds unconditionally rather than only after `alloc`'s
//! splits. See `DESIGN.md` for the reasoning.
//!
//! This crate does not grow its region, coordinate across threads, or defend
//! against all forms of heap corruption; it aims for bounded-time allocation
//! over a region sized up front, not asymptotic optimality.

#![cfg_attr(not(test), no_std)]
#![warn(unsafe_op_in_unsafe_fn)]
#![warn(clippy::undocumented_unsafe_blocks)]

mod bin;
mod facade;
mod heap;
mod node;
mod ptr_utils;

#[cfg(feature = "counters")]
mod counters;

pub use facade::HeapAllocator;

#[cfg(feature = "counters")]
pub use counters::Counters;

/// Alignment guaranteed for every pointer this allocator hands out, and the
/// alignment every chunk (used or free) is sized to. Fixed: the used-chunk
/// sentinel encoding in [`node`] depends on a real link pointer's low four
/// bits always being zero, which only holds at this alignment or coarser.
pub const ALLOC_ALIGN: usize = 16;

/// The smallest chunk size (payload bytes, excluding the header) this
/// allocator will ever create or leave behind after a split.
pub const MIN_ALLOC_SIZE: usize = 16;

/// The number of nodes inspected per bin during the first, bounded search
/// pass of `alloc`. A second, unbounded pass runs only if the bounded pass
/// comes up empty.
pub const BIN_MAX_LOOKUPS: usize = 16;

const _: () = assert!(ALLOC_ALIGN.is_power_of_two());
const _: () = assert!(MIN_ALLOC_SIZE <= ALLOC_ALIGN);
