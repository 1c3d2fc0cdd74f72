//! N-dimensional board container for Tabula.
//!
//! A [`Board`] is a pool of uniquely-identified elements plus a spatial
//! index mapping occupied [`Position`](tabula_core::Position)s to the pool
//! entry placed there. An element may sit on zero, one or many positions;
//! a position holds at most one element.
//!
//! ```text
//! Board
//! ├── Pool (append-only arena)
//! │   ├── Vec<PoolEntry>   element: Arc<T>, positions: SmallVec<[Position; 4]>
//! │   └── IndexMap<K, EntryHandle>
//! └── IndexMap<Position, EntryHandle>   (spatial index)
//! ```
//!
//! Every mutation validates all preconditions before touching either
//! structure, so a returned [`BoardError`](tabula_core::BoardError) always
//! leaves the board exactly as it was.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod board;
pub mod config;
mod handle;
mod pool;
pub mod view;

pub use board::Board;
pub use config::BoardConfig;
pub use view::ElementView;
