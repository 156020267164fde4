pub mod atomic;

pub use atomic::AtomicCursor;

/// Cursor over raw bytes, e.g. `str::as_bytes()`
pub type ByteCursor<'code> = AtomicCursor<'code, u8>;

/// Cursor over decoded characters
pub type CharCursor<'code> = AtomicCursor<'code, char>;
