//! One render function per widget.

pub mod gem_store;
pub mod sidebar;
pub mod speedups;
pub mod training;
