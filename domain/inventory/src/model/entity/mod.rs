mod disk;
mod file;
mod placement;
mod ram;

#[rustfmt::skip]
pub use {
    disk::Disk,
    file::File,
    placement::{FilePlacement, RamPlacement},
    ram::Ram,
};
