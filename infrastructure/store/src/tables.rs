use std::collections::BTreeMap;

use anyhow::anyhow;
use domain_inventory::{
    exception::{InventoryException, InventoryResult},
    model::entity::{Disk, File, FilePlacement, Ram, RamPlacement},
    repository::{Executed, Row, Statement},
};

use crate::relation::Relation;

const FILES_IN_DISKS: &str = "files_in_disks";
const RAMS_IN_DISKS: &str = "rams_in_disks";

/// Rows of every table plus both placement relations.
///
/// `file_placements` pairs are `(file_id, disk_id)`, `ram_placements` pairs are
/// `(ram_id, disk_id)`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    files: BTreeMap<i64, File>,
    disks: BTreeMap<i64, Disk>,
    rams: BTreeMap<i64, Ram>,
    file_placements: Relation,
    ram_placements: Relation,
}

impl Tables {
    pub fn select(&self, statement: &Statement) -> InventoryResult<Executed> {
        use Statement::*;
        let rows = match statement {
            SelectFile { id } => self.files.get(id).cloned().map(Row::File).into_iter().collect(),
            SelectFiles => self.files.values().cloned().map(Row::File).collect(),
            SelectDisk { id } => self.disks.get(id).cloned().map(Row::Disk).into_iter().collect(),
            SelectDisks => self.disks.values().cloned().map(Row::Disk).collect(),
            SelectRam { id } => self.rams.get(id).cloned().map(Row::Ram).into_iter().collect(),
            SelectRams => self.rams.values().cloned().map(Row::Ram).collect(),
            SelectFilePlacements { file_id, disk_id } => {
                let pairs: Vec<(i64, i64)> = match (file_id, disk_id) {
                    (Some(file_id), Some(disk_id)) => self
                        .file_placements
                        .contains(*file_id, *disk_id)
                        .then_some((*file_id, *disk_id))
                        .into_iter()
                        .collect(),
                    (Some(file_id), None) => self
                        .file_placements
                        .rights_of(*file_id)
                        .map(|disk_id| (*file_id, disk_id))
                        .collect(),
                    (None, Some(disk_id)) => self
                        .file_placements
                        .lefts_of(*disk_id)
                        .map(|file_id| (file_id, *disk_id))
                        .collect(),
                    (None, None) => self.file_placements.pairs().collect(),
                };
                pairs
                    .into_iter()
                    .map(|(file_id, disk_id)| Row::FilePlacement(FilePlacement::new(file_id, disk_id)))
                    .collect()
            }
            SelectRamPlacements { disk_id } => {
                let pairs: Vec<(i64, i64)> = match disk_id {
                    Some(disk_id) => self
                        .ram_placements
                        .lefts_of(*disk_id)
                        .map(|ram_id| (ram_id, *disk_id))
                        .collect(),
                    None => self.ram_placements.pairs().collect(),
                };
                pairs
                    .into_iter()
                    .map(|(ram_id, disk_id)| Row::RamPlacement(RamPlacement::new(ram_id, disk_id)))
                    .collect()
            }
            other => {
                return Err(anyhow!("Statement: {other:?} is not a query.").into());
            }
        };
        Ok(Executed::selected(rows))
    }

    /// Apply a statement. On error nothing has been changed.
    pub fn apply(&mut self, statement: Statement) -> InventoryResult<Executed> {
        use Statement::*;
        let rows_affected = match statement {
            InsertFile(file) => {
                file.check()?;
                if self.files.contains_key(&file.id) {
                    return Err(unique("files", file.id));
                }
                self.files.insert(file.id, file);
                1
            }
            DeleteFile { id } => match self.files.remove(&id) {
                Some(_) => {
                    self.file_placements.remove_left(id);
                    1
                }
                None => 0,
            },
            InsertDisk(disk) => {
                disk.check()?;
                if self.disks.contains_key(&disk.id) {
                    return Err(unique("disks", disk.id));
                }
                self.disks.insert(disk.id, disk);
                1
            }
            DeleteDisk { id } => match self.disks.remove(&id) {
                Some(_) => {
                    self.file_placements.remove_right(id);
                    self.ram_placements.remove_right(id);
                    1
                }
                None => 0,
            },
            AdjustFreeSpace { disk_id, delta } => match self.disks.get_mut(&disk_id) {
                Some(disk) => {
                    let free_space = disk
                        .free_space
                        .checked_add(delta)
                        .filter(|free_space| *free_space >= 0)
                        .ok_or(InventoryException::CheckViolation {
                            constraint: "free_space >= 0",
                        })?;
                    disk.free_space = free_space;
                    1
                }
                None => 0,
            },
            InsertRam(ram) => {
                ram.check()?;
                if self.rams.contains_key(&ram.id) {
                    return Err(unique("rams", ram.id));
                }
                self.rams.insert(ram.id, ram);
                1
            }
            DeleteRam { id } => match self.rams.remove(&id) {
                Some(_) => {
                    self.ram_placements.remove_left(id);
                    1
                }
                None => 0,
            },
            InsertFilePlacement(FilePlacement { file_id, disk_id }) => {
                if !self.files.contains_key(&file_id) {
                    return Err(dangling(FILES_IN_DISKS, "file", file_id));
                }
                if !self.disks.contains_key(&disk_id) {
                    return Err(dangling(FILES_IN_DISKS, "disk", disk_id));
                }
                if !self.file_placements.insert(file_id, disk_id) {
                    return Err(InventoryException::UniqueViolation {
                        table: FILES_IN_DISKS,
                        key: format!("({file_id}, {disk_id})"),
                    });
                }
                1
            }
            DeleteFilePlacement(FilePlacement { file_id, disk_id }) => {
                u64::from(self.file_placements.remove(file_id, disk_id))
            }
            InsertRamPlacement(RamPlacement { ram_id, disk_id }) => {
                if !self.rams.contains_key(&ram_id) {
                    return Err(dangling(RAMS_IN_DISKS, "ram", ram_id));
                }
                if !self.disks.contains_key(&disk_id) {
                    return Err(dangling(RAMS_IN_DISKS, "disk", disk_id));
                }
                if !self.ram_placements.insert(ram_id, disk_id) {
                    return Err(InventoryException::UniqueViolation {
                        table: RAMS_IN_DISKS,
                        key: format!("({ram_id}, {disk_id})"),
                    });
                }
                1
            }
            DeleteRamPlacement(RamPlacement { ram_id, disk_id }) => {
                u64::from(self.ram_placements.remove(ram_id, disk_id))
            }
            query => return self.select(&query),
        };
        Ok(Executed::affected(rows_affected))
    }
}

fn unique(table: &'static str, id: i64) -> InventoryException {
    InventoryException::UniqueViolation {
        table,
        key: id.to_string(),
    }
}

fn dangling(table: &'static str, referenced: &'static str, id: i64) -> InventoryException {
    InventoryException::ForeignKeyViolation {
        table,
        referenced,
        id,
    }
}
