use crate::model::entity::{Disk, File, FilePlacement, Ram, RamPlacement};

/// The closed set of operations an inventory store executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    InsertFile(File),
    SelectFile { id: i64 },
    /// Deletes the file and cascades to its placements.
    DeleteFile { id: i64 },
    SelectFiles,

    InsertDisk(Disk),
    SelectDisk { id: i64 },
    /// Deletes the disk and cascades to every file and RAM placement on it.
    DeleteDisk { id: i64 },
    SelectDisks,
    /// Adds `delta` to the disk's free space. Affects no rows when the disk is absent and
    /// fails with a check violation when the result would be negative.
    AdjustFreeSpace { disk_id: i64, delta: i64 },

    InsertRam(Ram),
    SelectRam { id: i64 },
    DeleteRam { id: i64 },
    SelectRams,

    InsertFilePlacement(FilePlacement),
    DeleteFilePlacement(FilePlacement),
    /// Placements filtered by whichever side is given.
    SelectFilePlacements {
        file_id: Option<i64>,
        disk_id: Option<i64>,
    },

    InsertRamPlacement(RamPlacement),
    DeleteRamPlacement(RamPlacement),
    SelectRamPlacements { disk_id: Option<i64> },
}

impl Statement {
    /// Whether executing the statement leaves the store untouched.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Statement::SelectFile { .. }
                | Statement::SelectFiles
                | Statement::SelectDisk { .. }
                | Statement::SelectDisks
                | Statement::SelectRam { .. }
                | Statement::SelectRams
                | Statement::SelectFilePlacements { .. }
                | Statement::SelectRamPlacements { .. }
        )
    }
}

/// A row of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    File(File),
    Disk(Disk),
    Ram(Ram),
    FilePlacement(FilePlacement),
    RamPlacement(RamPlacement),
}

/// Result of executing one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Executed {
    pub rows_affected: u64,
    pub rows: Vec<Row>,
}

impl Executed {
    pub fn affected(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            rows: vec![],
        }
    }

    pub fn selected(rows: Vec<Row>) -> Self {
        Self {
            rows_affected: rows.len() as u64,
            rows,
        }
    }

    pub fn into_files(self) -> Vec<File> {
        self.rows
            .into_iter()
            .filter_map(|row| match row {
                Row::File(file) => Some(file),
                _ => None,
            })
            .collect()
    }

    pub fn into_disks(self) -> Vec<Disk> {
        self.rows
            .into_iter()
            .filter_map(|row| match row {
                Row::Disk(disk) => Some(disk),
                _ => None,
            })
            .collect()
    }

    pub fn into_rams(self) -> Vec<Ram> {
        self.rows
            .into_iter()
            .filter_map(|row| match row {
                Row::Ram(ram) => Some(ram),
                _ => None,
            })
            .collect()
    }

    pub fn into_file_placements(self) -> Vec<FilePlacement> {
        self.rows
            .into_iter()
            .filter_map(|row| match row {
                Row::FilePlacement(placement) => Some(placement),
                _ => None,
            })
            .collect()
    }

    pub fn into_ram_placements(self) -> Vec<RamPlacement> {
        self.rows
            .into_iter()
            .filter_map(|row| match row {
                Row::RamPlacement(placement) => Some(placement),
                _ => None,
            })
            .collect()
    }
}
