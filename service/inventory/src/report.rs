use std::{
    cmp::Reverse,
    collections::{BTreeMap, BTreeSet},
};

use domain_inventory::model::entity::{Disk, File, FilePlacement, Ram, RamPlacement};

/// How many ids each ranking report returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    /// Files that fit a disk, with or without its RAM.
    pub files: usize,
    /// Most available disks.
    pub disks: usize,
    /// Close files.
    pub close_files: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            files: 5,
            disks: 5,
            close_files: 10,
        }
    }
}

/// Committed inventory state read in a single transaction.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    files: BTreeMap<i64, File>,
    disks: BTreeMap<i64, Disk>,
    rams: BTreeMap<i64, Ram>,
    /// disk id -> ids of the files placed on it
    files_on_disk: BTreeMap<i64, BTreeSet<i64>>,
    /// file id -> ids of the disks it is placed on
    disks_of_file: BTreeMap<i64, BTreeSet<i64>>,
    /// disk id -> ids of the RAM modules attached to it
    rams_on_disk: BTreeMap<i64, BTreeSet<i64>>,
}

impl Inventory {
    pub fn new(
        files: Vec<File>,
        disks: Vec<Disk>,
        rams: Vec<Ram>,
        file_placements: Vec<FilePlacement>,
        ram_placements: Vec<RamPlacement>,
    ) -> Self {
        let mut inventory = Self {
            files: files.into_iter().map(|file| (file.id, file)).collect(),
            disks: disks.into_iter().map(|disk| (disk.id, disk)).collect(),
            rams: rams.into_iter().map(|ram| (ram.id, ram)).collect(),
            ..Default::default()
        };
        for FilePlacement { file_id, disk_id } in file_placements {
            inventory.files_on_disk.entry(disk_id).or_default().insert(file_id);
            inventory.disks_of_file.entry(file_id).or_default().insert(disk_id);
        }
        for RamPlacement { ram_id, disk_id } in ram_placements {
            inventory.rams_on_disk.entry(disk_id).or_default().insert(ram_id);
        }
        inventory
    }

    fn placed_files(&self, disk_id: i64) -> impl Iterator<Item = &File> + '_ {
        self.files_on_disk
            .get(&disk_id)
            .into_iter()
            .flatten()
            .filter_map(|file_id| self.files.get(file_id))
    }

    fn attached_rams(&self, disk_id: i64) -> impl Iterator<Item = &Ram> + '_ {
        self.rams_on_disk
            .get(&disk_id)
            .into_iter()
            .flatten()
            .filter_map(|ram_id| self.rams.get(ram_id))
    }

    /// Files no larger than `space`.
    fn fitting(&self, space: i64) -> impl DoubleEndedIterator<Item = i64> + '_ {
        self.files.values().filter(move |file| file.size <= space).map(|file| file.id)
    }

    pub fn average_file_size_on_disk(&self, disk_id: i64) -> f64 {
        let (count, total) = self
            .placed_files(disk_id)
            .fold((0u64, 0i128), |(count, total), file| (count + 1, total + file.size as i128));
        if count == 0 {
            return 0.0;
        }
        total as f64 / count as f64
    }

    pub fn disk_total_ram(&self, disk_id: i64) -> i64 {
        self.attached_rams(disk_id).fold(0i64, |total, ram| total.saturating_add(ram.size))
    }

    /// Σ disk cost × file size over every placement of a file of `file_type`.
    pub fn cost_for_type(&self, file_type: &str) -> i64 {
        self.disks_of_file
            .iter()
            .filter_map(|(file_id, disk_ids)| {
                self.files
                    .get(file_id)
                    .filter(|file| file.file_type == file_type)
                    .map(|file| (file, disk_ids))
            })
            .flat_map(|(file, disk_ids)| {
                disk_ids
                    .iter()
                    .filter_map(|disk_id| self.disks.get(disk_id))
                    .map(move |disk| disk.cost.saturating_mul(file.size))
            })
            .fold(0i64, i64::saturating_add)
    }

    /// Files that fit the disk's free space whether placed or not, highest id first.
    pub fn files_can_be_added_to_disk(&self, disk_id: i64, limit: usize) -> Vec<i64> {
        let Some(disk) = self.disks.get(&disk_id) else {
            return vec![];
        };
        self.fitting(disk.free_space).rev().take(limit).collect()
    }

    /// Files that fit the disk's free space plus its attached RAM, lowest id first.
    pub fn files_can_be_added_to_disk_and_ram(&self, disk_id: i64, limit: usize) -> Vec<i64> {
        let Some(disk) = self.disks.get(&disk_id) else {
            return vec![];
        };
        let space = disk.free_space.saturating_add(self.disk_total_ram(disk_id));
        self.fitting(space).take(limit).collect()
    }

    pub fn is_company_exclusive(&self, disk_id: i64) -> bool {
        let Some(disk) = self.disks.get(&disk_id) else {
            return true;
        };
        self.attached_rams(disk_id).all(|ram| ram.company == disk.company)
    }

    /// Disks holding at least two distinct files, ascending.
    pub fn conflicting_disks(&self) -> Vec<i64> {
        self.files_on_disk
            .iter()
            .filter(|(disk_id, file_ids)| file_ids.len() >= 2 && self.disks.contains_key(*disk_id))
            .map(|(disk_id, _)| *disk_id)
            .collect()
    }

    /// Disks ranked by how many files fit their free space, then by speed, then by id.
    pub fn most_available_disks(&self, limit: usize) -> Vec<i64> {
        let mut ranked: Vec<(usize, &Disk)> = self
            .disks
            .values()
            .map(|disk| (self.fitting(disk.free_space).count(), disk))
            .collect();
        ranked.sort_by_key(|(count, disk)| (Reverse(*count), Reverse(disk.speed), disk.id));
        ranked.into_iter().take(limit).map(|(_, disk)| disk.id).collect()
    }

    /// Other files sharing disks with at least half of `file_id`'s placements.
    ///
    /// A file placed nowhere is close to every other file. An unknown file has no close files.
    pub fn close_files(&self, file_id: i64, limit: usize) -> Vec<i64> {
        if !self.files.contains_key(&file_id) {
            return vec![];
        }
        let empty = BTreeSet::new();
        let target = self.disks_of_file.get(&file_id).unwrap_or(&empty);
        self.files
            .keys()
            .filter(|other| **other != file_id)
            .filter(|other| {
                let shared = self
                    .disks_of_file
                    .get(*other)
                    .map_or(0, |disks| disks.intersection(target).count());
                2 * shared >= target.len()
            })
            .take(limit)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(file_id: i64, disk_id: i64) -> FilePlacement {
        FilePlacement::new(file_id, disk_id)
    }

    fn rp(ram_id: i64, disk_id: i64) -> RamPlacement {
        RamPlacement::new(ram_id, disk_id)
    }

    #[test]
    fn cost_for_type_multiplies_disk_cost_by_size() {
        let inventory = Inventory::new(
            vec![File::new(1, "pdf", 10), File::new(2, "pdf", 20), File::new(3, "txt", 7)],
            vec![Disk::new(1, "wd", 1, 100, 5), Disk::new(2, "wd", 1, 100, 2)],
            vec![],
            vec![fp(1, 1), fp(2, 1), fp(3, 1), fp(1, 2)],
            vec![],
        );
        assert_eq!(5 * 10 + 5 * 20 + 2 * 10, inventory.cost_for_type("pdf"));
        assert_eq!(0, inventory.cost_for_type("doc"));
    }

    #[test]
    fn average_is_zero_on_an_empty_disk() {
        let inventory = Inventory::new(
            vec![File::new(1, "pdf", 3), File::new(2, "pdf", 4)],
            vec![Disk::new(1, "wd", 1, 100, 5), Disk::new(2, "wd", 1, 100, 5)],
            vec![],
            vec![fp(1, 1), fp(2, 1)],
            vec![],
        );
        assert_eq!(3.5, inventory.average_file_size_on_disk(1));
        assert_eq!(0.0, inventory.average_file_size_on_disk(2));
        assert_eq!(0.0, inventory.average_file_size_on_disk(3));
    }

    #[test]
    fn fitting_files_are_truncated_in_both_orders() {
        let files = (1..=8).map(|id| File::new(id, "pdf", id * 10)).collect();
        let inventory = Inventory::new(
            files,
            vec![Disk::new(1, "wd", 1, 70, 1)],
            vec![Ram::new(1, "wd", 5), Ram::new(2, "hp", 10)],
            vec![fp(7, 1)],
            vec![rp(1, 1), rp(2, 1)],
        );
        assert_eq!(vec![7, 6, 5, 4, 3], inventory.files_can_be_added_to_disk(1, 5));
        assert_eq!(vec![1, 2, 3, 4, 5], inventory.files_can_be_added_to_disk_and_ram(1, 5));
        assert_eq!(
            vec![1, 2, 3, 4, 5, 6, 7, 8],
            inventory.files_can_be_added_to_disk_and_ram(1, 10)
        );
        assert_eq!(15, inventory.disk_total_ram(1));
        assert!(inventory.files_can_be_added_to_disk(2, 5).is_empty());
    }

    #[test]
    fn exclusivity_is_vacuous_without_ram() {
        let inventory = Inventory::new(
            vec![],
            vec![Disk::new(1, "wd", 1, 70, 1), Disk::new(2, "wd", 1, 70, 1)],
            vec![Ram::new(1, "wd", 5), Ram::new(2, "hp", 10)],
            vec![],
            vec![rp(1, 1), rp(2, 2)],
        );
        assert!(inventory.is_company_exclusive(1));
        assert!(!inventory.is_company_exclusive(2));
        assert!(inventory.is_company_exclusive(3));
    }

    #[test]
    fn most_available_breaks_ties_by_speed_then_id() {
        let inventory = Inventory::new(
            vec![File::new(1, "pdf", 10), File::new(2, "pdf", 20), File::new(3, "pdf", 30)],
            vec![
                Disk::new(1, "wd", 1, 30, 1),
                Disk::new(2, "wd", 9, 30, 1),
                Disk::new(3, "wd", 9, 35, 1),
                Disk::new(4, "wd", 50, 10, 1),
                Disk::new(5, "wd", 50, 5, 1),
                Disk::new(6, "wd", 1, 0, 1),
            ],
            vec![],
            vec![],
            vec![],
        );
        assert_eq!(vec![2, 3, 1, 4, 5], inventory.most_available_disks(5));
    }

    #[test]
    fn conflicting_disks_need_two_files() {
        let inventory = Inventory::new(
            vec![File::new(1, "pdf", 1), File::new(2, "pdf", 1)],
            vec![Disk::new(3, "wd", 1, 30, 1), Disk::new(1, "wd", 1, 30, 1)],
            vec![],
            vec![fp(1, 3), fp(2, 3), fp(1, 1)],
            vec![],
        );
        assert_eq!(vec![3], inventory.conflicting_disks());
    }

    #[test]
    fn close_files_share_half_of_the_placements() {
        let inventory = Inventory::new(
            (1..=5).map(|id| File::new(id, "pdf", 1)).collect(),
            (1..=3).map(|id| Disk::new(id, "wd", 1, 30, 1)).collect(),
            vec![],
            vec![fp(1, 1), fp(1, 2), fp(2, 1), fp(3, 3), fp(4, 1), fp(4, 2)],
            vec![],
        );
        assert_eq!(vec![2, 4], inventory.close_files(1, 10));
        // File 5 is placed nowhere, so every other file is close to it.
        assert_eq!(vec![1, 2, 3, 4], inventory.close_files(5, 10));
        assert_eq!(vec![1, 2], inventory.close_files(5, 2));
        assert!(inventory.close_files(9, 10).is_empty());
    }
}
