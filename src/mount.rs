use {
    super::*,
    std::{
        fs,
        os::unix::fs::MetadataExt,
        path::{Path, PathBuf},
        time::SystemTime,
    },
};

/// A mounted filesystem, as one entry of the host's mount table
///
/// Entries are read anew on every enumeration, there's no caching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountInfo {
    /// the device or resource backing the mount, eg "/dev/sda1" or "proc"
    pub name: String,
    /// where the filesystem is attached
    pub mount_point: PathBuf,
    /// the filesystem type, eg "ext4", "nfs", "proc"
    pub mount_type: String,
    /// comma separated options, eg "rw,relatime"
    pub options: String,
    /// when the filesystem was mounted, on systems recording it
    pub mount_time: Option<SystemTime>,
    /// dump frequency in days, on mntent style tables
    pub dump_frequency: Option<i32>,
    /// fsck pass number, on mntent style tables
    pub pass_number: Option<i32>,
}

impl MountInfo {
    /// same as `name`
    pub fn fsname(&self) -> &str {
        &self.name
    }
    /// same as `mount_point`
    pub fn dir(&self) -> &Path {
        &self.mount_point
    }
    /// same as `options`
    pub fn opts(&self) -> &str {
        &self.options
    }
    /// same as `dump_frequency`
    pub fn freq(&self) -> Option<i32> {
        self.dump_frequency
    }
    /// same as `pass_number`
    pub fn passno(&self) -> Option<i32> {
        self.pass_number
    }
}

/// read the whole mount table
///
/// Use `MountIter::open` instead to consume entries one by one.
pub fn mounts() -> Result<Vec<MountInfo>> {
    MountIter::open()?.collect()
}

/// find the mount point of the filesystem holding `file`
///
/// The file's device id is compared to the one of every mount point,
/// which handles bind mounts and overlapping mounts. When several
/// entries share the device id, the first one in table order wins.
/// When no entry matches, the path is returned unchanged.
pub fn mount_point<P: AsRef<Path>>(file: P) -> Result<PathBuf> {
    let file = file.as_ref();
    let device = device_of(file)?;
    for entry in MountIter::open()? {
        let entry = entry?;
        match device_of(&entry.mount_point) {
            Ok(dev) if dev == device => {
                return Ok(entry.mount_point);
            }
            Ok(_) => {}
            Err(e) => {
                // an unreachable mount point (permissions, stale remote)
                // doesn't disqualify the other entries
                log::debug!("can't stat {:?}: {}", entry.mount_point, e);
            }
        }
    }
    Ok(file.to_path_buf())
}

/// id of the device a path lives on, as of `MetadataExt.dev()`
fn device_of(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|md| md.dev())
        .map_err(|source| Error::StatFailed {
            path: path.to_path_buf(),
            source,
        })
}

#[test]
fn test_mounts_twice_yields_same_entries() {
    let first = mounts().unwrap();
    let second = mounts().unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_mount_point_of_root() {
    assert_eq!(mount_point("/").unwrap(), PathBuf::from("/"));
}

#[test]
fn test_mount_point_shares_device_with_file() {
    let file = Path::new("/etc/hosts");
    let found = mount_point(file).unwrap();
    assert_eq!(device_of(&found).unwrap(), device_of(file).unwrap());
}

#[test]
fn test_mount_point_of_scratch_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let found = mount_point(file.path()).unwrap();
    assert_eq!(
        device_of(&found).unwrap(),
        device_of(file.path()).unwrap(),
    );
}
