use {
    crate::error::*,
    std::{
        ffi::CString,
        io, mem,
        os::unix::ffi::OsStrExt,
        path::{Path, PathBuf},
    },
};

/// bit of `Stats::flags` set when the filesystem is read-only
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const RDONLY: u64 = libc::ST_RDONLY as u64;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const RDONLY: u64 = 0x0001;

/// bit of `Stats::flags` set when the filesystem ignores
/// suid and sgid semantics
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const NOSUID: u64 = libc::ST_NOSUID as u64;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub const NOSUID: u64 = 0x0002;

/// bit of `Stats::flags` set when the filesystem rejects file names
/// longer than `name_max` instead of truncating them
#[cfg(any(target_os = "solaris", target_os = "illumos"))]
pub const NOTRUNC: u64 = 0x0004;

/// Capacity and usage of the filesystem holding a path
///
/// The semantics is the one of statvfs: all counts are in units
/// of `fragment_size`.
#[derive(Debug, Clone)]
pub struct Stats {
    /// the queried path, verbatim
    pub path: PathBuf,
    /// preferred I/O block size, in bytes
    pub block_size: u64,
    /// fundamental allocation unit, in bytes
    pub fragment_size: u64,
    /// number of blocks
    pub blocks: i64,
    /// number of free blocks
    pub blocks_free: i64,
    /// number of free blocks for unprivileged users
    pub blocks_available: i64,
    /// number of inodes
    pub files: i64,
    /// number of free inodes
    pub files_free: i64,
    /// number of free inodes for unprivileged users
    pub files_available: i64,
    /// opaque filesystem identifier
    pub filesystem_id: u64,
    /// bitmask to test against `RDONLY`, `NOSUID`, etc.
    pub flags: u64,
    /// maximal length of a file name
    pub name_max: u64,
    /// filesystem type name, on systems reporting it
    pub base_type: Option<String>,
}

/// query the capacity and usage of the filesystem holding `path`
///
/// The path doesn't have to be a mount point: any existing path
/// resolves to the filesystem containing it.
pub fn stat<P: AsRef<Path>>(path: P) -> Result<Stats> {
    let path = path.as_ref();
    let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| Error::StatFailed {
        path: path.to_path_buf(),
        source: io::Error::from(io::ErrorKind::InvalidInput),
    })?;
    unsafe {
        let mut statvfs = mem::MaybeUninit::<libc::statvfs>::uninit();
        let code = libc::statvfs(c_path.as_ptr(), statvfs.as_mut_ptr());
        if code != 0 {
            return Err(Error::StatFailed {
                path: path.to_path_buf(),
                source: io::Error::last_os_error(),
            });
        }
        let statvfs = statvfs.assume_init();
        Ok(Stats {
            path: path.to_path_buf(),
            block_size: block_size_in_bytes(statvfs.f_bsize as u64),
            fragment_size: statvfs.f_frsize as u64,
            blocks: statvfs.f_blocks as i64,
            blocks_free: statvfs.f_bfree as i64,
            blocks_available: statvfs.f_bavail as i64,
            files: statvfs.f_files as i64,
            files_free: statvfs.f_ffree as i64,
            files_available: statvfs.f_favail as i64,
            filesystem_id: statvfs.f_fsid as u64,
            flags: statvfs.f_flag as u64,
            name_max: statvfs.f_namemax as u64,
            base_type: base_type(&statvfs),
        })
    }
}

/// the f_bsize reported by mac is pre-multiplied by 256
#[cfg(any(target_os = "macos", target_os = "ios"))]
fn block_size_in_bytes(bsize: u64) -> u64 {
    bsize / 256
}
#[cfg(not(any(target_os = "macos", target_os = "ios")))]
fn block_size_in_bytes(bsize: u64) -> u64 {
    bsize
}

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
fn base_type(statvfs: &libc::statvfs) -> Option<String> {
    let name = unsafe { std::ffi::CStr::from_ptr(statvfs.f_basetype.as_ptr()) };
    Some(name.to_string_lossy().into_owned())
}
#[cfg(not(any(target_os = "solaris", target_os = "illumos")))]
fn base_type(_statvfs: &libc::statvfs) -> Option<String> {
    None
}

impl Stats {
    /// total capacity, in bytes
    pub fn bytes_total(&self) -> u64 {
        self.blocks as u64 * self.fragment_size
    }
    /// free space, in bytes
    pub fn bytes_free(&self) -> u64 {
        self.blocks_free as u64 * self.fragment_size
    }
    /// free space for unprivileged users, in bytes
    pub fn bytes_available(&self) -> u64 {
        self.blocks_available as u64 * self.fragment_size
    }
    /// used space, in bytes, including unreadable fs metadata
    pub fn bytes_used(&self) -> u64 {
        self.bytes_total() - self.bytes_free()
    }
    /// share of the capacity which is used, in percents
    pub fn percent_used(&self) -> f64 {
        if self.blocks == 0 {
            0.0
        } else {
            100.0 - 100.0 * self.bytes_free() as f64 / self.bytes_total() as f64
        }
    }
    /// same as `files`
    pub fn inodes(&self) -> i64 {
        self.files
    }
    /// same as `files_free`
    pub fn inodes_free(&self) -> i64 {
        self.files_free
    }
    /// same as `files_available`
    pub fn inodes_available(&self) -> i64 {
        self.files_available
    }
}

#[test]
fn test_stat_root() {
    let stats = stat("/").unwrap();
    assert_eq!(stats.path, PathBuf::from("/"));
    assert!(stats.block_size > 0);
    assert!(stats.fragment_size > 0);
    assert!(stats.blocks_free <= stats.blocks);
    assert!(stats.blocks_available <= stats.blocks);
    assert!(stats.bytes_used() <= stats.bytes_total());
    assert!(stats.percent_used() >= 0.0 && stats.percent_used() <= 100.0);
}

#[test]
fn test_stat_missing_path() {
    match stat("/path/does/not/exist") {
        Err(Error::StatFailed { path, source }) => {
            assert_eq!(path, PathBuf::from("/path/does/not/exist"));
            assert_ne!(source.raw_os_error().unwrap_or(0), 0);
        }
        other => panic!("expected StatFailed, got {:?}", other),
    }
}

#[test]
fn test_block_size_scaling() {
    if cfg!(any(target_os = "macos", target_os = "ios")) {
        assert_eq!(block_size_in_bytes(1_048_576), 4_096);
    } else {
        assert_eq!(block_size_in_bytes(4_096), 4_096);
    }
}
