//! The mount table driver for BSD family systems, where the kernel
//! fills an in-memory array of statfs records through getmntinfo.

use {
    super::*,
    crate::options,
    std::{ffi::CStr, io, path::PathBuf, ptr},
};

/// Iterator on the entries of the mount table
///
/// The system query is deferred to the first `next` call.
pub struct MountIter {
    state: State,
}

enum State {
    Unpopulated,
    Populated {
        entries: *const libc::statfs,
        count: usize,
        cursor: usize,
    },
    Exhausted,
}

impl MountIter {
    /// get a handle on the mount table; nothing is queried yet
    pub fn open() -> Result<Self> {
        Ok(Self {
            state: State::Unpopulated,
        })
    }
}

impl Iterator for MountIter {
    type Item = Result<MountInfo>;
    fn next(&mut self) -> Option<Self::Item> {
        if let State::Unpopulated = self.state {
            match populate() {
                Ok((entries, count)) => {
                    self.state = State::Populated {
                        entries,
                        count,
                        cursor: 0,
                    };
                }
                Err(e) => {
                    self.state = State::Exhausted;
                    return Some(Err(e));
                }
            }
        }
        if let State::Populated {
            entries,
            count,
            ref mut cursor,
        } = self.state
        {
            if *cursor < count {
                let entry = unsafe { &*entries.add(*cursor) };
                *cursor += 1;
                return Some(Ok(mount_info(entry)));
            }
        }
        self.state = State::Exhausted;
        None
    }
}

/// make the kernel fill its array of mounted filesystems and
/// return it with its element count
fn populate() -> Result<(*const libc::statfs, usize)> {
    let mut entries: *mut libc::statfs = ptr::null_mut();
    let count = unsafe { libc::getmntinfo(&mut entries, libc::MNT_NOWAIT) };
    if count <= 0 {
        return Err(Error::MountTableUnavailable {
            table: "getmntinfo",
            source: io::Error::last_os_error(),
        });
    }
    Ok((entries as *const libc::statfs, count as usize))
}

fn mount_info(entry: &libc::statfs) -> MountInfo {
    MountInfo {
        name: array_to_string(&entry.f_mntfromname),
        mount_point: PathBuf::from(array_to_string(&entry.f_mntonname)),
        mount_type: array_to_string(&entry.f_fstypename),
        options: options::decode(entry.f_flags as u64, options::MOUNT_OPTIONS),
        mount_time: None,
        dump_frequency: None,
        pass_number: None,
    }
}

/// read a nul terminated fixed-size C char array
fn array_to_string(chars: &[libc::c_char]) -> String {
    unsafe { CStr::from_ptr(chars.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}
