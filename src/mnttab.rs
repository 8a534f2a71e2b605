//! The mount table driver for solarish systems, reading the
//! line oriented `/etc/mnttab` table.

use {
    super::*,
    std::{
        fs::File,
        io::{BufRead, BufReader, Lines},
        path::PathBuf,
        str::{FromStr, SplitWhitespace},
        time::{Duration, UNIX_EPOCH},
    },
};

const MOUNT_TABLE: &str = "/etc/mnttab";

/// Iterator on the entries of the mount table
///
/// Entries are read and parsed one line at a time; the table
/// file is closed on drop.
pub struct MountIter {
    lines: Lines<BufReader<File>>,
}

impl MountIter {
    /// open the mount table
    pub fn open() -> Result<Self> {
        let file = File::open(MOUNT_TABLE).map_err(|source| Error::MountTableUnavailable {
            table: MOUNT_TABLE,
            source,
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for MountIter {
    type Item = Result<MountInfo>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            return match self.lines.next()? {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    Some(line.parse())
                }
                Err(source) => Some(Err(Error::MountTableUnavailable {
                    table: MOUNT_TABLE,
                    source,
                })),
            };
        }
    }
}

impl FromStr for MountInfo {
    type Err = Error;
    /// parse a mnttab line: special, mount point, fstype and options,
    /// then the mount time in epoch seconds
    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let tokens = &mut tokens;
        let name = next(tokens, "special")?.to_string();
        let mount_point = PathBuf::from(next(tokens, "mountp")?);
        let mount_type = next(tokens, "fstype")?.to_string();
        let options = next(tokens, "mntopts")?.to_string();
        let seconds: u64 = next(tokens, "time")?
            .parse()
            .map_err(|_| Error::MalformedRecord { field: "time" })?;
        Ok(Self {
            name,
            mount_point,
            mount_type,
            options,
            mount_time: Some(UNIX_EPOCH + Duration::from_secs(seconds)),
            dump_frequency: None,
            pass_number: None,
        })
    }
}

fn next<'a, 'b>(split: &'b mut SplitWhitespace<'a>, field: &'static str) -> Result<&'a str> {
    split.next().ok_or(Error::MalformedRecord { field })
}

#[test]
fn test_parse_mnttab_line() {
    let info: MountInfo = "/dev/dsk/c0t0d0s0\t/\tufs\trw,intr,largefiles,xattr\t1228946843"
        .parse()
        .unwrap();
    assert_eq!(info.name, "/dev/dsk/c0t0d0s0");
    assert_eq!(info.mount_point, PathBuf::from("/"));
    assert_eq!(info.mount_type, "ufs");
    assert_eq!(info.options, "rw,intr,largefiles,xattr");
    assert_eq!(
        info.mount_time,
        Some(UNIX_EPOCH + Duration::from_secs(1228946843)),
    );
    assert_eq!(info.dump_frequency, None);
    assert_eq!(info.pass_number, None);
}

#[test]
fn test_line_without_time_is_malformed() {
    match "swap /tmp tmpfs xattr".parse::<MountInfo>() {
        Err(Error::MalformedRecord { field }) => assert_eq!(field, "time"),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}
