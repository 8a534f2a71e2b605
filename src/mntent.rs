//! The mount table driver for systems listing their mounts in a
//! mntent style text table, `/etc/mtab` being the traditional one.

use {
    super::*,
    lazy_regex::*,
    std::{
        fs::File,
        io::{BufRead, BufReader, Lines},
        path::PathBuf,
        str::{FromStr, SplitWhitespace},
    },
};

/// tables to try in order: modern systems often only have the
/// kernel provided one
const MOUNT_TABLES: &[&str] = &["/etc/mtab", "/proc/mounts"];

/// Iterator on the entries of the mount table
///
/// Entries are read and parsed one line at a time; the table
/// file is closed on drop.
pub struct MountIter {
    table: &'static str,
    lines: Lines<BufReader<File>>,
}

impl MountIter {
    /// open the mount table
    pub fn open() -> Result<Self> {
        let mut last_table = MOUNT_TABLES[0];
        let mut error = None;
        for &table in MOUNT_TABLES {
            match File::open(table) {
                Ok(file) => {
                    log::debug!("reading mounts from {}", table);
                    return Ok(Self {
                        table,
                        lines: BufReader::new(file).lines(),
                    });
                }
                Err(e) => {
                    last_table = table;
                    error = Some(e);
                }
            }
        }
        Err(Error::MountTableUnavailable {
            table: last_table,
            source: error.unwrap(), // there's at least one candidate table
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
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    Some(line.parse())
                }
                Err(source) => Some(Err(Error::MountTableUnavailable {
                    table: self.table,
                    source,
                })),
            };
        }
    }
}

impl FromStr for MountInfo {
    type Err = Error;
    /// parse an mtab line: fsname, dir, type and options, then the
    /// dump frequency and the fsck pass number
    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let tokens = &mut tokens;
        let name = decode_octal_escapes(next(tokens, "fsname")?);
        let mount_point = PathBuf::from(decode_octal_escapes(next(tokens, "dir")?));
        let mount_type = decode_octal_escapes(next(tokens, "type")?);
        let options = decode_octal_escapes(next(tokens, "options")?);
        let dump_frequency = Some(parse_or_zero(tokens.next(), "freq")?);
        let pass_number = Some(parse_or_zero(tokens.next(), "passno")?);
        Ok(Self {
            name,
            mount_point,
            mount_type,
            options,
            mount_time: None,
            dump_frequency,
            pass_number,
        })
    }
}

fn next<'a, 'b>(split: &'b mut SplitWhitespace<'a>, field: &'static str) -> Result<&'a str> {
    split.next().ok_or(Error::MalformedRecord { field })
}

/// getmntent defaults the numeric fields to 0 on tables not
/// carrying them
fn parse_or_zero(token: Option<&str>, field: &'static str) -> Result<i32> {
    match token {
        Some(token) => token.parse().map_err(|_| Error::MalformedRecord { field }),
        None => Ok(0),
    }
}

/// decode the ascii-octal encoded chars of a mount table field.
/// This is necessary because some chars are encoded. For example
/// the `/media/usb stick` mount point is written `/media/usb\040stick`
fn decode_octal_escapes(s: &str) -> String {
    let s = regex_replace_all!(r#"\\([0-3][0-7][0-7])"#, s, |_, n: &str| {
        let c = u8::from_str_radix(n, 8).unwrap() as char;
        c.to_string()
    });
    s.to_string()
}

#[test]
fn test_parse_mtab_line() {
    let info: MountInfo = "/dev/nvme0n1p2 / ext4 rw,relatime 0 0".parse().unwrap();
    assert_eq!(info.name, "/dev/nvme0n1p2");
    assert_eq!(info.mount_point, PathBuf::from("/"));
    assert_eq!(info.mount_type, "ext4");
    assert_eq!(info.options, "rw,relatime");
    assert_eq!(info.mount_time, None);
    assert_eq!(info.dump_frequency, Some(0));
    assert_eq!(info.pass_number, Some(0));
}

#[test]
fn test_parse_escaped_mount_point() {
    let info: MountInfo = r"/dev/sdb1 /media/usb\040stick vfat rw,nosuid 1 2"
        .parse()
        .unwrap();
    assert_eq!(info.mount_point, PathBuf::from("/media/usb stick"));
    assert_eq!(info.dump_frequency, Some(1));
    assert_eq!(info.pass_number, Some(2));
}

#[test]
fn test_parse_line_without_numeric_fields() {
    let info: MountInfo = "proc /proc proc rw".parse().unwrap();
    assert_eq!(info.dump_frequency, Some(0));
    assert_eq!(info.pass_number, Some(0));
}

#[test]
fn test_truncated_line_is_malformed() {
    match "/dev/sda1 /".parse::<MountInfo>() {
        Err(Error::MalformedRecord { field }) => assert_eq!(field, "type"),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}
