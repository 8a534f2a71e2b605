//! Turn the mount flags bitmask of getmntinfo entries into the
//! comma joined option string the text table formats provide natively.

/// list the names of the set bits of `flags`, comma joined,
/// in table order
///
/// A matched bit is cleared, so the scan stops as soon as no set
/// bit remains. Bits absent from the table are silently dropped.
pub(crate) fn decode(mut flags: u64, table: &[(u64, &'static str)]) -> String {
    let mut options = String::new();
    for &(bit, name) in table {
        if flags == 0 {
            break;
        }
        if flags & bit != 0 {
            if !options.is_empty() {
                options.push(',');
            }
            options.push_str(name);
            flags &= !bit;
        }
    }
    options
}

// The flag names below come from the BSD mount sources. Some flags
// only exist on some systems, hence the per-target tables.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) const MOUNT_OPTIONS: &[(u64, &'static str)] = &[
    (libc::MNT_ASYNC as u64, "asynchronous"),
    (libc::MNT_EXPORTED as u64, "NFS exported"),
    (libc::MNT_LOCAL as u64, "local"),
    (libc::MNT_NOEXEC as u64, "noexec"),
    (libc::MNT_NOSUID as u64, "nosuid"),
    (libc::MNT_QUOTA as u64, "with quotas"),
    (libc::MNT_RDONLY as u64, "read-only"),
    (libc::MNT_SYNCHRONOUS as u64, "synchronous"),
    (libc::MNT_UNION as u64, "union"),
    (libc::MNT_MULTILABEL as u64, "multilabel"),
    (libc::MNT_NOATIME as u64, "noatime"),
];

#[cfg(target_os = "freebsd")]
pub(crate) const MOUNT_OPTIONS: &[(u64, &'static str)] = &[
    (libc::MNT_ASYNC as u64, "asynchronous"),
    (libc::MNT_EXPORTED as u64, "NFS exported"),
    (libc::MNT_LOCAL as u64, "local"),
    (libc::MNT_NOEXEC as u64, "noexec"),
    (libc::MNT_NOSUID as u64, "nosuid"),
    (libc::MNT_QUOTA as u64, "with quotas"),
    (libc::MNT_RDONLY as u64, "read-only"),
    (libc::MNT_SYNCHRONOUS as u64, "synchronous"),
    (libc::MNT_UNION as u64, "union"),
    (libc::MNT_MULTILABEL as u64, "multilabel"),
    (libc::MNT_NOATIME as u64, "noatime"),
    (libc::MNT_NOSYMFOLLOW as u64, "nosymfollow"),
    (libc::MNT_NOCLUSTERR as u64, "noclusterr"),
    (libc::MNT_NOCLUSTERW as u64, "noclusterw"),
    (libc::MNT_SUIDDIR as u64, "suiddir"),
    (libc::MNT_SOFTDEP as u64, "soft-updates"),
    (libc::MNT_ACLS as u64, "acls"),
];

#[test]
fn test_decode_lists_names_in_table_order() {
    const TABLE: &[(u64, &'static str)] = &[
        (0x01, "read-only"),
        (0x02, "nosuid"),
        (0x08, "local"),
        (0x10, "noatime"),
    ];
    assert_eq!(decode(0x01, TABLE), "read-only");
    assert_eq!(decode(0x10 | 0x01, TABLE), "read-only,noatime");
    assert_eq!(decode(0x1b, TABLE), "read-only,nosuid,local,noatime");
}

#[test]
fn test_decode_drops_unknown_bits() {
    const TABLE: &[(u64, &'static str)] = &[(0x01, "read-only"), (0x02, "nosuid")];
    assert_eq!(decode(0, TABLE), "");
    assert_eq!(decode(0x04, TABLE), "");
    assert_eq!(decode(0x05, TABLE), "read-only");
}
