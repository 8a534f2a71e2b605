//! Read the mount table of a unix host and the capacity of the
//! filesystem holding any path.

mod error;
mod mount;
mod stat;
mod units;

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
mod mntinfo;
#[cfg(any(
    test,
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
))]
mod options;
#[cfg(any(target_os = "solaris", target_os = "illumos"))]
mod mnttab;
#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "solaris",
    target_os = "illumos",
)))]
mod mntent;

pub use {
    error::{Error, Result},
    mount::{mount_point, mounts, MountInfo},
    stat::{stat, Stats, NOSUID, RDONLY},
    units::{to_gigabytes, to_kilobytes, to_megabytes},
};

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
pub use mntinfo::MountIter;
#[cfg(any(target_os = "solaris", target_os = "illumos"))]
pub use mnttab::MountIter;
#[cfg(not(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "solaris",
    target_os = "illumos",
)))]
pub use mntent::MountIter;

#[cfg(any(target_os = "solaris", target_os = "illumos"))]
pub use stat::NOTRUNC;
