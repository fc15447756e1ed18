//! Cross-platform operating system primitives behind one import.
//!
//! ```no_run
//! use hostkit::{create_directories, list_entries_recursive, unzip_to_folder};
//!
//! create_directories("presets/vendor");
//! unzip_to_folder("bundle.zip", "presets/vendor").unwrap();
//! for entry in list_entries_recursive("presets", 2) {
//!     println!("{}", entry.display());
//! }
//! ```
//!
//! Filesystem helpers, thread naming and shell launching are best-effort and
//! return nothing; only [`unzip_to_folder`] and [`run_process_detached`]
//! report failure.

pub use hostkit_archive as archive;
pub use hostkit_fs as fs;
pub use hostkit_platform as platform;

pub use hostkit_archive::{list_archive, unzip_to_folder, unzip_to_folder_with};
pub use hostkit_fs::{
    copy_file, create_directories, create_directory, is_directory, is_file, list_entries,
    list_entries_recursive, move_file, remove_directories, remove_directory,
};
pub use hostkit_platform::{
    Backend, Native, logical_core_count, nanoseconds_monotonic, open_browser, open_folder,
    operating_system_info, run_process_detached, set_thread_name, stack_trace,
};
