//! [`ConfigFile`]: a [`Store`] bound to a file on disk.
//!
//! Adds loading/saving, a "current section" cursor for short option lookups,
//! default values, and an opt-in autosave that is triggered explicitly through
//! [`ConfigFile::flush`], [`ConfigFile::close`] or [`ConfigFile::scoped`].
//!
//! ```no_run
//! use cfgfile_core::{ConfigFile, Flags};
//!
//! let mut cfg = ConfigFile::open("settings.cfg", Flags::default());
//! cfg.use_section("Window");
//! let width = cfg.option_mut("width").to_int();
//! cfg.option_mut("height").assign("600")?;
//! cfg.write_to_file(None)?;
//! # Ok::<(), cfgfile_core::CfgError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{CfgError, Result};
use crate::parser::Parser;
use crate::serializer;
use crate::store::{Section, Store};
use crate::value::Value;

/// Behaviour switches for a [`ConfigFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Emit `tracing` warnings for out-of-range options and failed loads.
    pub warnings: bool,
    /// Write back to the last loaded file on [`ConfigFile::flush`] / [`ConfigFile::close`].
    pub autosave: bool,
}

impl Flags {
    pub fn warnings() -> Self {
        Self {
            warnings: true,
            ..Self::default()
        }
    }

    pub fn autosave() -> Self {
        Self {
            autosave: true,
            ..Self::default()
        }
    }

    pub fn all() -> Self {
        Self {
            warnings: true,
            autosave: true,
        }
    }
}

/// A configuration store plus the file it was loaded from.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    store: Store,
    filename: Option<PathBuf>,
    current_section: String,
    flags: Flags,
    io_ok: bool,
}

impl ConfigFile {
    /// An empty configuration with no file and default flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration and load `path` into it.
    ///
    /// A failed load does not fail construction; check [`ConfigFile::is_ok`].
    pub fn open(path: impl AsRef<Path>, flags: Flags) -> Self {
        let mut cfg = Self::with_flags(flags);
        let _ = cfg.load_from_file(path);
        cfg
    }

    /// Create a configuration pre-seeded with `defaults`.
    pub fn with_defaults(defaults: &Store, flags: Flags) -> Self {
        let mut cfg = Self::with_flags(flags);
        cfg.set_defaults(defaults);
        cfg
    }

    /// Seed `defaults`, then load `path` on top of them.
    ///
    /// Options missing from the file (or the whole file, if it cannot be read)
    /// keep their default values.
    pub fn open_with_defaults(path: impl AsRef<Path>, defaults: &Store, flags: Flags) -> Self {
        let mut cfg = Self::with_defaults(defaults, flags);
        let _ = cfg.load_from_file(path);
        cfg
    }

    fn with_flags(flags: Flags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Run `f` against a configuration loaded from `path`, then flush it.
    ///
    /// The flush happens whatever `f` returns, so with [`Flags::autosave`]
    /// the file is always written back. The flush result is returned next to
    /// the closure's own result.
    pub fn scoped<R>(
        path: impl AsRef<Path>,
        flags: Flags,
        f: impl FnOnce(&mut ConfigFile) -> R,
    ) -> (R, Result<()>) {
        let mut cfg = Self::open(path, flags);
        let out = f(&mut cfg);
        let flushed = cfg.flush();
        (out, flushed)
    }

    // ------------------------------------------------------------------
    // Loading and saving
    // ------------------------------------------------------------------

    /// Read `path` and parse it into the store.
    ///
    /// The path is remembered even if reading fails, so a later
    /// `write_to_file(None)` creates it. On failure the store is untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.filename = Some(path.to_path_buf());
        match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded config file");
                self.load_from_string(&text);
                self.io_ok = true;
                Ok(())
            }
            Err(source) => {
                if self.flags.warnings {
                    warn!("error loading \"{}\": {source}", path.display());
                }
                self.io_ok = false;
                Err(CfgError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Parse config text into the store, on top of what is already there.
    pub fn load_from_string(&mut self, text: &str) {
        Parser::new()
            .with_warnings(self.flags.warnings)
            .parse_str(text, &mut self.store);
    }

    /// Serialize the store to `path`, or to the last loaded file when `None`.
    ///
    /// The target is truncated and rewritten. The store is never modified.
    pub fn write_to_file(&mut self, path: Option<&Path>) -> Result<()> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => self.filename.clone().ok_or(CfgError::NoFilename)?,
        };
        let result = fs::write(&target, self.build_string()).map_err(|source| CfgError::Write {
            path: target.clone(),
            source,
        });
        self.io_ok = result.is_ok();
        if result.is_ok() {
            debug!(path = %target.display(), "wrote config file");
        }
        result
    }

    /// Append the serialized store to `out`.
    pub fn write_to_string(&self, out: &mut String) {
        serializer::write_to_string(&self.store, out);
    }

    /// Serialize the store into a new string.
    pub fn build_string(&self) -> String {
        serializer::serialize(&self.store)
    }

    /// Whether the last load or write succeeded.
    pub fn is_ok(&self) -> bool {
        self.io_ok
    }

    /// Write back to the last loaded file if autosave is enabled.
    ///
    /// Does nothing (and succeeds) when autosave is off or nothing was loaded.
    pub fn flush(&mut self) -> Result<()> {
        if self.flags.autosave && self.filename.is_some() {
            self.write_to_file(None)
        } else {
            Ok(())
        }
    }

    /// Flush and drop the configuration.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn set_warnings(&mut self, warnings: bool) {
        self.flags.warnings = warnings;
    }

    pub fn set_autosave(&mut self, autosave: bool) {
        self.flags.autosave = autosave;
    }

    /// The last file passed to a load, if any.
    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    // ------------------------------------------------------------------
    // Options
    // ------------------------------------------------------------------

    /// Get or create an option in the current section.
    pub fn option_mut(&mut self, name: &str) -> &mut Value {
        self.store.option_mut(name, &self.current_section)
    }

    /// Get or create an option in `section`.
    pub fn option_in_mut(&mut self, name: &str, section: &str) -> &mut Value {
        self.store.option_mut(name, section)
    }

    /// Look up an option in the current section without creating it.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.store.option(name, &self.current_section)
    }

    pub fn option_in(&self, name: &str, section: &str) -> Option<&Value> {
        self.store.option(name, section)
    }

    pub fn option_exists(&self, name: &str) -> bool {
        self.store.option_exists(name, &self.current_section)
    }

    pub fn option_exists_in(&self, name: &str, section: &str) -> bool {
        self.store.option_exists(name, section)
    }

    /// Merge `defaults` into the store without overwriting existing options.
    pub fn set_defaults(&mut self, defaults: &Store) {
        self.store.seed_defaults(defaults);
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    /// Set the section used by the short option accessors. `""` is the default section.
    pub fn use_section(&mut self, section: &str) {
        self.current_section = section.to_string();
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Get or create the current section.
    pub fn section_mut(&mut self) -> &mut Section {
        self.store.section_mut(&self.current_section)
    }

    pub fn section_in_mut(&mut self, section: &str) -> &mut Section {
        self.store.section_mut(section)
    }

    pub fn section_exists(&self) -> bool {
        self.store.section_exists(&self.current_section)
    }

    pub fn section_exists_in(&self, section: &str) -> bool {
        self.store.section_exists(section)
    }

    // ------------------------------------------------------------------
    // Erasing
    // ------------------------------------------------------------------

    pub fn erase_option(&mut self, name: &str) -> bool {
        self.store.erase_option(name, &self.current_section)
    }

    pub fn erase_option_in(&mut self, name: &str, section: &str) -> bool {
        self.store.erase_option(name, section)
    }

    pub fn erase_section(&mut self, section: &str) -> bool {
        self.store.erase_section(section)
    }

    pub fn erase_current_section(&mut self) -> bool {
        self.store.erase_section(&self.current_section)
    }

    /// Remove all sections and options. The filename and current section are kept.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ------------------------------------------------------------------
    // Store access
    // ------------------------------------------------------------------

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.store.iter()
    }
}

impl<'a> IntoIterator for &'a ConfigFile {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}
