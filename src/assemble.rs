//! Output document assembly
//!
//! Turns the two walk artifacts, the rendered structural map and the
//! ordered collected-file list, into the combined document: the map
//! first, then every file's content under a header naming it relative
//! to the walk root. File bytes are streamed through a fixed buffer, so
//! large files never land in memory whole.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the combined document to an underlying writer.
pub struct DocumentWriter<W: Write> {
    writer: W,
}

impl DocumentWriter<BufWriter<File>> {
    /// Create the output file at `path`, truncating any previous run.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> DocumentWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the structural map, followed by a separating blank line.
    pub fn write_structure(&mut self, structure: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", structure)
    }

    /// Stream one collected file into the document under its header.
    ///
    /// The header names the file relative to `root`; a file outside the
    /// root keeps its full path. Content is copied verbatim and followed
    /// by a blank-line separator.
    pub fn append_file(&mut self, root: &Path, path: &Path) -> io::Result<()> {
        let shown = path.strip_prefix(root).unwrap_or(path);
        writeln!(self.writer, "File content {}:", shown.display())?;
        let mut source = File::open(path)?;
        io::copy(&mut source, &mut self.writer)?;
        writeln!(self.writer)?;
        writeln!(self.writer)
    }

    /// Flush and drop the writer.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Assemble the whole document in one call: the structural map, then
/// each collected file in list order.
pub fn write_document(
    out: &Path,
    root: &Path,
    structure: &str,
    files: &[PathBuf],
) -> io::Result<()> {
    let mut writer = DocumentWriter::create(out)?;
    writer.write_structure(structure)?;
    for file in files {
        writer.append_file(root, file)?;
    }
    writer.finish()
}
