//! Module `folder`
//!
//! Defines the `Folder` container: a validated name and an ordered list of
//! uniquely named files it owns by value.

use log::{debug, info};
use std::io::{self, Write};

use crate::error::{FolderError, FormatError};
use crate::storage::file::File;
use crate::storage::validation::{DEFAULT_FOLDER_NAME, is_alphanumeric_name, validate_folder_name};

/// A flat folder of files.
///
/// File names are unique within a folder. Failed operations leave every
/// folder involved unmodified.
#[derive(Debug, Clone)]
pub struct Folder {
    name: String,
    files: Vec<File>,
}

impl Default for Folder {
    fn default() -> Self {
        Self {
            name: DEFAULT_FOLDER_NAME.to_string(),
            files: Vec::new(),
        }
    }
}

impl Folder {
    /// Creates an empty folder. An empty name selects `NewFolder`.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidFolderName` if `name` contains anything
    /// other than ASCII alphanumerics.
    pub fn new(name: &str) -> Result<Self, FormatError> {
        if name.is_empty() {
            return Ok(Self::default());
        }

        validate_folder_name(name)?;

        Ok(Self {
            name: name.to_string(),
            files: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the folder. Empty and non-alphanumeric names are rejected.
    pub fn rename(&mut self, new_name: &str) -> Result<(), FolderError> {
        if new_name.is_empty() || !is_alphanumeric_name(new_name) {
            return Err(FolderError::InvalidName(new_name.to_string()));
        }

        debug!("Renamed folder {} to {}", self.name, new_name);
        self.name = new_name.to_string();
        Ok(())
    }

    /// Total size of all contained files in bytes.
    pub fn size(&self) -> usize {
        self.files.iter().map(File::size).sum()
    }

    /// Files in their current order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|f| f.name() == name)
    }

    pub fn file_mut(&mut self, name: &str) -> Option<&mut File> {
        self.files.iter_mut().find(|f| f.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.files.iter().position(|f| f.name() == name)
    }

    /// Moves `file` into the folder, keeping insertion order.
    ///
    /// The `EmptyName` check is a guard only: `File` construction never
    /// yields an empty name, so the public API cannot trigger it.
    pub fn add_file(&mut self, file: File) -> Result<(), FolderError> {
        if file.name().is_empty() {
            return Err(FolderError::EmptyName);
        }

        if self.contains(file.name()) {
            return Err(FolderError::FileAlreadyExists(file.name().to_string()));
        }

        debug!("Added {} to folder {}", file.name(), self.name);
        self.files.push(file);
        Ok(())
    }

    /// Removes the file called `name` and hands it back to the caller.
    pub fn remove_file(&mut self, name: &str) -> Result<File, FolderError> {
        let pos = self
            .position(name)
            .ok_or_else(|| FolderError::FileNotFound(name.to_string()))?;

        debug!("Removed {} from folder {}", name, self.name);
        Ok(self.files.remove(pos))
    }

    /// Transfers the file called `name` to the end of `destination`.
    ///
    /// Fails without touching either folder if the file is missing here or
    /// `destination` already has a file with that name.
    pub fn move_file_to(
        &mut self,
        name: &str,
        destination: &mut Folder,
    ) -> Result<(), FolderError> {
        let pos = self
            .position(name)
            .ok_or_else(|| FolderError::FileNotFound(name.to_string()))?;

        if destination.contains(name) {
            return Err(FolderError::FileAlreadyExists(name.to_string()));
        }

        let file = self.files.remove(pos);
        destination.files.push(file);

        info!("Moved {} from {} to {}", name, self.name, destination.name);
        Ok(())
    }

    /// Appends a deep copy of the file called `name` to `destination`.
    pub fn copy_file_to(&self, name: &str, destination: &mut Folder) -> Result<(), FolderError> {
        let file = self
            .file(name)
            .ok_or_else(|| FolderError::FileNotFound(name.to_string()))?;

        if destination.contains(name) {
            return Err(FolderError::FileAlreadyExists(name.to_string()));
        }

        destination.files.push(file.clone());

        info!("Copied {} from {} to {}", name, self.name, destination.name);
        Ok(())
    }

    /// Sorts the files by name and prints the listing to stdout.
    pub fn display(&mut self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_listing(&mut out)
    }

    /// Sorts the files by name, then writes the folder name followed by each
    /// file name indented by three spaces.
    ///
    /// Sorted order is not kept between calls; every listing re-sorts.
    pub fn write_listing<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.files.sort();

        writeln!(out, "{}", self.name)?;
        for file in &self.files {
            writeln!(out, "   {}", file.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, contents: &str) -> File {
        File::new(name, contents, None).unwrap()
    }

    fn listing(folder: &mut Folder) -> String {
        let mut out = Vec::new();
        folder.write_listing(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_new_folder_names() {
        assert_eq!(Folder::new("").unwrap().name(), "NewFolder");
        assert_eq!(Folder::new("MyFolder").unwrap().name(), "MyFolder");
        assert_eq!(
            Folder::new("bad name!").unwrap_err(),
            FormatError::InvalidFolderName("bad name!".into())
        );
    }

    #[test]
    fn test_rename() {
        let mut folder = Folder::new("Docs").unwrap();

        assert_eq!(
            folder.rename("not ok"),
            Err(FolderError::InvalidName("not ok".into()))
        );
        assert_eq!(folder.name(), "Docs");

        assert_eq!(folder.rename(""), Err(FolderError::InvalidName(String::new())));
        assert_eq!(folder.name(), "Docs");

        assert!(folder.rename("Archive2").is_ok());
        assert_eq!(folder.name(), "Archive2");
    }

    #[test]
    fn test_add_duplicate_rejected() {
        let mut folder = Folder::new("MyFolder").unwrap();
        assert!(folder.add_file(file("file1.txt", "Content1")).is_ok());
        assert_eq!(folder.size(), 8);

        assert_eq!(
            folder.add_file(file("file1.txt", "longer contents")),
            Err(FolderError::FileAlreadyExists("file1.txt".into()))
        );
        assert_eq!(folder.size(), 8);
        assert_eq!(folder.len(), 1);
    }

    #[test]
    fn test_default_and_taken_files_have_names() {
        let mut folder = Folder::new("MyFolder").unwrap();
        let mut source = file("keep.txt", "data");
        let taken = std::mem::take(&mut source);

        assert!(!source.name().is_empty());
        assert!(folder.add_file(taken).is_ok());
        assert!(folder.add_file(source).is_ok());
        assert_eq!(
            folder.add_file(File::default()),
            Err(FolderError::FileAlreadyExists("NewFile.txt".into()))
        );
        assert_eq!(folder.len(), 2);
    }

    #[test]
    fn test_remove_file() {
        let mut folder = Folder::new("MyFolder").unwrap();
        folder.add_file(file("file1.txt", "Content1")).unwrap();

        let removed = folder.remove_file("file1.txt").unwrap();
        assert_eq!(removed.contents(), "Content1");
        assert!(folder.is_empty());

        assert_eq!(
            folder.remove_file("file1.txt").unwrap_err(),
            FolderError::FileNotFound("file1.txt".into())
        );
    }

    #[test]
    fn test_size_and_move_scenario() {
        let mut a = Folder::new("A").unwrap();
        let mut b = Folder::new("B").unwrap();
        a.add_file(file("x.txt", "12345")).unwrap();
        a.add_file(file("y.txt", "123")).unwrap();
        assert_eq!(a.size(), 8);

        a.move_file_to("x.txt", &mut b).unwrap();
        assert_eq!(a.size(), 3);
        assert_eq!(b.size(), 5);
        assert!(!a.contains("x.txt"));
        assert!(b.contains("x.txt"));
    }

    #[test]
    fn test_move_into_conflicting_destination() {
        let mut source = Folder::new("Source").unwrap();
        let mut dest = Folder::new("Dest").unwrap();
        source.add_file(file("same.txt", "from source")).unwrap();
        dest.add_file(file("same.txt", "dest")).unwrap();

        assert_eq!(
            source.move_file_to("same.txt", &mut dest),
            Err(FolderError::FileAlreadyExists("same.txt".into()))
        );
        assert_eq!(source.file("same.txt").unwrap().contents(), "from source");
        assert_eq!(dest.len(), 1);
        assert_eq!(dest.file("same.txt").unwrap().contents(), "dest");
    }

    #[test]
    fn test_move_missing_file() {
        let mut source = Folder::new("Source").unwrap();
        let mut dest = Folder::new("Dest").unwrap();
        assert_eq!(
            source.move_file_to("nonexistent.txt", &mut dest),
            Err(FolderError::FileNotFound("nonexistent.txt".into()))
        );
        assert!(dest.is_empty());
    }

    #[test]
    fn test_move_keeps_icon_allocation() {
        let mut source = Folder::new("Source").unwrap();
        let mut dest = Folder::new("Dest").unwrap();
        let icon = crate::storage::Icon::new([1, 2, 3, 4]);
        source
            .add_file(File::new("pic.png", "", Some(icon)).unwrap())
            .unwrap();
        let before: *const [i32; 4] = source.file("pic.png").unwrap().icon().unwrap().pixels();

        source.move_file_to("pic.png", &mut dest).unwrap();
        let after: *const [i32; 4] = dest.file("pic.png").unwrap().icon().unwrap().pixels();
        assert!(std::ptr::eq(before, after));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut source = Folder::new("Source").unwrap();
        let mut dest = Folder::new("Dest").unwrap();
        source.add_file(file("doc.txt", "original")).unwrap();

        source.copy_file_to("doc.txt", &mut dest).unwrap();
        dest.file_mut("doc.txt").unwrap().set_contents("changed");

        assert_eq!(source.file("doc.txt").unwrap().contents(), "original");
        assert_eq!(dest.file("doc.txt").unwrap().contents(), "changed");

        assert_eq!(
            source.copy_file_to("doc.txt", &mut dest),
            Err(FolderError::FileAlreadyExists("doc.txt".into()))
        );
        assert_eq!(
            source.copy_file_to("missing.txt", &mut dest),
            Err(FolderError::FileNotFound("missing.txt".into()))
        );
        assert_eq!(dest.len(), 1);
    }

    #[test]
    fn test_listing_sorts_in_place() {
        let mut folder = Folder::new("Root").unwrap();
        folder.add_file(file("b.txt", "")).unwrap();
        folder.add_file(file("a.txt", "")).unwrap();

        assert_eq!(listing(&mut folder), "Root\n   a.txt\n   b.txt\n");
        assert_eq!(folder.files()[0].name(), "a.txt");
    }

    #[test]
    fn test_listing_empty_folder() {
        let mut folder = Folder::default();
        assert_eq!(listing(&mut folder), "NewFolder\n");
    }
}
