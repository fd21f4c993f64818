//! Module `workspace`
//!
//! Holds the named folders a shell session works on and routes
//! cross-folder transfers between them.

use log::debug;

use crate::error::{FolderError, ShellError, StoreError};
use crate::storage::Folder;

/// Named folders in creation order, bounded by `max_folders`.
#[derive(Debug)]
pub struct Workspace {
    folders: Vec<Folder>,
    max_folders: usize,
}

impl Workspace {
    pub fn new(max_folders: usize) -> Self {
        Self {
            folders: Vec::new(),
            max_folders,
        }
    }

    fn index_of(&self, name: &str) -> Result<usize, ShellError> {
        self.folders
            .iter()
            .position(|f| f.name() == name)
            .ok_or_else(|| ShellError::FolderNotFound(name.to_string()))
    }

    /// Two disjoint mutable borrows; `a` and `b` must differ.
    fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Folder, &mut Folder) {
        if a < b {
            let (left, right) = self.folders.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.folders.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    /// Creates a folder and returns its final name (`NewFolder` for an empty name).
    pub fn create_folder(&mut self, name: &str) -> Result<String, StoreError> {
        let folder = Folder::new(name)?;

        if self.folder(folder.name()).is_some() {
            return Err(ShellError::FolderAlreadyExists(folder.name().to_string()).into());
        }

        if self.folders.len() >= self.max_folders {
            return Err(ShellError::FolderLimitReached(self.max_folders).into());
        }

        let created = folder.name().to_string();
        debug!("Created folder {}", created);
        self.folders.push(folder);
        Ok(created)
    }

    /// Removes a folder together with every file it owns.
    pub fn remove_folder(&mut self, name: &str) -> Result<Folder, StoreError> {
        let index = self.index_of(name)?;
        debug!("Removed folder {}", name);
        Ok(self.folders.remove(index))
    }

    pub fn rename_folder(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        let index = self.index_of(old)?;

        if old != new && self.folder(new).is_some() {
            return Err(ShellError::FolderAlreadyExists(new.to_string()).into());
        }

        self.folders[index].rename(new)?;
        Ok(())
    }

    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name() == name)
    }

    pub fn folder_mut(&mut self, name: &str) -> Result<&mut Folder, ShellError> {
        let index = self.index_of(name)?;
        Ok(&mut self.folders[index])
    }

    pub fn folder_names(&self) -> Vec<String> {
        self.folders.iter().map(|f| f.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Moves `file` between folders. Moving within one folder succeeds
    /// without changing anything.
    pub fn move_file(&mut self, file: &str, from: &str, to: &str) -> Result<(), StoreError> {
        let source = self.index_of(from)?;
        let destination = self.index_of(to)?;

        if source == destination {
            return Ok(());
        }

        let (source, destination) = self.pair_mut(source, destination);
        source.move_file_to(file, destination)?;
        Ok(())
    }

    /// Copies `file` between folders.
    ///
    /// Copying within one folder always collides with the original.
    pub fn copy_file(&mut self, file: &str, from: &str, to: &str) -> Result<(), StoreError> {
        let source = self.index_of(from)?;
        let destination = self.index_of(to)?;

        if source == destination {
            let err = if self.folders[source].contains(file) {
                FolderError::FileAlreadyExists(file.to_string())
            } else {
                FolderError::FileNotFound(file.to_string())
            };
            return Err(err.into());
        }

        let (source, destination) = self.pair_mut(source, destination);
        source.copy_file_to(file, destination)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::storage::File;

    fn workspace_with(names: &[&str]) -> Workspace {
        let mut ws = Workspace::new(8);
        for name in names {
            ws.create_folder(name).unwrap();
        }
        ws
    }

    #[test]
    fn test_create_folder() {
        let mut ws = Workspace::new(2);
        assert_eq!(ws.create_folder("").unwrap(), "NewFolder");
        assert!(matches!(
            ws.create_folder("NewFolder"),
            Err(StoreError::Shell(ShellError::FolderAlreadyExists(_)))
        ));
        assert!(matches!(
            ws.create_folder("bad name!"),
            Err(StoreError::Format(FormatError::InvalidFolderName(_)))
        ));
        ws.create_folder("Second").unwrap();
        assert!(matches!(
            ws.create_folder("Third"),
            Err(StoreError::Shell(ShellError::FolderLimitReached(2)))
        ));
        assert_eq!(ws.folder_names(), vec!["NewFolder", "Second"]);
    }

    #[test]
    fn test_move_within_same_folder_is_noop() {
        let mut ws = workspace_with(&["A"]);
        ws.folder_mut("A")
            .unwrap()
            .add_file(File::new("x.txt", "abc", None).unwrap())
            .unwrap();

        assert!(ws.move_file("x.txt", "A", "A").is_ok());
        assert!(ws.move_file("missing.txt", "A", "A").is_ok());
        assert_eq!(ws.folder("A").unwrap().len(), 1);
    }

    #[test]
    fn test_move_and_copy_between_folders() {
        let mut ws = workspace_with(&["A", "B"]);
        ws.folder_mut("A")
            .unwrap()
            .add_file(File::new("x.txt", "12345", None).unwrap())
            .unwrap();

        ws.copy_file("x.txt", "A", "B").unwrap();
        assert_eq!(ws.folder("A").unwrap().size(), 5);
        assert_eq!(ws.folder("B").unwrap().size(), 5);

        assert!(matches!(
            ws.move_file("x.txt", "B", "A"),
            Err(StoreError::Folder(FolderError::FileAlreadyExists(_)))
        ));

        ws.folder_mut("B").unwrap().remove_file("x.txt").unwrap();
        ws.move_file("x.txt", "A", "B").unwrap();
        assert!(ws.folder("A").unwrap().is_empty());
        assert!(ws.folder("B").unwrap().contains("x.txt"));
    }

    #[test]
    fn test_copy_within_same_folder_fails() {
        let mut ws = workspace_with(&["A"]);
        ws.folder_mut("A")
            .unwrap()
            .add_file(File::named("x.txt").unwrap())
            .unwrap();

        assert!(matches!(
            ws.copy_file("x.txt", "A", "A"),
            Err(StoreError::Folder(FolderError::FileAlreadyExists(_)))
        ));
        assert!(matches!(
            ws.copy_file("y.txt", "A", "A"),
            Err(StoreError::Folder(FolderError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_rename_and_remove_folder() {
        let mut ws = workspace_with(&["A", "B"]);
        assert!(matches!(
            ws.rename_folder("A", "B"),
            Err(StoreError::Shell(ShellError::FolderAlreadyExists(_)))
        ));
        assert!(matches!(
            ws.rename_folder("A", ""),
            Err(StoreError::Folder(FolderError::InvalidName(_)))
        ));
        ws.rename_folder("A", "C").unwrap();
        assert_eq!(ws.folder_names(), vec!["C", "B"]);

        let removed = ws.remove_folder("C").unwrap();
        assert_eq!(removed.name(), "C");
        assert!(matches!(
            ws.remove_folder("C"),
            Err(StoreError::Shell(ShellError::FolderNotFound(_)))
        ));
        assert_eq!(ws.len(), 1);
    }
}
