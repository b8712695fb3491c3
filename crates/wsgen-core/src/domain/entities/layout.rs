use std::path::{Path, PathBuf};

/// Path arithmetic for a generated workspace.
///
/// Pure data: nothing here touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    root: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tmp(&self) -> PathBuf {
        self.root.join("tmp")
    }

    pub fn cores(&self) -> PathBuf {
        self.root.join("cores")
    }

    pub fn libs(&self) -> PathBuf {
        self.root.join("libs")
    }

    /// Shared UVM library component folder.
    pub fn uvm_lib(&self) -> PathBuf {
        self.libs().join("uvm")
    }

    pub fn core(&self, name: &str) -> CoreLayout {
        CoreLayout {
            base: self.cores().join(name),
        }
    }

    /// Every directory `execute` creates, in creation order.
    ///
    /// Intermediate directories made implicitly by `create_dir_all`
    /// (`cores/<core>` and `cores/<core>/sim`) are not listed.
    pub fn directories(&self, cores: &[String]) -> Vec<PathBuf> {
        let mut dirs = vec![self.tmp(), self.cores(), self.libs()];
        for name in cores {
            let core = self.core(name);
            dirs.extend([core.rtl(), core.env(), core.tb(), core.syn()]);
        }
        dirs.push(self.uvm_lib());
        dirs
    }
}

/// Per-core directory layout under `cores/<core>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreLayout {
    base: PathBuf,
}

impl CoreLayout {
    pub fn rtl(&self) -> PathBuf {
        self.base.join("rtl")
    }

    pub fn env(&self) -> PathBuf {
        self.base.join("sim").join("env")
    }

    pub fn tb(&self) -> PathBuf {
        self.base.join("sim").join("tb")
    }

    pub fn syn(&self) -> PathBuf {
        self.base.join("syn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_paths_follow_convention() {
        let layout = WorkspaceLayout::new("/tmp/ws1");
        let cpu = layout.core("cpu");
        assert_eq!(cpu.rtl(), PathBuf::from("/tmp/ws1/cores/cpu/rtl"));
        assert_eq!(cpu.env(), PathBuf::from("/tmp/ws1/cores/cpu/sim/env"));
        assert_eq!(cpu.tb(), PathBuf::from("/tmp/ws1/cores/cpu/sim/tb"));
        assert_eq!(cpu.syn(), PathBuf::from("/tmp/ws1/cores/cpu/syn"));
    }

    #[test]
    fn directories_without_cores() {
        let layout = WorkspaceLayout::new("ws");
        assert_eq!(
            layout.directories(&[]),
            ["ws/tmp", "ws/cores", "ws/libs", "ws/libs/uvm"]
                .map(PathBuf::from)
                .to_vec()
        );
    }

    #[test]
    fn directories_list_cores_in_order() {
        let layout = WorkspaceLayout::new("ws");
        let dirs = layout.directories(&["b".into(), "a".into()]);
        assert_eq!(dirs.len(), 4 + 2 * 4);
        assert_eq!(dirs[3], PathBuf::from("ws/cores/b/rtl"));
        assert_eq!(dirs[7], PathBuf::from("ws/cores/a/rtl"));
        assert_eq!(dirs.last(), Some(&PathBuf::from("ws/libs/uvm")));
    }
}
